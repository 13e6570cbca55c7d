pub(crate) mod book_card;
pub(crate) mod book_dialog;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod require_auth;
pub(crate) mod toast;
pub(crate) mod user_profile;

// Re-export components for convenience
pub use book_card::BookCard;
pub use book_dialog::BookDialog;
pub use language_selector::LanguageSelector;
pub use loading::Loading;
pub use toast::{Notice, Toast};
pub use user_profile::UserProfile;
