use shared::models::User;
use yewdux::Store;

/// Session context shared across components.
///
/// Initialized from the session store at app start and reset at logout;
/// components read the current user through selectors instead of touching
/// browser storage directly.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
}
