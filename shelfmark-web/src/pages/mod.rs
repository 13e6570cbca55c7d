mod auth;
mod dashboard;
mod error;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
