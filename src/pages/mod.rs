pub mod admin;
pub mod base;
pub mod dashboard;
pub mod login;

pub use admin::AdminPage;
pub use base::{BasePage, Locator, DEFAULT_WAIT, VISIBILITY_WAIT};
pub use dashboard::DashboardPage;
pub use login::LoginPage;
