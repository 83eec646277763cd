pub mod admin;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod manager;
pub mod portal;
pub mod register;
pub mod settings;
pub mod user;

pub use admin::AdminDashboardPage;
pub use dashboard::DashboardDispatcher;
pub use landing::LandingPage;
pub use login::{AdminLoginPage, ManagerLoginPage, UserLoginPage};
pub use manager::{EditOrganizationPage, ManagerDashboardPage};
pub use portal::PortalPage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
pub use user::UserDashboardPage;
