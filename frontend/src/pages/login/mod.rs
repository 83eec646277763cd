pub mod panel;
pub mod portal;
pub mod view_model;

pub use panel::{AdminLoginPage, LoginPortal, ManagerLoginPage, UserLoginPage};
pub use portal::{LoginPortalConfig, ADMIN_PORTAL, MANAGER_PORTAL, USER_PORTAL};
