pub mod components;
mod edit_organization;
mod panel;
mod view_model;

pub use edit_organization::EditOrganizationPage;
pub use panel::ManagerDashboardPage;
