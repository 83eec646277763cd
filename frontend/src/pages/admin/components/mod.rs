pub mod organization_form;
pub mod organizations;
pub mod users;

pub use organization_form::{OrganizationFields, OrganizationForm};
pub use organizations::OrganizationTable;
pub use users::UsersSection;
