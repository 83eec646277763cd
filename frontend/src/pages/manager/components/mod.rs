pub mod billing;
pub mod clients;
pub mod members;
pub mod records;
pub mod tasks;

pub use billing::BillingSection;
pub use clients::ClientsSection;
pub use members::MembersSection;
pub use records::ClientRecords;
pub use tasks::TasksSection;
