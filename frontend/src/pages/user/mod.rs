pub mod components;
mod panel;

pub use panel::UserDashboardPage;
