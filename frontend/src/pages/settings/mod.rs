mod panel;

pub use panel::SettingsPage;
