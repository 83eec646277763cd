mod analytics;
mod billing;
pub mod client;
mod clients;
mod comments;
mod notifications;
mod organizations;
mod records;
mod tasks;
pub mod types;
mod users;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
