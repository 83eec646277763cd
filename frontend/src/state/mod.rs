pub mod analytics;
pub mod auth;
pub mod billing;
pub mod clients;
pub mod comments;
pub mod notifications;
pub mod organizations;
pub mod polling;
pub mod records;
pub mod registration;
pub mod resource;
pub mod session;
pub mod settings;
pub mod tasks;
pub mod users;

use crate::api::ApiClient;
use leptos::use_context;

/// Client for hooks: the provided one, else the auth context's.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| auth::use_auth().api())
}
