#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role, UserSummary};
    use crate::state::auth::{AuthContext, AuthState};
    use crate::utils::{navigation::RecordingNavigator, storage::MemoryStorage};
    use leptos::*;

    fn user(username: &str, role: Role) -> UserSummary {
        UserSummary {
            username: username.into(),
            name: "Test".into(),
            surname: "Person".into(),
            role,
        }
    }

    pub fn admin_user() -> UserSummary {
        user("admin", Role::Admin)
    }

    pub fn manager_user() -> UserSummary {
        user("mila", Role::Manager)
    }

    pub fn regular_user() -> UserSummary {
        user("ana", Role::User)
    }

    /// Offline client: nothing leaves the process and redirects are recorded.
    pub fn offline_api() -> ApiClient {
        ApiClient::with_parts(
            Some("http://127.0.0.1:9/api".into()),
            MemoryStorage::new().shared(),
            RecordingNavigator::new().shared(),
        )
    }

    pub fn provide_auth_state(state: AuthState) -> AuthContext {
        let api = offline_api();
        provide_context(api.clone());
        let ctx = AuthContext::with_state(api, state);
        provide_context(ctx);
        ctx
    }

    pub fn provide_auth(user: Option<UserSummary>) -> AuthContext {
        let state = match user {
            Some(user) => AuthState::signed_in(user, "test-token"),
            None => AuthState::default(),
        };
        provide_auth_state(state)
    }
}
