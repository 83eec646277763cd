use crate::api::{ApiClient, ApiError, CreateUserRequest, Role, UserSummary};
use crate::state::resource::{ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;
use crate::utils::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserQuery {
    All,
    Managers,
    ByOrganization(i64),
    /// USER-role members only.
    MembersOf(i64),
}

pub struct Users;

impl ListResource for Users {
    type Item = UserSummary;
    type Query = UserQuery;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "user";

    async fn fetch(api: &ApiClient, query: &UserQuery) -> Result<Vec<UserSummary>, ApiError> {
        match query {
            UserQuery::All => api.list_users().await,
            UserQuery::Managers => api.list_managers().await,
            UserQuery::ByOrganization(id) => api.list_users_by_organization(*id).await,
            UserQuery::MembersOf(id) => api.list_organization_members(*id).await,
        }
    }
}

pub(crate) fn validate_new_user(request: &CreateUserRequest) -> Result<(), ApiError> {
    validation::validate_username(&request.username).map_err(ApiError::validation)?;
    if request.name.trim().is_empty() || request.surname.trim().is_empty() {
        return Err(ApiError::validation("Name and surname are required"));
    }
    validation::validate_password_pair(&request.password, &request.repeat_password)
        .map_err(ApiError::validation)
}

impl ResourceHook<Users> {
    /// Creates an account inside the manager's organization. The role defaults
    /// to USER when the caller leaves it open.
    pub async fn create_user(&self, mut request: CreateUserRequest) -> Result<UserSummary, ApiError> {
        validate_new_user(&request)?;
        request.username = request.username.trim().to_string();
        request.role.get_or_insert(Role::User);
        let result = self.api().create_user(&request).await;
        self.after_mutation("create", result, RefreshPolicy::AfterMutation)
            .await
    }
}

pub type UsersHook = ResourceHook<Users>;

pub fn use_users() -> UsersHook {
    ResourceHook::new(use_api())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateUserRequest {
        CreateUserRequest {
            username: "nina".into(),
            password: "secret1".into(),
            repeat_password: "secret1".into(),
            name: "Nina".into(),
            surname: "Kos".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_user_checks() {
        assert!(validate_new_user(&request()).is_ok());
        let short = CreateUserRequest {
            username: "ni".into(),
            ..request()
        };
        assert!(validate_new_user(&short).is_err());
        let mismatch = CreateUserRequest {
            repeat_password: "secret2".into(),
            ..request()
        };
        assert_eq!(
            validate_new_user(&mismatch).unwrap_err().error,
            "Passwords do not match"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::TestClient;
    use httpmock::prelude::*;
    use leptos::*;
    use serde_json::json;

    #[tokio::test]
    async fn created_member_appears_after_refresh() {
        let server = MockServer::start_async().await;
        let members = server.mock(|when, then| {
            when.method(GET)
                .path("/api/users/organization/users")
                .query_param("organizationId", "3");
            then.status(200)
                .json_body(json!([{ "username": "nina", "role": "USER" }]));
        });
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/users/create")
                .json_body_partial(r#"{"username":"nina","role":"USER","organizationId":3}"#);
            then.status(200)
                .json_body(json!({ "username": "nina", "role": "USER" }));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = UsersHook::new(client.api.clone());
        hook.fetch(UserQuery::MembersOf(3)).await.unwrap();
        hook.create_user(CreateUserRequest {
            username: " nina ".into(),
            password: "secret1".into(),
            repeat_password: "secret1".into(),
            name: "Nina".into(),
            surname: "Kos".into(),
            organization_id: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();

        create.assert();
        assert_eq!(members.hits(), 2);
        assert_eq!(hook.items()[0].username, "nina");
        runtime.dispose();
    }
}
