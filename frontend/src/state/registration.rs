use leptos::*;
use serde_json::Value;

use crate::api::{ApiClient, ApiError, RegisterOrganizationRequest};
use crate::state::resource::{LoadState, Loader};
use crate::state::{session, use_api};
use crate::utils::validation;

/// Where a successful self-registration lands.
pub const REGISTERED_REDIRECT: &str = "/portal?registered=1";

/// Organization sign-up checks, in the order the form lists the fields.
pub fn validate_registration(request: &RegisterOrganizationRequest) -> Result<(), String> {
    if request.organization_name.trim().is_empty() {
        return Err("Organization name is required".into());
    }
    validation::validate_username(&request.username)?;
    if request.name.trim().is_empty() || request.surname.trim().is_empty() {
        return Err("Name and surname are required".into());
    }
    validation::validate_email(&request.email)?;
    validation::validate_password_pair(&request.password, &request.repeat_password)?;
    validation::validate_optional_phone(&request.contact_phone)
}

#[derive(Clone, Copy)]
pub struct RegistrationHook {
    pub loader: Loader<Value>,
    api: StoredValue<ApiClient>,
}

impl RegistrationHook {
    pub fn new(api: ApiClient) -> Self {
        Self {
            loader: Loader::new(),
            api: store_value(api),
        }
    }

    pub fn state(&self) -> Signal<LoadState<Value>> {
        self.loader.state.into()
    }

    /// Invalid input fails locally. On success any stale session is dropped
    /// and the browser goes to the portal with the success banner.
    pub async fn submit(&self, mut request: RegisterOrganizationRequest) -> Result<Value, ApiError> {
        if let Err(msg) = validate_registration(&request) {
            let err = ApiError::validation(msg);
            self.loader.state.set(LoadState::Failed(err.clone()));
            return Err(err);
        }
        request.username = request.username.trim().to_string();
        request.email = request.email.trim().to_string();

        let api = self.api.get_value();
        let created = {
            let api = api.clone();
            self.loader
                .load(async move { api.register_organization(&request).await })
                .await?
        };
        log::info!("Organization registered");
        session::clear_session(&*api.store());
        api.navigator().redirect(REGISTERED_REDIRECT);
        Ok(created)
    }
}

pub fn use_registration() -> RegistrationHook {
    RegistrationHook::new(use_api())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::tests::valid_request;
    use super::*;
    use crate::api::test_support::TestClient;
    use crate::state::session::TOKEN_KEY;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn mismatched_passwords_issue_no_request() {
        let server = MockServer::start_async().await;
        let register = server.mock(|when, then| {
            when.method(POST).path("/api/users/registerOrganization");
            then.status(200).body("ok");
        });
        let client = TestClient::new(&server);

        let runtime = create_runtime();
        let hook = RegistrationHook::new(client.api.clone());
        let err = hook
            .submit(RegisterOrganizationRequest {
                repeat_password: "secret2".into(),
                ..valid_request()
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Passwords do not match");
        assert_eq!(register.hits(), 0);
        assert!(client.navigator.visits().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn success_drops_stale_token_and_lands_on_portal() {
        let server = MockServer::start_async().await;
        let register = server.mock(|when, then| {
            when.method(POST)
                .path("/api/users/registerOrganization")
                .json_body_partial(r#"{"organizationName":"Northwind","username":"mila"}"#);
            then.status(200).body("Organization registered");
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = RegistrationHook::new(client.api.clone());
        let created = hook.submit(valid_request()).await.unwrap();

        register.assert();
        assert_eq!(created, Value::String("Organization registered".into()));
        assert!(!client.store.contains(TOKEN_KEY));
        assert_eq!(client.navigator.visits(), vec![REGISTERED_REDIRECT.to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn backend_rejection_stays_on_form() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users/registerOrganization");
            then.status(409)
                .json_body(serde_json::json!({ "message": "Username already exists" }));
        });
        let client = TestClient::new(&server);

        let runtime = create_runtime();
        let hook = RegistrationHook::new(client.api.clone());
        let err = hook.submit(valid_request()).await.unwrap_err();
        assert_eq!(err.error, "Username already exists");
        assert!(client.navigator.visits().is_empty());
        assert!(hook.state().get_untracked().error().is_some());
        runtime.dispose();
    }
}
