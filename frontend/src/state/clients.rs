use crate::api::{ApiClient, ApiError, ClientPayload, ClientProfile};
use crate::state::resource::{CrudResource, ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;
use crate::utils::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientQuery {
    All,
    ByOrganization(i64),
}

pub struct Clients;

impl ListResource for Clients {
    type Item = ClientProfile;
    type Query = ClientQuery;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "client";

    async fn fetch(api: &ApiClient, query: &ClientQuery) -> Result<Vec<ClientProfile>, ApiError> {
        match query {
            ClientQuery::All => api.list_clients().await,
            ClientQuery::ByOrganization(id) => api.list_clients_by_organization(*id).await,
        }
    }
}

impl CrudResource for Clients {
    type Payload = ClientPayload;

    fn validate(payload: &ClientPayload) -> Result<(), ApiError> {
        if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
            return Err(ApiError::validation("First and last name are required"));
        }
        if !payload.email.trim().is_empty() {
            validation::validate_email(&payload.email).map_err(ApiError::validation)?;
        }
        validation::validate_optional_phone(&payload.phone_number).map_err(ApiError::validation)
    }

    async fn create(api: &ApiClient, payload: &ClientPayload) -> Result<ClientProfile, ApiError> {
        api.create_client(payload).await
    }

    async fn update(api: &ApiClient, id: i64, payload: &ClientPayload) -> Result<ClientProfile, ApiError> {
        api.update_client(id, payload).await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
        api.delete_client(id).await
    }
}

pub type ClientsHook = ResourceHook<Clients>;

pub fn use_clients() -> ClientsHook {
    ResourceHook::new(use_api())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::TestClient;
    use httpmock::prelude::*;
    use leptos::*;
    use serde_json::json;

    #[tokio::test]
    async fn add_refreshes_organization_clients() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/clients/organization/3");
            then.status(200).json_body(json!([]));
        });
        let add = server.mock(|when, then| {
            when.method(POST)
                .path("/api/clients/add")
                .json_body_partial(r#"{"firstName":"Iva","organizationId":3}"#);
            then.status(200)
                .json_body(json!({ "id": 1, "firstName": "Iva", "lastName": "M" }));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = ClientsHook::new(client.api.clone());
        hook.fetch(ClientQuery::ByOrganization(3)).await.unwrap();
        hook.add(ClientPayload {
            first_name: "Iva".into(),
            last_name: "M".into(),
            email: "iva@example.test".into(),
            organization_id: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
        add.assert();
        assert_eq!(list.hits(), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn malformed_phone_never_reaches_backend() {
        let server = MockServer::start_async().await;
        let add = server.mock(|when, then| {
            when.method(POST).path("/api/clients/add");
            then.status(200).json_body(json!({ "id": 1 }));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = ClientsHook::new(client.api.clone());
        let err = hook
            .add(ClientPayload {
                first_name: "Iva".into(),
                last_name: "M".into(),
                phone_number: "call me".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(add.hits(), 0);
        runtime.dispose();
    }
}
