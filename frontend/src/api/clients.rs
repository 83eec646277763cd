use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn list_clients(&self) -> Result<Vec<ClientProfile>, ApiError> {
        self.get_json("/clients").await
    }

    pub async fn get_client(&self, id: i64) -> Result<ClientProfile, ApiError> {
        self.get_json(&format!("/clients/{}", id)).await
    }

    pub async fn list_clients_by_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<ClientProfile>, ApiError> {
        self.get_json(&format!("/clients/organization/{}", organization_id))
            .await
    }

    pub async fn find_client_by_email(&self, email: &str) -> Result<ClientProfile, ApiError> {
        self.get_json_with_query("/clients/find-by-email", &[("email", email)])
            .await
    }

    pub async fn find_clients_by_first_name(&self, first_name: &str) -> Result<Vec<ClientProfile>, ApiError> {
        self.get_json_with_query("/clients/find-by-first-name", &[("firstName", first_name)])
            .await
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<ClientProfile, ApiError> {
        self.post_json("/clients/add", payload).await
    }

    pub async fn update_client(&self, id: i64, payload: &ClientPayload) -> Result<ClientProfile, ApiError> {
        self.put_json(&format!("/clients/edit/{}", id), payload).await
    }

    pub async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("/clients/delete/{}", id))
            .await
    }
}
