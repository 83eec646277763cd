use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.get_json("/organizations").await
    }

    pub async fn get_organization(&self, id: i64) -> Result<Organization, ApiError> {
        self.get_json(&format!("/organizations/{}", id)).await
    }

    /// Organizations the signed-in manager belongs to.
    pub async fn list_my_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.get_json("/organizations/my-organizations").await
    }

    pub async fn create_organization(
        &self,
        payload: &OrganizationPayload,
    ) -> Result<Organization, ApiError> {
        self.post_json("/organizations/add", payload).await
    }

    pub async fn update_organization(
        &self,
        id: i64,
        payload: &OrganizationPayload,
    ) -> Result<Organization, ApiError> {
        self.put_json(&format!("/organizations/edit/{}", id), payload)
            .await
    }

    pub async fn delete_organization(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("/organizations/delete/{}", id))
            .await
    }
}
