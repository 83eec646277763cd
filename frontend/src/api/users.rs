use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/users/login", request).await
    }

    pub async fn register(&self, request: &RegisterUserRequest) -> Result<UserSummary, ApiError> {
        self.post_json("/users/register", request).await
    }

    pub async fn register_organization(
        &self,
        request: &RegisterOrganizationRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let body = self
            .send_text(Method::POST, "/users/registerOrganization", request)
            .await?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn list_managers(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json("/users/managers").await
    }

    pub async fn list_users_by_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json(&format!("/users/organization/{}", organization_id))
            .await
    }

    /// Plain USER-role members of an organization.
    pub async fn list_organization_members(
        &self,
        organization_id: i64,
    ) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json_with_query(
            "/users/organization/users",
            &[("organizationId", organization_id)],
        )
        .await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserSummary, ApiError> {
        self.post_json("/users/create", request).await
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let body = self
            .send_text(Method::PUT, "/users/update-profile", request)
            .await?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.send_text(Method::PUT, "/users/change-password", request)
            .await
            .map(|_| ())
    }
}
