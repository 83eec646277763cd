use crate::api::{ApiClient, ApiError, Organization, OrganizationPayload};
use crate::state::resource::{CrudResource, ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationScope {
    All,
    /// Organizations of the signed-in manager.
    Mine,
}

pub struct Organizations;

impl ListResource for Organizations {
    type Item = Organization;
    type Query = OrganizationScope;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "organization";

    async fn fetch(api: &ApiClient, query: &OrganizationScope) -> Result<Vec<Organization>, ApiError> {
        match query {
            OrganizationScope::All => api.list_organizations().await,
            OrganizationScope::Mine => api.list_my_organizations().await,
        }
    }
}

impl CrudResource for Organizations {
    type Payload = OrganizationPayload;

    fn validate(payload: &OrganizationPayload) -> Result<(), ApiError> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::validation("Organization name is required"));
        }
        Ok(())
    }

    async fn create(api: &ApiClient, payload: &OrganizationPayload) -> Result<Organization, ApiError> {
        api.create_organization(payload).await
    }

    async fn update(
        api: &ApiClient,
        id: i64,
        payload: &OrganizationPayload,
    ) -> Result<Organization, ApiError> {
        api.update_organization(id, payload).await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
        api.delete_organization(id).await
    }
}

pub type OrganizationsHook = ResourceHook<Organizations>;

pub fn use_organizations() -> OrganizationsHook {
    ResourceHook::new(use_api())
}
