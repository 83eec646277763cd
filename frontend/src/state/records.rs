use crate::api::{ApiClient, ApiError, RecordEntry, RecordPayload};
use crate::state::resource::{CrudResource, ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordQuery {
    All,
    ByClient(i64),
}

pub struct Records;

impl ListResource for Records {
    type Item = RecordEntry;
    type Query = RecordQuery;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "record";

    async fn fetch(api: &ApiClient, query: &RecordQuery) -> Result<Vec<RecordEntry>, ApiError> {
        match query {
            RecordQuery::All => api.list_records().await,
            RecordQuery::ByClient(client_id) => api.list_records_by_client(*client_id).await,
        }
    }
}

impl CrudResource for Records {
    type Payload = RecordPayload;

    fn validate(payload: &RecordPayload) -> Result<(), ApiError> {
        if payload.profile_type.trim().is_empty() {
            return Err(ApiError::validation("Profile type is required"));
        }
        if !payload.json_data.trim().is_empty()
            && serde_json::from_str::<serde_json::Value>(&payload.json_data).is_err()
        {
            return Err(ApiError::validation("Record data must be valid JSON"));
        }
        Ok(())
    }

    async fn create(api: &ApiClient, payload: &RecordPayload) -> Result<RecordEntry, ApiError> {
        api.create_record(payload).await
    }

    async fn update(api: &ApiClient, id: i64, payload: &RecordPayload) -> Result<RecordEntry, ApiError> {
        api.update_record(id, payload).await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
        api.delete_record(id).await
    }
}

pub type RecordsHook = ResourceHook<Records>;

pub fn use_records() -> RecordsHook {
    ResourceHook::new(use_api())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_payload_requires_json_data() {
        let mut payload = RecordPayload {
            client_id: 1,
            profile_type: "MEDICAL".into(),
            json_data: "{\"a\":1}".into(),
        };
        assert!(Records::validate(&payload).is_ok());
        payload.json_data = "not json".into();
        assert!(Records::validate(&payload).is_err());
        payload.json_data.clear();
        payload.profile_type = " ".into();
        assert!(Records::validate(&payload).is_err());
    }
}
