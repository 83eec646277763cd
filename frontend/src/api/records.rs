use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn list_records(&self) -> Result<Vec<RecordEntry>, ApiError> {
        self.get_json("/records").await
    }

    pub async fn get_record(&self, id: i64) -> Result<RecordEntry, ApiError> {
        self.get_json(&format!("/records/{}", id)).await
    }

    pub async fn list_records_by_client(&self, client_id: i64) -> Result<Vec<RecordEntry>, ApiError> {
        self.get_json(&format!("/records/client/{}", client_id)).await
    }

    pub async fn create_record(&self, payload: &RecordPayload) -> Result<RecordEntry, ApiError> {
        self.post_json("/records/add", payload).await
    }

    pub async fn update_record(
        &self,
        id: i64,
        payload: &RecordPayload,
    ) -> Result<RecordEntry, ApiError> {
        self.put_json(&format!("/records/edit/{}", id), payload).await
    }

    pub async fn delete_record(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("/records/delete/{}", id))
            .await
    }
}
