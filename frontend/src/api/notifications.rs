use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn count_my_notifications(&self) -> Result<u32, ApiError> {
        self.get_json("/notifications/count-my-notifications").await
    }

    pub async fn list_my_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications/my-notifications").await
    }

    pub async fn list_unread_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications/unread").await
    }

    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::PUT, &format!("/notifications/mark-it-as-read/{}", id))
            .await
    }

    pub async fn mark_notification_unread(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(
            Method::PUT,
            &format!("/notifications/mark-it-as-unread/{}", id),
        )
        .await
    }
}
