use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/tasks").await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        self.get_json(&format!("/tasks/{}", id)).await
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.post_json("/tasks/add", payload).await
    }

    pub async fn update_task(&self, id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.put_json(&format!("/tasks/edit/{}", id), payload).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("/tasks/delete/{}", id))
            .await
    }

    pub async fn find_tasks_by_title(&self, title: &str) -> Result<Vec<Task>, ApiError> {
        self.get_json_with_query("/tasks/find-by-title", &[("title", title)])
            .await
    }

    pub async fn list_tasks_by_client(&self, client_id: i64) -> Result<Vec<Task>, ApiError> {
        self.get_json(&format!("/tasks/client/{}", client_id)).await
    }

    pub async fn list_tasks_assigned_to(&self, username: &str) -> Result<Vec<Task>, ApiError> {
        self.get_json(&format!("/tasks/assigned/{}", username))
            .await
    }

    pub async fn toggle_task_finished(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::PUT, &format!("/tasks/toggle-finish?id={}", id))
            .await
    }
}
