use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.get_json("/comments").await
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment, ApiError> {
        self.get_json(&format!("/comments/{}", id)).await
    }

    pub async fn list_comments_for_task(&self, task_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/comments/tasks/{}", task_id)).await
    }

    /// Comments written by the signed-in user.
    pub async fn list_my_comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.get_json("/comments/user").await
    }

    pub async fn create_comment(&self, payload: &CommentPayload) -> Result<Comment, ApiError> {
        self.post_json("/comments/add", payload).await
    }

    pub async fn update_comment(&self, id: i64, payload: &CommentPayload) -> Result<Comment, ApiError> {
        self.put_json(&format!("/comments/edit/{}", id), payload).await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("/comments/delete/{}", id))
            .await
    }
}
