use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn admin_task_stats(&self) -> Result<TaskStats, ApiError> {
        self.get_json("/analytics/admin/tasks/stats").await
    }

    pub async fn manager_task_stats(&self, organization_id: i64) -> Result<TaskStats, ApiError> {
        self.get_json_with_query(
            "/analytics/manager/tasks/stats",
            &[("organizationId", organization_id)],
        )
        .await
    }

    pub async fn user_task_stats(&self, username: &str) -> Result<TaskStats, ApiError> {
        self.get_json_with_query("/analytics/user/tasks/stats", &[("username", username)])
            .await
    }
}
