use crate::api::{ApiClient, ApiError, Task, TaskPayload};
use crate::state::resource::{CrudResource, ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskQuery {
    All,
    AssignedTo(String),
    ByClient(i64),
    ByTitle(String),
}

/// General task list. Mutations do not re-fetch; callers refresh explicitly.
pub struct Tasks;

impl ListResource for Tasks {
    type Item = Task;
    type Query = TaskQuery;
    const REFRESH: RefreshPolicy = RefreshPolicy::Manual;
    const NAME: &'static str = "task";

    async fn fetch(api: &ApiClient, query: &TaskQuery) -> Result<Vec<Task>, ApiError> {
        match query {
            TaskQuery::All => api.list_tasks().await,
            TaskQuery::AssignedTo(username) => api.list_tasks_assigned_to(username).await,
            TaskQuery::ByClient(client_id) => api.list_tasks_by_client(*client_id).await,
            TaskQuery::ByTitle(title) => api.find_tasks_by_title(title).await,
        }
    }
}

impl CrudResource for Tasks {
    type Payload = TaskPayload;

    fn validate(payload: &TaskPayload) -> Result<(), ApiError> {
        if payload.title.trim().is_empty() {
            return Err(ApiError::validation("Task title is required"));
        }
        Ok(())
    }

    async fn create(api: &ApiClient, payload: &TaskPayload) -> Result<Task, ApiError> {
        api.create_task(payload).await
    }

    async fn update(api: &ApiClient, id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
        api.update_task(id, payload).await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
        api.delete_task(id).await
    }
}

/// Tasks assigned to one user, keyed by username. Toggling re-fetches.
pub struct MyTasks;

impl ListResource for MyTasks {
    type Item = Task;
    type Query = String;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "my task";

    async fn fetch(api: &ApiClient, username: &String) -> Result<Vec<Task>, ApiError> {
        api.list_tasks_assigned_to(username).await
    }
}

impl<R: ListResource<Item = Task>> ResourceHook<R> {
    pub async fn toggle_finish(&self, id: i64) -> Result<(), ApiError> {
        let result = self.api().toggle_task_finished(id).await;
        self.after_mutation("toggle", result, R::REFRESH).await
    }
}

pub type TasksHook = ResourceHook<Tasks>;
pub type MyTasksHook = ResourceHook<MyTasks>;

pub fn use_tasks() -> TasksHook {
    ResourceHook::new(use_api())
}

pub fn use_my_tasks() -> MyTasksHook {
    ResourceHook::new(use_api())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::TaskStatus;
    use crate::api::test_support::TestClient;
    use httpmock::prelude::*;
    use leptos::*;
    use serde_json::json;

    fn task(id: i64, finished: bool) -> serde_json::Value {
        json!({ "id": id, "title": "Audit", "status": "PENDING", "priority": "LOW", "finished": finished })
    }

    #[tokio::test]
    async fn task_mutations_keep_list_until_manual_refresh() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/tasks");
            then.status(200).json_body(json!([task(1, false)]));
        });
        let add = server.mock(|when, then| {
            when.method(POST).path("/api/tasks/add");
            then.status(200).json_body(task(2, false));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = TasksHook::new(client.api.clone());
        hook.fetch(TaskQuery::All).await.unwrap();
        hook.add(TaskPayload {
            title: "Audit".into(),
            status: TaskStatus::Pending,
            ..Default::default()
        })
        .await
        .unwrap();
        add.assert();
        assert_eq!(list.hits(), 1);

        hook.refresh().await.unwrap();
        assert_eq!(list.hits(), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn toggle_then_refresh_reflects_new_state() {
        let server = MockServer::start_async().await;
        let mut before = server.mock(|when, then| {
            when.method(GET).path("/api/tasks/assigned/ana");
            then.status(200).json_body(json!([task(5, false)]));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = MyTasksHook::new(client.api.clone());
        hook.fetch("ana".into()).await.unwrap();
        assert!(!hook.items()[0].finished);

        before.delete();
        server.mock(|when, then| {
            when.method(GET).path("/api/tasks/assigned/ana");
            then.status(200).json_body(json!([task(5, true)]));
        });
        let toggle = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/tasks/toggle-finish")
                .query_param("id", "5");
            then.status(200);
        });

        hook.toggle_finish(5).await.unwrap();
        toggle.assert();
        assert!(hook.items()[0].finished);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_error_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/tasks/client/4");
            then.status(500).body("database down");
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = TasksHook::new(client.api.clone());
        let err = hook.fetch(TaskQuery::ByClient(4)).await.unwrap_err();
        assert_eq!(err.error, "database down");
        assert_eq!(
            hook.state().get_untracked().error().map(|e| e.error.clone()),
            Some("database down".to_string())
        );
        runtime.dispose();
    }
}
