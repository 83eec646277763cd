use leptos::*;

use crate::api::{ApiClient, ApiError, TaskStats};
use crate::state::resource::{LoadState, Loader};
use crate::state::use_api;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsScope {
    Admin,
    Manager(i64),
    User(String),
}

#[derive(Clone, Copy)]
pub struct TaskStatsHook {
    pub loader: Loader<TaskStats>,
    api: StoredValue<ApiClient>,
}

impl TaskStatsHook {
    pub fn new(api: ApiClient) -> Self {
        Self {
            loader: Loader::new(),
            api: store_value(api),
        }
    }

    pub fn state(&self) -> Signal<LoadState<TaskStats>> {
        self.loader.state.into()
    }

    pub async fn fetch(&self, scope: StatsScope) -> Result<TaskStats, ApiError> {
        let api = self.api.get_value();
        self.loader
            .load(async move {
                match scope {
                    StatsScope::Admin => api.admin_task_stats().await,
                    StatsScope::Manager(org_id) => api.manager_task_stats(org_id).await,
                    StatsScope::User(username) => api.user_task_stats(&username).await,
                }
            })
            .await
    }

    pub fn spawn_fetch(&self, scope: StatsScope) {
        let hook = *self;
        spawn_local(async move {
            let _ = hook.fetch(scope).await;
        });
    }
}

pub fn use_task_stats() -> TaskStatsHook {
    TaskStatsHook::new(use_api())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::TestClient;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn user_scope_loads_stats() {
        let server = MockServer::start_async().await;
        let stats = server.mock(|when, then| {
            when.method(GET)
                .path("/api/analytics/user/tasks/stats")
                .query_param("username", "ana");
            then.status(200).json_body(json!({
                "total": 4, "pending": 1, "completed": 3, "completionRate": 75.0
            }));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = TaskStatsHook::new(client.api.clone());
        let loaded = hook.fetch(StatsScope::User("ana".into())).await.unwrap();
        stats.assert();
        assert_eq!(loaded.completed, 3);
        assert_eq!(hook.state().get_untracked().data().map(|s| s.total), Some(4));
        runtime.dispose();
    }
}
