use crate::api::{ApiClient, ApiError, Comment, CommentPayload};
use crate::state::resource::{CrudResource, ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentQuery {
    All,
    ForTask(i64),
    /// Comments by the signed-in user.
    Mine,
}

pub struct Comments;

impl ListResource for Comments {
    type Item = Comment;
    type Query = CommentQuery;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "comment";

    async fn fetch(api: &ApiClient, query: &CommentQuery) -> Result<Vec<Comment>, ApiError> {
        match query {
            CommentQuery::All => api.list_comments().await,
            CommentQuery::ForTask(task_id) => api.list_comments_for_task(*task_id).await,
            CommentQuery::Mine => api.list_my_comments().await,
        }
    }
}

impl CrudResource for Comments {
    type Payload = CommentPayload;

    fn validate(payload: &CommentPayload) -> Result<(), ApiError> {
        if payload.text.trim().is_empty() {
            return Err(ApiError::validation("Comment cannot be empty"));
        }
        Ok(())
    }

    async fn create(api: &ApiClient, payload: &CommentPayload) -> Result<Comment, ApiError> {
        api.create_comment(payload).await
    }

    async fn update(api: &ApiClient, id: i64, payload: &CommentPayload) -> Result<Comment, ApiError> {
        api.update_comment(id, payload).await
    }

    async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
        api.delete_comment(id).await
    }
}

pub type CommentsHook = ResourceHook<Comments>;

pub fn use_comments() -> CommentsHook {
    ResourceHook::new(use_api())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::TestClient;
    use httpmock::prelude::*;
    use leptos::*;
    use serde_json::json;

    #[tokio::test]
    async fn blank_comment_is_blocked() {
        let server = MockServer::start_async().await;
        let add = server.mock(|when, then| {
            when.method(POST).path("/api/comments/add");
            then.status(200).json_body(json!({ "id": 1, "text": "x" }));
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = CommentsHook::new(client.api.clone());
        let err = hook
            .add(CommentPayload {
                text: "   ".into(),
                task_id: 3,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Comment cannot be empty");
        assert_eq!(add.hits(), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_refreshes_task_thread() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/comments/tasks/3");
            then.status(200)
                .json_body(json!([{ "id": 1, "text": "On it", "taskId": 3 }]));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/api/comments/delete/1");
            then.status(200);
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let hook = CommentsHook::new(client.api.clone());
        hook.fetch(CommentQuery::ForTask(3)).await.unwrap();
        hook.remove(1).await.unwrap();
        delete.assert();
        assert_eq!(list.hits(), 2);
        runtime.dispose();
    }
}
