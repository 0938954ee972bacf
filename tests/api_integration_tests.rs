//! Integration tests for the API client against a mock backend.
//!
//! Each test spins up an axum server on an ephemeral port serving canned
//! JSON in the backend's wire format, then drives the real client at it.

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use taskboard::analytics::{dashboard_completion_rate, status_counts};
use taskboard::api::{ApiClient, top_contributor};
use taskboard::error::FetchError;
use taskboard::format::format_report;

/// Serve `router` on an ephemeral port and return the base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn backend_with(tasks: Value, stats: Value, summaries: Value) -> Router {
    Router::new()
        .route(
            "/api/tasks/",
            get(move || {
                let body = tasks.clone();
                async move { Json(body) }
            }),
        )
        .route(
            "/api/analytics/stats",
            get(move || {
                let body = stats.clone();
                async move { Json(body) }
            }),
        )
        .route(
            "/api/analytics/user-summary",
            get(move || {
                let body = summaries.clone();
                async move { Json(body) }
            }),
        )
}

mod task_fetch {
    use super::*;

    #[tokio::test]
    async fn decodes_positional_records() {
        let router = backend_with(
            json!({
                "tasks": [
                    [1, "Set up CI", "pipeline", "todo", 1, 3],
                    [2, "Write tests", null, "done", 2, 1]
                ],
                "count": 2
            }),
            json!({}),
            json!({}),
        );
        let client = ApiClient::new(spawn_backend(router).await);

        let tasks = client.fetch_tasks().await.expect("fetch tasks");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title.as_deref(), Some("Set up CI"));
        assert_eq!(tasks[0].priority, Some(3));
        assert_eq!(tasks[1].status.as_deref(), Some("done"));
        assert_eq!(tasks[1].description, None);
    }

    #[tokio::test]
    async fn missing_tasks_key_decodes_as_empty() {
        let router = backend_with(json!({"count": 0}), json!({}), json!({}));
        let client = ApiClient::new(spawn_backend(router).await);

        let tasks = client.fetch_tasks().await.expect("fetch tasks");
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn http_status_is_not_inspected() {
        // A 500 whose body still parses as the expected shape succeeds;
        // only transport and decode failures count as errors.
        let router = Router::new().route(
            "/api/tasks/",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"tasks": [[9, "t", "", "todo", 1, 1]]})),
                )
            }),
        );
        let client = ApiClient::new(spawn_backend(router).await);

        let tasks = client.fetch_tasks().await.expect("fetch tasks");
        assert_eq!(tasks[0].id, Some(9));
    }

    #[tokio::test]
    async fn unparseable_body_is_a_decode_error() {
        let router = Router::new().route("/api/tasks/", get(|| async { "not json at all" }));
        let client = ApiClient::new(spawn_backend(router).await);

        let err = client.fetch_tasks().await.expect_err("should fail");
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.user_message(), "Failed to fetch tasks");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        // Nothing listens here.
        let client = ApiClient::new("http://127.0.0.1:1");

        let err = client.fetch_tasks().await.expect_err("should fail");
        assert!(matches!(err, FetchError::Network(_)));
        assert_eq!(err.user_message(), "Failed to fetch tasks");
    }
}

mod analytics_fetch {
    use super::*;

    #[tokio::test]
    async fn joins_both_resources() {
        let router = backend_with(
            json!({"tasks": []}),
            json!({"stats": {"todo": 2, "done": 5}, "total": 7}),
            json!({"summaries": [
                {"name": "alice", "total_tasks": 3, "completed_tasks": 2},
                {"name": "bob", "total_tasks": 4, "completed_tasks": 3}
            ]}),
        );
        let client = ApiClient::new(spawn_backend(router).await);

        let snapshot = client.fetch_analytics().await.expect("fetch analytics");
        // Total is the client-side sum, not the backend's `total` field.
        assert_eq!(snapshot.total_tasks(), 7);
        assert_eq!(snapshot.stats["done"], 5);
        assert_eq!(
            top_contributor(&snapshot.summaries).map(|u| u.name.as_str()),
            Some("bob")
        );
    }

    #[tokio::test]
    async fn one_failing_resource_fails_the_join() {
        let router = Router::new()
            .route(
                "/api/analytics/stats",
                get(|| async { Json(json!({"stats": {}})) }),
            )
            .route("/api/analytics/user-summary", get(|| async { "garbage" }));
        let client = ApiClient::new(spawn_backend(router).await);

        let err = client.fetch_analytics().await.expect_err("should fail");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_summaries_yield_no_contributor() {
        let router = backend_with(
            json!({"tasks": []}),
            json!({"stats": {}}),
            json!({"summaries": []}),
        );
        let client = ApiClient::new(spawn_backend(router).await);

        let snapshot = client.fetch_analytics().await.expect("fetch analytics");
        assert!(top_contributor(&snapshot.summaries).is_none());
    }
}

mod end_to_end {
    use super::*;

    #[tokio::test]
    async fn three_tasks_render_expected_dashboard() {
        let router = backend_with(
            json!({"tasks": [
                [1, "Plan sprint", "", "todo", 1, 2],
                [2, "Ship release", "", "done", 1, 3],
                [3, "Close tickets", "", "done", 2, 1]
            ]}),
            json!({"stats": {"todo": 1, "done": 2}}),
            json!({"summaries": [
                {"name": "alice", "total_tasks": 2, "completed_tasks": 2}
            ]}),
        );
        let client = ApiClient::new(spawn_backend(router).await);

        let tasks = client.fetch_tasks().await.expect("fetch tasks");
        let counts = status_counts(&tasks);
        assert_eq!(counts.todo, 1);
        assert_eq!(counts.in_progress, 0);
        assert_eq!(counts.done, 2);
        assert_eq!(dashboard_completion_rate(&tasks), 67);

        let analytics = client.fetch_analytics().await.expect("fetch analytics");
        let report = format_report(&tasks, &analytics);
        assert!(report.contains("**Completion Rate**: 67%"));
        assert!(report.contains("**alice**: 2 tasks (2 completed)"));
        assert!(report.contains("All Tasks (3)"));
    }
}
