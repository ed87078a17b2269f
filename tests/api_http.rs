#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use taskboard::api::TaskClient;
    use taskboard::db::db::Db;
    use taskboard::db::tasks::Tasks;
    use taskboard::libs::service::{TaskService, UpdateTask};
    use taskboard::libs::task::TaskFilter;
    use taskboard::libs::view::ViewState;
    use taskboard::server::{self, AppState};
    use test_context::{test_context, AsyncTestContext};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// A live server on an ephemeral port backed by an in-memory database.
    struct ServerTestContext {
        base_url: String,
        http: reqwest::Client,
        client: TaskClient,
        server: JoinHandle<anyhow::Result<()>>,
    }

    impl AsyncTestContext for ServerTestContext {
        async fn setup() -> Self {
            let tasks = Tasks::from_db(Db::in_memory().unwrap()).unwrap();
            let state = AppState::new(TaskService::new(tasks));

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());
            let server = tokio::spawn(server::run(listener, state));

            ServerTestContext {
                client: TaskClient::new(&base_url),
                http: reqwest::Client::new(),
                base_url,
                server,
            }
        }

        async fn teardown(self) {
            self.server.abort();
        }
    }

    impl ServerTestContext {
        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        async fn post(&self, body: Value) -> (StatusCode, Value) {
            let response = self.http.post(self.url("/tasks")).json(&body).send().await.unwrap();
            let status = response.status();
            (status, response.json().await.unwrap())
        }
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_create_toggle_delete_flow(ctx: &mut ServerTestContext) {
        let (status, created) = ctx.post(json!({ "title": "Buy milk" })).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "Buy milk");
        assert_eq!(created["completed"], 0);
        assert_eq!(created["priority"], "medium");
        assert_eq!(created["estimated_time"], 0);
        assert!(created["due_date"].is_null());
        let id = created["id"].as_i64().unwrap();

        let response = ctx
            .http
            .patch(ctx.url(&format!("/tasks/{}", id)))
            .json(&json!({ "completed": true }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Value = response.json().await.unwrap();
        assert_eq!(updated, json!({ "id": id, "completed": 1 }));

        let listed: Value = ctx.http.get(ctx.url("/tasks")).send().await.unwrap().json().await.unwrap();
        assert_eq!(listed["total"], 1);
        assert_eq!(listed["tasks"][0]["completed"], 1);

        let response = ctx.http.delete(ctx.url(&format!("/tasks/{}", id))).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let deleted: Value = response.json().await.unwrap();
        assert_eq!(deleted["id"], id);
        assert_eq!(deleted["message"], format!("Task with ID {} deleted", id));

        let listed: Value = ctx.http.get(ctx.url("/tasks")).send().await.unwrap().json().await.unwrap();
        assert_eq!(listed["total"], 0);
        assert_eq!(listed["tasks"], json!([]));
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_list_query_parameters(ctx: &mut ServerTestContext) {
        for i in 1..=12 {
            ctx.post(json!({ "title": format!("Task {}", i), "completed": i % 2 == 0 })).await;
        }

        let url = ctx.url("/tasks?page=2&pageSize=5");
        let second: Value = ctx.http.get(url).send().await.unwrap().json().await.unwrap();
        assert_eq!(second["total"], 12);
        assert_eq!(second["tasks"].as_array().unwrap().len(), 5);
        assert_eq!(second["tasks"][0]["title"], "Task 6");

        let url = ctx.url("/tasks?page=3&pageSize=5");
        let third: Value = ctx.http.get(url).send().await.unwrap().json().await.unwrap();
        assert_eq!(third["tasks"].as_array().unwrap().len(), 2);

        let url = ctx.url("/tasks?filter=completed&pageSize=100");
        let completed: Value = ctx.http.get(url).send().await.unwrap().json().await.unwrap();
        assert_eq!(completed["total"], 6);
        assert!(completed["tasks"].as_array().unwrap().iter().all(|t| t["completed"] == 1));
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_validation_errors(ctx: &mut ServerTestContext) {
        let (status, body) = ctx.post(json!({ "priority": "high" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Task title is required");

        let (status, _) = ctx.post(json!({ "title": "Odd", "priority": "urgent" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let response = ctx
            .http
            .post(ctx.url("/tasks"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());

        let (_, created) = ctx.post(json!({ "title": "Target" })).await;
        let id = created["id"].as_i64().unwrap();
        let response = ctx
            .http
            .patch(ctx.url(&format!("/tasks/{}", id)))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "No fields to update");
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_empty_update_is_rejected_before_id(ctx: &mut ServerTestContext) {
        for path in ["/tasks/abc", "/tasks/999"] {
            let response = ctx.http.patch(ctx.url(path)).json(&json!({})).send().await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "PATCH {}", path);
            let body: Value = response.json().await.unwrap();
            assert_eq!(body["error"], "No fields to update");
        }
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_stats_timeline_stays_bounded(ctx: &mut ServerTestContext) {
        let (status, _) = ctx.post(json!({ "title": "old", "due_date": "0001-01-01" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = ctx.post(json!({ "title": "recent", "due_date": "2020-01-01" })).await;
        assert_eq!(status, StatusCode::CREATED);

        let stats: Value = ctx.http.get(ctx.url("/tasks/stats")).send().await.unwrap().json().await.unwrap();
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["overdue"], 1);
        let timeline = stats["overdue_timeline"].as_array().unwrap();
        assert_eq!(timeline[0]["date"], "2020-01-01");
        assert!(timeline.len() < 366 * 20);
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_unknown_ids(ctx: &mut ServerTestContext) {
        let response = ctx
            .http
            .patch(ctx.url("/tasks/999"))
            .json(&json!({ "title": "Ghost" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Task with ID 999 not found");

        let response = ctx.http.delete(ctx.url("/tasks/999")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ctx.http.get(ctx.url("/tasks/abc")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_html_index(ctx: &mut ServerTestContext) {
        ctx.post(json!({ "title": "<script>alert(1)</script>" })).await;

        let response = ctx.http.get(ctx.url("/")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = response.text().await.unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_client_round_trip(ctx: &mut ServerTestContext) {
        let task = ctx.client.create("Write tests").await.unwrap();
        assert!(!task.completed);

        let update = ctx.client.update(task.id, &UpdateTask::completed(true)).await.unwrap();
        assert_eq!(update.changes.completed, Some(true));
        assert!(ctx.client.get(task.id).await.unwrap().completed);

        ctx.client.update(task.id, &UpdateTask::title("Write more tests")).await.unwrap();

        let state = ViewState::default().with_filter(TaskFilter::Completed);
        let page = ctx.client.list(&state).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.tasks[0].title, "Write more tests");

        let stats = ctx.client.stats().await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.completed, 1);

        assert!(ctx.client.delete(task.id).await);
        assert!(ctx.client.list(&ViewState::default()).await.unwrap().tasks.is_empty());
    }

    #[test_context(ServerTestContext)]
    #[tokio::test]
    async fn test_client_surfaces_failures(ctx: &mut ServerTestContext) {
        assert!(ctx.client.get(404).await.is_none());
        assert!(ctx.client.update(404, &UpdateTask::title("Nope")).await.is_none());
        assert!(!ctx.client.delete(404).await);
        assert!(ctx.client.create("   ").await.is_none());

        let offline = TaskClient::new("http://127.0.0.1:9");
        assert!(offline.list(&ViewState::default()).await.is_none());
        assert!(!offline.delete(1).await);
    }
}
