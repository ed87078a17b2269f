//! HTTP API over the task service.
//!
//! | Method | Path           | Success                     |
//! |--------|----------------|-----------------------------|
//! | GET    | `/`            | 200, HTML task list         |
//! | GET    | `/tasks`       | 200, `{tasks, total}`       |
//! | POST   | `/tasks`       | 201, created task           |
//! | GET    | `/tasks/stats` | 200, aggregate statistics   |
//! | GET    | `/tasks/{id}`  | 200, one task               |
//! | PATCH  | `/tasks/{id}`  | 200, id plus changed fields |
//! | DELETE | `/tasks/{id}`  | 200, confirmation           |
//!
//! Failures are JSON `{"error": "..."}` bodies; see [`error::ApiError`].

pub mod error;
pub mod handlers;

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::{msg_info, msg_success};
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::error;

/// Shared handler state: the service and the one connection it owns.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<TaskService>>,
}

impl AppState {
    pub fn new(service: TaskService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/tasks/stats", get(handlers::task_stats))
        .route(
            "/tasks/{id}",
            get(handlers::get_task).patch(handlers::update_task).delete(handlers::delete_task),
        )
        .with_state(state)
}

/// Serves `router` on an already bound listener until Ctrl-C.
pub async fn run(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    msg_success!(Message::ServerListening(addr.to_string()));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

/// Resolves when `signal` fires. If the signal handler cannot be installed
/// the error is logged and the server keeps running until the process is killed.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Opens the configured database and serves the API on the configured address.
pub async fn serve(config: &Config) -> Result<()> {
    let db_path = config.database_path()?;
    let tasks = Tasks::from_db(Db::open(&db_path)?)?;
    msg_info!(Message::DatabaseOpened(db_path.display().to_string()));

    let listener = TcpListener::bind(config.server_addr()).await?;
    run(listener, AppState::new(TaskService::new(tasks))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn shutdown_follows_the_signal() {
        let fired = timeout(Duration::from_millis(100), shutdown_on(async { Ok(()) })).await;
        assert!(fired.is_ok());
    }

    #[tokio::test]
    async fn failed_signal_registration_keeps_serving() {
        let failed = shutdown_on(async { Err(io::Error::other("no signal handler")) });
        assert!(timeout(Duration::from_millis(100), failed).await.is_err());
    }
}
