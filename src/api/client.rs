//! HTTP client for the taskboard API.
//!
//! Each public call issues exactly one request. Any transport error or
//! non-2xx status is logged and surfaced as `None` (or `false` for
//! deletions); nothing is retried, the caller decides whether to try again.

use crate::libs::messages::Message;
use crate::libs::service::{CreateTask, Deleted, TaskUpdate, UpdateTask};
use crate::libs::stats::TaskStats;
use crate::libs::task::{Task, TaskPage};
use crate::libs::view::ViewState;
use crate::{msg_debug, msg_error, msg_error_anyhow};
use anyhow::Result;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

const TASKS_PATH: &str = "tasks";

#[derive(Clone, Debug)]
pub struct TaskClient {
    client: Client,
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn task_url(&self, id: i64) -> String {
        self.url(&format!("{}/{}", TASKS_PATH, id))
    }

    /// Fetches one page of tasks for the given view state.
    pub async fn list(&self, state: &ViewState) -> Option<TaskPage> {
        let request = self.client.get(self.url(TASKS_PATH)).query(state);
        Self::surface(Self::json(request.send().await).await)
    }

    pub async fn get(&self, id: i64) -> Option<Task> {
        Self::surface(Self::json(self.client.get(self.task_url(id)).send().await).await)
    }

    pub async fn create(&self, title: &str) -> Option<Task> {
        self.create_with(&CreateTask::with_title(title)).await
    }

    pub async fn create_with(&self, input: &CreateTask) -> Option<Task> {
        let request = self.client.post(self.url(TASKS_PATH)).json(input);
        Self::surface(Self::json(request.send().await).await)
    }

    pub async fn update(&self, id: i64, input: &UpdateTask) -> Option<TaskUpdate> {
        let request = self.client.patch(self.task_url(id)).json(input);
        Self::surface(Self::json(request.send().await).await)
    }

    pub async fn delete(&self, id: i64) -> bool {
        let result: Result<Deleted> = Self::json(self.client.delete(self.task_url(id)).send().await).await;
        Self::surface(result).is_some()
    }

    pub async fn stats(&self) -> Option<TaskStats> {
        let url = self.url(&format!("{}/stats", TASKS_PATH));
        Self::surface(Self::json(self.client.get(url).send().await).await)
    }

    /// Decodes a 2xx body, turning everything else into an error that carries
    /// the status and whatever text the server sent back.
    async fn json<T: DeserializeOwned>(response: reqwest::Result<Response>) -> Result<T> {
        let response = response.map_err(|e| msg_error_anyhow!(Message::RequestFailed(e.to_string())))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(msg_error_anyhow!(Message::UnexpectedStatus(status.as_u16(), body)));
        }
        msg_debug!(format!("{} {}", status, response.url()));

        Ok(response.json::<T>().await?)
    }

    fn surface<T>(result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                msg_error!(e);
                None
            }
        }
    }
}
