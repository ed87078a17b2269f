use super::error::ApiError;
use super::AppState;
use crate::libs::messages::Message;
use crate::libs::service::{CreateTask, Deleted, TaskError, TaskUpdate, UpdateTask};
use crate::libs::stats::TaskStats;
use crate::libs::task::{Task, TaskPage};
use crate::libs::view::{render_html, ViewState};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::Local;
use tracing::info;

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::UnknownId(raw.to_string()))
}

/// `GET /` renders the task list as an HTML page.
pub async fn index(State(state): State<AppState>, query: Result<Query<ViewState>, QueryRejection>) -> Result<Html<String>, ApiError> {
    let Query(view) = query?;
    let view = view.normalized();
    let page = state.service.lock().list(&view)?;

    Ok(Html(render_html(&view, &page)))
}

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>, query: Result<Query<ViewState>, QueryRejection>) -> Result<Json<TaskPage>, ApiError> {
    let Query(view) = query?;
    let page = state.service.lock().list(&view)?;

    Ok(Json(page))
}

/// `GET /tasks/{id}`
pub async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;
    let task = state.service.lock().get(id)?;

    Ok(Json(task))
}

/// `POST /tasks`
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(input) = payload?;
    let task = state.service.lock().create(input)?;
    info!(id = task.id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// `PATCH /tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<TaskUpdate>, ApiError> {
    let Json(input) = payload?;
    // An empty body is rejected before the id is looked at, even a malformed one.
    if input.is_empty() {
        return Err(TaskError::Validation(Message::NoFieldsToUpdate).into());
    }
    let id = parse_id(&id)?;
    let update = state.service.lock().update(id, input)?;
    info!(id, "task updated");

    Ok(Json(update))
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Deleted>, ApiError> {
    let id = parse_id(&id)?;
    let deleted = state.service.lock().delete(id)?;
    info!(id, "task deleted");

    Ok(Json(deleted))
}

/// `GET /tasks/stats`
pub async fn task_stats(State(state): State<AppState>) -> Result<Json<TaskStats>, ApiError> {
    let stats = state.service.lock().stats(Local::now().date_naive())?;

    Ok(Json(stats))
}
