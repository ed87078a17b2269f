//! Task operations on top of the store.
//!
//! The service is where raw request input becomes a valid row: titles are
//! checked and trimmed, defaults are applied, the `completed` flag is coerced
//! and partial updates are turned into an explicit [`TaskChanges`]. Errors are
//! classified into validation, not-found and store failures so the HTTP layer
//! can map each to a status code.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::stats::TaskStats;
use crate::libs::task::{coerce_completed, present, NewTask, Priority, Task, TaskChanges, TaskPage};
use crate::libs::view::ViewState;
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Required input is missing or a value is malformed.
    #[error("{0}")]
    Validation(Message),

    /// No row has the requested id.
    #[error("Task with ID {0} not found")]
    NotFound(i64),

    /// The underlying storage operation failed.
    #[error("Database operation failed")]
    Store(#[from] rusqlite::Error),
}

/// Body of a create request, as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub completed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
}

impl CreateTask {
    pub fn with_title(title: &str) -> Self {
        CreateTask {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn validate(self) -> Result<NewTask, TaskError> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title.trim().to_string(),
            _ => return Err(TaskError::Validation(Message::TaskTitleRequired)),
        };

        let mut task = NewTask::new(&title);
        task.completed = coerce_completed(self.completed.as_ref());
        if let Some(due_date) = self.due_date {
            task.due_date = parse_due_date(&due_date)?;
        }
        if let Some(priority) = self.priority {
            task.priority = parse_priority(&priority)?;
        }
        if let Some(estimated_time) = self.estimated_time {
            task.estimated_time = parse_estimated_time(estimated_time)?;
        }

        Ok(task)
    }
}

/// Body of a partial update request. Absent fields are left untouched.
///
/// `completed` and `due_date` keep an explicit `null` as present: a null
/// `completed` coerces to false and a null `due_date` clears the date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub completed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub due_date: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
}

impl UpdateTask {
    pub fn title(title: &str) -> Self {
        UpdateTask {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        UpdateTask {
            completed: Some(Value::Bool(completed)),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.estimated_time.is_none()
    }

    fn validate(self) -> Result<TaskChanges, TaskError> {
        if self.is_empty() {
            return Err(TaskError::Validation(Message::NoFieldsToUpdate));
        }

        let title = match self.title {
            Some(title) if title.trim().is_empty() => return Err(TaskError::Validation(Message::TaskTitleEmpty)),
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };
        let due_date = match self.due_date {
            Some(Some(due_date)) => Some(parse_due_date(&due_date)?),
            Some(None) => Some(None),
            None => None,
        };

        Ok(TaskChanges {
            title,
            completed: self.completed.as_ref().map(|value| coerce_completed(Some(value))),
            due_date,
            priority: self.priority.as_deref().map(parse_priority).transpose()?,
            estimated_time: self.estimated_time.map(parse_estimated_time).transpose()?,
        })
    }
}

/// Result of an update: the id plus only the fields that were changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub changes: TaskChanges,
}

/// Confirmation of a deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: i64,
    pub message: String,
}

/// Due dates outside these years are rejected.
pub const DUE_YEARS: std::ops::RangeInclusive<i32> = 1970..=9999;

fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, TaskError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .ok()
        .filter(|date| DUE_YEARS.contains(&date.year()))
        .map(Some)
        .ok_or_else(|| TaskError::Validation(Message::InvalidDueDate(value.to_string())))
}

fn parse_priority(value: &str) -> Result<Priority, TaskError> {
    value
        .parse()
        .map_err(|_| TaskError::Validation(Message::InvalidPriority(value.to_string())))
}

fn parse_estimated_time(value: i64) -> Result<u32, TaskError> {
    u32::try_from(value).map_err(|_| TaskError::Validation(Message::InvalidEstimatedTime(value)))
}

pub struct TaskService {
    store: Tasks,
}

impl TaskService {
    pub fn new(store: Tasks) -> Self {
        Self { store }
    }

    /// Returns one page of tasks matching the state's filter, in its sort order,
    /// together with the number of matching tasks.
    pub fn list(&self, state: &ViewState) -> Result<TaskPage, TaskError> {
        let state = state.normalized();
        let total = self.store.count(state.filter)?;
        let tasks = self.store.fetch(&state.query())?;
        debug!(page = state.page, page_size = state.page_size, total, "listed tasks");

        Ok(TaskPage { tasks, total })
    }

    pub fn get(&self, id: i64) -> Result<Task, TaskError> {
        self.store.get_by_id(id)?.ok_or(TaskError::NotFound(id))
    }

    pub fn create(&mut self, input: CreateTask) -> Result<Task, TaskError> {
        let task = input.validate()?;
        Ok(self.store.insert(&task)?)
    }

    /// Applies the fields present in `input`. An update without fields is
    /// rejected before the id is looked at.
    pub fn update(&mut self, id: i64, input: UpdateTask) -> Result<TaskUpdate, TaskError> {
        let changes = input.validate()?;
        if self.store.update(id, &changes)? == 0 {
            return Err(TaskError::NotFound(id));
        }

        Ok(TaskUpdate { id, changes })
    }

    pub fn delete(&mut self, id: i64) -> Result<Deleted, TaskError> {
        if self.store.delete(id)? == 0 {
            return Err(TaskError::NotFound(id));
        }

        Ok(Deleted {
            id,
            message: Message::TaskDeleted(id).to_string(),
        })
    }

    pub fn all(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.store.fetch_all()?)
    }

    pub fn stats(&self, today: NaiveDate) -> Result<TaskStats, TaskError> {
        Ok(TaskStats::collect(&self.store.fetch_all()?, today))
    }
}
