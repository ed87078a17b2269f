//! The task model shared by the store, the service, the HTTP layer and the client.
//!
//! A task row carries a title, a completion flag, an optional due date, a
//! priority, an estimate in minutes and its creation time. On the wire the
//! completion flag travels as the integers `0`/`1`, which is what existing
//! consumers of the API expect.

use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Task priority. Unset priorities are stored as `medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority '{0}'")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(with = "completed_flag")]
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub estimated_time: u32,
    pub created_at: NaiveDateTime,
}

/// A task that has not been stored yet.
///
/// `created_at` is normally left empty so the store stamps the insertion time;
/// the seeder sets it to backdate sample data.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub estimated_time: u32,
    pub created_at: Option<NaiveDateTime>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            completed: false,
            due_date: None,
            priority: Priority::default(),
            estimated_time: 0,
            created_at: None,
        }
    }
}

/// The set of columns a partial update touches.
///
/// Every field is optional; `None` leaves the column alone. `due_date` is
/// doubly optional so that `Some(None)` clears the date. The same struct is
/// returned to API callers as the view of what changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "completed_flag::optional")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
}

/// Which tasks a listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    NotCompleted,
}

impl TaskFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Completed => "completed",
            TaskFilter::NotCompleted => "not-completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::NotCompleted => !task.completed,
        }
    }
}

/// Ordering of a listing. Tasks without a due date always sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TaskSort {
    #[default]
    None,
    DateAsc,
    DateDesc,
}

impl TaskSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSort::None => "none",
            TaskSort::DateAsc => "date-asc",
            TaskSort::DateDesc => "date-desc",
        }
    }

    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let by_date = match (self, a.due_date, b.due_date) {
            (TaskSort::None, _, _) => Ordering::Equal,
            (_, None, None) => Ordering::Equal,
            (_, None, Some(_)) => Ordering::Greater,
            (_, Some(_), None) => Ordering::Less,
            (TaskSort::DateAsc, Some(x), Some(y)) => x.cmp(&y),
            (TaskSort::DateDesc, Some(x), Some(y)) => y.cmp(&x),
        };
        by_date.then(a.id.cmp(&b.id))
    }
}

/// A window over the task table, as understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskQuery {
    pub filter: TaskFilter,
    pub sort: TaskSort,
    pub offset: u64,
    pub limit: Option<u64>,
}

/// One page of a listing plus the number of tasks matching the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total: u64,
}

/// Interprets a raw `completed` input.
///
/// Only the JSON boolean `true` and the string `"true"` count as completed;
/// anything else, including a missing value, is false.
pub fn coerce_completed(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(true)) => true,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Deserializes a field that is known to be present, so that an explicit
/// `null` becomes `Some(None)` instead of collapsing into "absent".
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Wire format of the completion flag: written as `0`/`1`, read leniently.
pub mod completed_flag {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        from_value(Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    fn from_value(value: Value) -> Result<bool, String> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_i64().is_some_and(|n| n != 0)),
            Value::String(s) => Ok(s == "true" || s == "1"),
            other => Err(format!("invalid completed flag: {}", other)),
        }
    }

    pub mod optional {
        use serde::de::Error;
        use serde::{Deserialize, Deserializer, Serializer};
        use serde_json::Value;

        pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(flag) => serializer.serialize_some(&u8::from(*flag)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
            match Option::<Value>::deserialize(deserializer)? {
                Some(value) => super::from_value(value).map(Some).map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}
