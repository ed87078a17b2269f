//! Display implementation for taskboard messages.
//!
//! All wording is kept here so that the CLI, the server's error bodies and the
//! logs say the same thing for the same event.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task with ID {} created", id),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdated(id) => format!("Task with ID {} updated", id),
            Message::TaskUpdateFailed(id) => format!("Failed to update task with ID {}", id),
            Message::TaskDeleted(id) => format!("Task with ID {} deleted", id),
            Message::TaskDeleteFailed(id) => format!("Failed to delete task with ID {}", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TasksFetchFailed => "Failed to fetch tasks".to_string(),
            Message::TasksNotFound => "No tasks to show".to_string(),
            Message::TaskEditCancelled => "Editing cancelled".to_string(),
            Message::TaskDeleteCancelled => "Deletion cancelled".to_string(),
            Message::TaskToggled(id, completed) => {
                let state = if *completed { "completed" } else { "not completed" };
                format!("Task with ID {} marked as {}", id, state)
            }

            // === VALIDATION MESSAGES ===
            Message::TaskTitleRequired => "Task title is required".to_string(),
            Message::TaskTitleEmpty => "Task title cannot be empty".to_string(),
            Message::NoFieldsToUpdate => "No fields to update".to_string(),
            Message::InvalidPriority(value) => format!("Invalid priority '{}': expected low, medium or high", value),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}': expected YYYY-MM-DD between 1970 and 9999", value),
            Message::InvalidEstimatedTime(value) => format!("Invalid estimated time {}: expected whole minutes from 0 to {}", value, u32::MAX),
            Message::InvalidRequestBody(reason) => format!("Invalid request body: {}", reason),
            Message::InvalidQuery(reason) => format!("Invalid query string: {}", reason),

            // === STORE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Using database {}", path),
            Message::DatabaseError => "Database operation failed".to_string(),
            Message::StoreOperationFailed(detail) => format!("Store operation failed: {}", detail),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Server running on http://{}", addr),
            Message::ServerStopped => "Server stopped".to_string(),

            // === CLIENT MESSAGES ===
            Message::RequestFailed(error) => format!("Request failed: {}", error),
            Message::UnexpectedStatus(status, body) => {
                if body.is_empty() {
                    format!("Server responded with status {}", status)
                } else {
                    format!("Server responded with status {}: {}", status, body)
                }
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::InvalidEnvValue(name, value) => format!("Ignoring {}={}: not a valid value", name, value),

            // === SEED / EXPORT / STATS MESSAGES ===
            Message::SeedCompleted(count) => format!("Database seeded successfully with {} tasks", count),
            Message::ExportCompleted(path) => format!("Tasks exported to {}", path),
            Message::StatsHeader => "Task statistics".to_string(),
            Message::OverdueTimelineHeader => "Overdue tasks per day".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptConfirmDelete => "Delete this task?".to_string(),
            Message::PromptServerHost => "Server host".to_string(),
            Message::PromptServerPort => "Server port".to_string(),
            Message::PromptApiUrl => "API URL used by the client commands".to_string(),
            Message::PromptPageSize => "Tasks per page".to_string(),
        };

        write!(f, "{}", text)
    }
}
