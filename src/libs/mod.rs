//! Core library modules for taskboard.
//!
//! - **Model and rules**: `task` (task types, filters, sort orders), `service`
//!   (validation and the operations behind the HTTP API), `stats`
//! - **Client view**: `view` (view state, rendering, title editing)
//! - **Infrastructure**: `config`, `data_storage`, `messages`
//! - **Data tools**: `export`, `seed`
//!
//! ```rust,no_run
//! use taskboard::db::tasks::Tasks;
//! use taskboard::libs::service::{CreateTask, TaskService};
//!
//! let mut service = TaskService::new(Tasks::new()?);
//! let task = service.create(CreateTask::with_title("Write release notes"))?;
//! println!("created task {}", task.id);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod seed;
pub mod service;
pub mod stats;
pub mod task;
pub mod view;
