//! Database layer for taskboard.
//!
//! A single SQLite table holds every task. [`db::Db`] owns connection setup
//! and [`tasks::Tasks`] wraps the table with typed operations.
//!
//! ```rust,no_run
//! use taskboard::db::{db::Db, tasks::Tasks};
//! use taskboard::libs::task::NewTask;
//!
//! let mut tasks = Tasks::from_db(Db::in_memory()?)?;
//! let task = tasks.insert(&NewTask::new("Buy milk"))?;
//! assert!(!task.completed);
//! # Ok::<(), rusqlite::Error>(())
//! ```

/// Connection management.
pub mod db;

/// Task persistence: insert, windowed fetch, count, partial update, delete.
pub mod tasks;
