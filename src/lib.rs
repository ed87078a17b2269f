//! # Taskboard
//!
//! A small task manager: a JSON HTTP API over a SQLite table of tasks, and a
//! command-line client that pages, filters and edits them through that API.
//!
//! ## Features
//!
//! - **Task API**: list with pagination, filter and sort; create, rename,
//!   complete and delete tasks; aggregate statistics
//! - **HTML view**: the same paged list rendered at `/`
//! - **Client**: terminal table view with prompts for editing and deletion
//! - **Data tools**: random seeding and CSV/JSON export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
