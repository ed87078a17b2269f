//! Clients for talking to a running taskboard server.
//!
//! ```rust,no_run
//! use taskboard::api::TaskClient;
//! use taskboard::libs::view::ViewState;
//!
//! # async fn run() {
//! let client = TaskClient::new("http://127.0.0.1:3000");
//! if let Some(page) = client.list(&ViewState::default()).await {
//!     println!("{} tasks", page.total);
//! }
//! # }
//! ```

pub mod client;

pub use client::TaskClient;
