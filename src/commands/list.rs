//! Task list browsing.
//!
//! Every command that changes a task ends by calling [`show`], so the user
//! always sees the freshly fetched first page rather than a locally patched
//! copy of the old one.

use crate::{
    api::TaskClient,
    libs::{
        config::Config,
        messages::Message,
        task::{TaskFilter, TaskSort},
        view::{self, ViewState},
    },
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Tasks per page, the configured page size when omitted
    #[arg(short = 's', long)]
    page_size: Option<u32>,

    #[arg(short, long, value_enum, default_value = "all")]
    filter: TaskFilter,

    #[arg(long, value_enum, default_value = "none")]
    sort: TaskSort,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.client.api_url);

    let state = ViewState {
        page: args.page,
        page_size: args.page_size.unwrap_or(config.client.page_size),
        filter: args.filter,
        sort: args.sort,
    }
    .normalized();

    show(&client, &state).await;
    Ok(())
}

/// Fetches the page for `state` and prints the whole table.
pub async fn show(client: &TaskClient, state: &ViewState) {
    match client.list(state).await {
        Some(page) => msg_print!(view::render(state, &page)),
        None => msg_error!(Message::TasksFetchFailed),
    }
}

/// The first page with default filter and sort, as a browser would load it.
pub fn default_state(config: &Config) -> ViewState {
    ViewState::with_page_size(config.client.page_size)
}
