//! Title editing.
//!
//! The prompt starts with the current title. Pressing Enter commits the
//! trimmed text; an empty line or an interrupted prompt cancels without
//! contacting the server.

use super::list;
use crate::{
    api::TaskClient,
    libs::{
        config::Config,
        messages::Message,
        service::UpdateTask,
        view::{EditKey, EditOutcome, EditSession},
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    id: i64,

    /// New title; prompts with the current one when omitted
    #[arg(short, long)]
    title: Option<String>,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.client.api_url);

    let Some(task) = client.get(args.id).await else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    let mut session = EditSession::begin(&task.title);
    let key = match args.title {
        Some(title) => {
            session.input(&title);
            EditKey::Enter
        }
        None => prompt(&mut session),
    };

    match session.finish(key) {
        EditOutcome::Commit(title) => match client.update(task.id, &UpdateTask::title(&title)).await {
            Some(_) => msg_success!(Message::TaskUpdated(task.id)),
            None => msg_error!(Message::TaskUpdateFailed(task.id)),
        },
        EditOutcome::Cancel => {
            msg_info!(Message::TaskEditCancelled);
            return Ok(());
        }
    }

    list::show(&client, &list::default_state(&config)).await;
    Ok(())
}

/// Reads the new title into `session`, mapping an aborted prompt to Escape.
fn prompt(session: &mut EditSession) -> EditKey {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(session.original())
        .allow_empty(true)
        .interact_text();

    match input {
        Ok(text) => {
            session.input(&text);
            EditKey::Enter
        }
        Err(_) => EditKey::Escape,
    }
}
