use super::list;
use crate::{
    api::TaskClient,
    libs::{config::Config, messages::Message, service::UpdateTask},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    id: i64,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.client.api_url);

    let Some(task) = client.get(args.id).await else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    let completed = !task.completed;
    match client.update(task.id, &UpdateTask::completed(completed)).await {
        Some(_) => msg_success!(Message::TaskToggled(task.id, completed)),
        None => msg_error!(Message::TaskUpdateFailed(task.id)),
    }

    list::show(&client, &list::default_state(&config)).await;
    Ok(())
}
