use super::list;
use crate::{
    api::TaskClient,
    libs::{config::Config, messages::Message},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true)]
    title: String,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.client.api_url);

    // Blank titles never reach the server.
    let title = args.title.trim();
    if title.is_empty() {
        msg_error!(Message::TaskTitleEmpty);
        return Ok(());
    }

    match client.create(title).await {
        Some(task) => msg_success!(Message::TaskCreated(task.id)),
        None => msg_error!(Message::TaskCreateFailed),
    }

    list::show(&client, &list::default_state(&config)).await;
    Ok(())
}
