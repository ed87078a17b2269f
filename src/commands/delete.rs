use super::list;
use crate::{
    api::TaskClient,
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.client.api_url);

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDelete.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::TaskDeleteCancelled);
            return Ok(());
        }
    }

    if client.delete(args.id).await {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_error!(Message::TaskDeleteFailed(args.id));
    }

    list::show(&client, &list::default_state(&config)).await;
    Ok(())
}
