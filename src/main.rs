use anyhow::Result;
use dotenv::dotenv;
use taskboard::commands::Cli;
use taskboard::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let default_level = if is_debug_mode() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    Cli::menu().await
}
