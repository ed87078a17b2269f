use crate::{libs::config::Config, server};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind, overrides the configured host
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long)]
    db: Option<PathBuf>,
}

/// Runs the API server until Ctrl-C.
pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::read()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.db.is_some() {
        config.database = args.db;
    }

    server::serve(&config).await
}
