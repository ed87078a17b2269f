//! Task export for external analysis and backup.
//!
//! Reads the database directly, so the server does not need to be running.

use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Target file, a timestamped name in the working directory when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = Tasks::from_db(Db::open(&config.database_path()?)?)?;

    let exporter = Exporter::new(args.format, args.output);
    exporter.export_tasks(&tasks.fetch_all()?)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
