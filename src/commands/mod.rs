pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod seed;
pub mod serve;
pub mod stats;
pub mod toggle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the HTTP API server")]
    Serve(serve::ServeArgs),
    #[command(about = "Show one page of tasks")]
    List(list::ListArgs),
    #[command(about = "Create task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Rename a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Flip the completed flag of a task", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show task statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Export every task to a file")]
    Export(export::ExportArgs),
    #[command(about = "Fill the database with random tasks")]
    Seed(seed::SeedArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
            Commands::Seed(args) => seed::cmd(args),
        }
    }
}
