use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{config::Config, messages::Message, seed},
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of tasks to insert
    #[arg(short, long, default_value_t = 100)]
    count: usize,
}

pub fn cmd(args: SeedArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::from_db(Db::open(&config.database_path()?)?)?;

    let mut rng = rand::rng();
    let batch = seed::random_tasks(&mut rng, args.count, seed::default_since(), Local::now().naive_local());
    for task in &batch {
        tasks.insert(task)?;
    }

    msg_success!(Message::SeedCompleted(batch.len()));
    Ok(())
}
