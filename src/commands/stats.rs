use crate::{
    api::TaskClient,
    libs::{config::Config, messages::Message, stats::TaskStats, task::Priority},
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;
use prettytable::{format, row, Table};

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Also print the cumulative overdue count for every day
    #[arg(short, long)]
    timeline: bool,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.client.api_url);

    let Some(stats) = client.stats().await else {
        msg_error!(Message::TasksFetchFailed);
        return Ok(());
    };

    msg_print!(Message::StatsHeader, true);
    summary_table(&stats).printstd();

    if args.timeline && !stats.overdue_timeline.is_empty() {
        msg_print!(Message::OverdueTimelineHeader, true);
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["DATE", "OVERDUE"]);
        for point in &stats.overdue_timeline {
            table.add_row(row![point.date, point.count]);
        }
        table.printstd();
    }

    Ok(())
}

fn summary_table(stats: &TaskStats) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["Total", stats.total]);
    table.add_row(row!["Completed", stats.completed]);
    table.add_row(row!["Not completed", stats.not_completed]);
    for priority in Priority::ALL {
        table.add_row(row![format!("Priority {}", priority), stats.priority.get(priority)]);
    }
    table.add_row(row!["Overdue", stats.overdue]);
    table
}
