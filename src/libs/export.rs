//! Task export for external analysis and backup.
//!
//! Extracts every task row into a CSV or JSON file. The CSV layout keeps one
//! column per task field with the raw stored values (`completed` as `0`/`1`,
//! dates in ISO format), ready to be loaded into a spreadsheet or a data frame.
//!
//! ```rust,no_run
//! use taskboard::libs::export::{Exporter, ExportFormat};
//!
//! # fn run(tasks: &[taskboard::libs::task::Task]) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export_tasks(tasks)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task
    Csv,
    /// Pretty-printed JSON array of task objects
    Json,
}

pub const CSV_HEADERS: [&str; 7] = ["id", "title", "completed", "due_date", "priority", "estimated_time", "created_at"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped file
    /// in the working directory when no path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("tasks_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_tasks(&self, tasks: &[Task]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_tasks_csv(tasks),
            ExportFormat::Json => self.export_tasks_json(tasks),
        }
    }

    fn export_tasks_csv(&self, tasks: &[Task]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(CSV_HEADERS)?;

        for task in tasks {
            wtr.write_record(&[
                task.id.to_string(),
                task.title.clone(),
                u8::from(task.completed).to_string(),
                task.due_date.map(|date| date.to_string()).unwrap_or_default(),
                task.priority.to_string(),
                task.estimated_time.to_string(),
                task.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_tasks_json(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
