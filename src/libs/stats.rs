//! Aggregate figures over the whole task table.
//!
//! Completion and priority breakdowns plus overdue tracking: a task is
//! overdue when it is not completed and its due date is before today. The
//! timeline counts, for each day from the earliest due date through today,
//! how many incomplete tasks were due on or before that day.

use crate::libs::task::{Priority, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> u64 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverduePoint {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: u64,
    pub completed: u64,
    pub not_completed: u64,
    pub priority: PriorityCounts,
    pub overdue: u64,
    pub overdue_timeline: Vec<OverduePoint>,
}

impl TaskStats {
    pub fn collect(tasks: &[Task], today: NaiveDate) -> Self {
        let mut stats = TaskStats {
            total: tasks.len() as u64,
            ..Default::default()
        };

        for task in tasks {
            if task.completed {
                stats.completed += 1;
            } else {
                stats.not_completed += 1;
            }
            match task.priority {
                Priority::Low => stats.priority.low += 1,
                Priority::Medium => stats.priority.medium += 1,
                Priority::High => stats.priority.high += 1,
            }
        }

        stats.overdue = tasks
            .iter()
            .filter(|task| !task.completed && task.due_date.is_some_and(|due| due < today))
            .count() as u64;
        stats.overdue_timeline = overdue_timeline(tasks, today);

        stats
    }
}

/// Cumulative count of incomplete tasks due on or before each day, from the
/// earliest due date in the table through `today`.
pub fn overdue_timeline(tasks: &[Task], today: NaiveDate) -> Vec<OverduePoint> {
    let Some(start) = tasks.iter().filter_map(|task| task.due_date).min() else {
        return Vec::new();
    };

    let mut pending: Vec<NaiveDate> = tasks.iter().filter(|task| !task.completed).filter_map(|task| task.due_date).collect();
    pending.sort_unstable();

    let mut timeline = Vec::new();
    let mut due_so_far = 0;
    for date in start.iter_days().take_while(|date| *date <= today) {
        while due_so_far < pending.len() && pending[due_so_far] <= date {
            due_so_far += 1;
        }
        timeline.push(OverduePoint {
            date,
            count: due_so_far as u64,
        });
    }

    timeline
}
