//! Random sample data for trying out the list, pager and statistics.

use crate::libs::task::{NewTask, Priority};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Share of generated tasks that start out completed.
pub const COMPLETED_RATIO: f64 = 0.6;

/// Builds `count` tasks named `Task 1`..`Task N`.
///
/// Creation times fall between `since` and `now`; each due date lies up to
/// four months after its creation; estimates are whole hours from one to
/// eight, stored in minutes.
pub fn random_tasks<R: Rng + ?Sized>(rng: &mut R, count: usize, since: NaiveDateTime, now: NaiveDateTime) -> Vec<NewTask> {
    let span = (now - since).num_seconds().max(1);

    (0..count)
        .map(|i| {
            let created_at = since + Duration::seconds(rng.random_range(0..span));
            let due_date = created_at.date() + Duration::days(rng.random_range(0..=120));

            NewTask {
                title: format!("Task {}", i + 1),
                completed: rng.random_bool(COMPLETED_RATIO),
                due_date: Some(due_date),
                priority: *Priority::ALL.choose(&mut *rng).unwrap_or(&Priority::Medium),
                estimated_time: rng.random_range(1..=8) * 60,
                created_at: Some(created_at),
            }
        })
        .collect()
}

/// The default start of the creation window.
pub fn default_since() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_tasks_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let since = default_since();
        let now = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();

        let tasks = random_tasks(&mut rng, 50, since, now);
        assert_eq!(tasks.len(), 50);
        assert_eq!(tasks[0].title, "Task 1");
        assert_eq!(tasks[49].title, "Task 50");

        for task in &tasks {
            let created_at = task.created_at.unwrap();
            assert!(created_at >= since && created_at <= now);
            assert!(task.due_date.unwrap() >= created_at.date());
            assert!((60..=480).contains(&task.estimated_time));
            assert_eq!(task.estimated_time % 60, 0);
        }
    }
}
