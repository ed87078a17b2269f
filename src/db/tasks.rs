//! The `tasks` table: the only persisted state of taskboard.
//!
//! `Tasks` owns a connection and exposes primary-key lookups, windowed
//! listings with a separate count, and a single partial-update statement
//! driven by [`TaskChanges`].

use super::db::Db;
use crate::libs::task::{NewTask, Task, TaskChanges, TaskFilter, TaskQuery, TaskSort};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0,
    due_date DATE,
    priority TEXT NOT NULL DEFAULT 'medium',
    estimated_time INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);";
const INSERT_TASK: &str = "INSERT INTO tasks (title, completed, due_date, priority, estimated_time, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, COALESCE(?6, datetime(CURRENT_TIMESTAMP, 'localtime')))";
const SELECT_TASKS: &str = "SELECT id, title, completed, due_date, priority, estimated_time, created_at FROM tasks";
const SELECT_COUNT: &str = "SELECT COUNT(*) FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const LIMIT_OFFSET: &str = "LIMIT ?1 OFFSET ?2";

/// Every column is written from its own parameter; an absent value keeps the
/// stored one. `?3` says whether the due date is part of the update at all,
/// so that a present-but-empty due date can clear the column.
const UPDATE_TASK: &str = "UPDATE tasks SET
    title = COALESCE(?1, title),
    completed = COALESCE(?2, completed),
    due_date = CASE WHEN ?3 THEN ?4 ELSE due_date END,
    priority = COALESCE(?5, priority),
    estimated_time = COALESCE(?6, estimated_time)
    WHERE id = ?7";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

fn filter_clause(filter: TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => "",
        TaskFilter::Completed => "WHERE completed = 1",
        TaskFilter::NotCompleted => "WHERE completed = 0",
    }
}

fn order_clause(sort: TaskSort) -> &'static str {
    match sort {
        TaskSort::None => "ORDER BY id",
        TaskSort::DateAsc => "ORDER BY due_date IS NULL, due_date ASC, id",
        TaskSort::DateDesc => "ORDER BY due_date IS NULL, due_date DESC, id",
    }
}

fn task_from_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        completed: row.get("completed")?,
        due_date: row.get("due_date")?,
        priority: row.get("priority")?,
        estimated_time: row.get("estimated_time")?,
        created_at: row.get("created_at")?,
    })
}

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the default database and makes sure the table exists.
    pub fn new() -> anyhow::Result<Tasks> {
        Ok(Self::from_db(Db::new()?)?)
    }

    pub fn from_db(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Stores a task and returns the row as persisted, including its new id.
    pub fn insert(&mut self, task: &NewTask) -> Result<Task> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.completed, task.due_date, task.priority, task.estimated_time, task.created_at],
        )?;
        let id = self.conn.last_insert_rowid();

        self.conn.query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), [id], task_from_row)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), [id], task_from_row)
            .optional()
    }

    /// Returns the window described by `query`.
    pub fn fetch(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let sql = format!(
            "{} {} {} {}",
            SELECT_TASKS,
            filter_clause(query.filter),
            order_clause(query.sort),
            LIMIT_OFFSET
        );
        // A negative LIMIT means "no limit" to SQLite.
        let limit = query.limit.map_or(-1, |limit| limit as i64);

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params![limit, query.offset as i64], task_from_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn fetch_all(&self) -> Result<Vec<Task>> {
        self.fetch(&TaskQuery::default())
    }

    /// Counts the tasks matching `filter`, regardless of any window.
    pub fn count(&self, filter: TaskFilter) -> Result<u64> {
        let sql = format!("{} {}", SELECT_COUNT, filter_clause(filter));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;

        Ok(count as u64)
    }

    /// Applies `changes` to the row with `id`. Returns the number of rows affected.
    pub fn update(&mut self, id: i64, changes: &TaskChanges) -> Result<usize> {
        self.conn.execute(
            UPDATE_TASK,
            params![
                changes.title,
                changes.completed,
                changes.due_date.is_some(),
                changes.due_date.flatten(),
                changes.priority,
                changes.estimated_time,
                id
            ],
        )
    }

    /// Removes the row with `id`. Returns the number of rows affected.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        self.conn.execute(DELETE_TASK, [id])
    }
}
