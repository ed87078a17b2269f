//! Client-side view of the task list.
//!
//! All browsing state lives in one explicit, serializable [`ViewState`]
//! (page, page size, filter, sort). The same struct is the query string of
//! `GET /tasks`, so a view state can be sent to the server as is. Rendering
//! is a pure function of the state and the fetched page and always produces
//! the whole list; nothing is patched incrementally.
//!
//! Title editing is modelled by [`EditSession`]: it is seeded with the
//! current title and ends either in a commit or a silent cancel.

use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskPage, TaskQuery, TaskSort};
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub page: u32,
    pub page_size: u32,
    pub filter: TaskFilter,
    pub sort: TaskSort,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: TaskFilter::All,
            sort: TaskSort::None,
        }
    }
}

impl ViewState {
    pub fn with_page_size(page_size: u32) -> Self {
        ViewState {
            page_size,
            ..Default::default()
        }
        .normalized()
    }

    /// Clamps page and page size into their valid ranges.
    pub fn normalized(&self) -> Self {
        ViewState {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            ..*self
        }
    }

    /// The store window this state asks for.
    pub fn query(&self) -> TaskQuery {
        let state = self.normalized();
        TaskQuery {
            filter: state.filter,
            sort: state.sort,
            offset: u64::from(state.page - 1) * u64::from(state.page_size),
            limit: Some(u64::from(state.page_size)),
        }
    }

    pub fn page_count(&self, total: u64) -> u64 {
        let page_size = u64::from(self.normalized().page_size);
        total.div_ceil(page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: u64) -> bool {
        let state = self.normalized();
        u64::from(state.page) * u64::from(state.page_size) < total
    }

    pub fn next_page(&self, total: u64) -> Self {
        if self.has_next(total) {
            ViewState {
                page: self.page + 1,
                ..*self
            }
        } else {
            *self
        }
    }

    pub fn prev_page(&self) -> Self {
        ViewState {
            page: self.page.saturating_sub(1).max(1),
            ..*self
        }
    }

    /// Changing the filter starts over from the first page.
    pub fn with_filter(&self, filter: TaskFilter) -> Self {
        ViewState { filter, page: 1, ..*self }
    }

    /// Changing the sort order starts over from the first page.
    pub fn with_sort(&self, sort: TaskSort) -> Self {
        ViewState { sort, page: 1, ..*self }
    }

    pub fn query_string(&self) -> String {
        format!(
            "page={}&pageSize={}&filter={}&sort={}",
            self.page,
            self.page_size,
            self.filter.as_str(),
            self.sort.as_str()
        )
    }
}

/// Filters and orders a fetched page the way `state` asks for.
pub fn apply(tasks: &[Task], state: &ViewState) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks.iter().filter(|task| state.filter.matches(task)).cloned().collect();
    visible.sort_by(|a, b| state.sort.compare(a, b));
    visible
}

pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// One-line summary of where the view is: page, totals, filter, sort and
/// which pager directions are available.
pub fn pager_line(state: &ViewState, total: u64) -> String {
    let prev = if state.has_prev() { "[< prev]" } else { "[     ]" };
    let next = if state.has_next(total) { "[next >]" } else { "[     ]" };
    format!(
        "{} Page {} of {} | {} task(s) | filter: {} | sort: {} {}",
        prev,
        state.page,
        state.page_count(total),
        total,
        state.filter.as_str(),
        state.sort.as_str(),
        next
    )
}

/// Renders the complete terminal view of a page.
pub fn render(state: &ViewState, page: &TaskPage) -> String {
    let tasks = apply(&page.tasks, state);
    if tasks.is_empty() {
        return format!("{}\n{}\n", Message::TasksNotFound, pager_line(state, page.total));
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "DONE", "TITLE", "DUE", "PRIORITY", "ESTIMATE"]);
    for task in &tasks {
        table.add_row(row![
            task.id,
            if task.completed { "[x]" } else { "[ ]" },
            task.title,
            task.due_date.map_or_else(|| "-".to_string(), |date| date.to_string()),
            task.priority,
            format_minutes(task.estimated_time)
        ]);
    }

    format!("{}{}\n", table, pager_line(state, page.total))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the complete HTML document for a page, with filter, sort and
/// pager links that carry the next view state in their query strings.
pub fn render_html(state: &ViewState, page: &TaskPage) -> String {
    let tasks = apply(&page.tasks, state);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Tasks</title>\n</head>\n<body>\n");
    html.push_str("<h1>Tasks</h1>\n<nav class=\"filters\">\n");
    for filter in [TaskFilter::All, TaskFilter::Completed, TaskFilter::NotCompleted] {
        let class = if filter == state.filter { " class=\"active\"" } else { "" };
        let _ = writeln!(html, "<a{} href=\"/?{}\">{}</a>", class, state.with_filter(filter).query_string(), filter.as_str());
    }
    for sort in [TaskSort::None, TaskSort::DateAsc, TaskSort::DateDesc] {
        let class = if sort == state.sort { " class=\"active\"" } else { "" };
        let _ = writeln!(html, "<a{} href=\"/?{}\">{}</a>", class, state.with_sort(sort).query_string(), sort.as_str());
    }
    html.push_str("</nav>\n<ul id=\"task-list\">\n");

    if tasks.is_empty() {
        let _ = writeln!(html, "<li class=\"empty\">{}</li>", Message::TasksNotFound);
    }
    for task in &tasks {
        let class = if task.completed { " class=\"completed\"" } else { "" };
        let checked = if task.completed { " checked" } else { "" };
        let due = task.due_date.map_or_else(String::new, |date| format!(" <time>{}</time>", date));
        let _ = writeln!(
            html,
            "<li data-id=\"{}\"{}><input type=\"checkbox\" disabled{}> <span>{}</span>{} <em>{}</em> <small>{}</small></li>",
            task.id,
            class,
            checked,
            escape_html(&task.title),
            due,
            task.priority,
            format_minutes(task.estimated_time)
        );
    }
    html.push_str("</ul>\n<nav class=\"pager\">\n");

    if state.has_prev() {
        let _ = writeln!(html, "<a rel=\"prev\" href=\"/?{}\">Prev</a>", state.prev_page().query_string());
    }
    let _ = writeln!(html, "<span>Page {} of {}</span>", state.page, state.page_count(page.total));
    if state.has_next(page.total) {
        let _ = writeln!(html, "<a rel=\"next\" href=\"/?{}\">Next</a>", state.next_page(page.total).query_string());
    }
    html.push_str("</nav>\n</body>\n</html>\n");

    html
}

/// Keys that end an in-place title edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Blur,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Send the new title to the server.
    Commit(String),
    /// Restore the original title; no request is made.
    Cancel,
}

/// An in-progress title edit, seeded with the task's current title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    original: String,
    buffer: String,
}

impl EditSession {
    pub fn begin(title: &str) -> Self {
        EditSession {
            original: title.to_string(),
            buffer: title.to_string(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn input(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Ends the edit. Only `Enter` with a non-blank buffer commits.
    pub fn finish(self, key: EditKey) -> EditOutcome {
        match key {
            EditKey::Enter if !self.buffer.trim().is_empty() => EditOutcome::Commit(self.buffer.trim().to_string()),
            _ => EditOutcome::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;
    use chrono::NaiveDate;

    fn task(id: i64, completed: bool, due: Option<u32>) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            completed,
            due_date: due.and_then(|day| NaiveDate::from_ymd_opt(2025, 1, day)),
            priority: Priority::Medium,
            estimated_time: 30,
            created_at: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap().and_hms_opt(8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn pager_follows_total() {
        let state = ViewState::with_page_size(5);
        assert!(!state.has_prev());
        assert!(state.has_next(12));
        assert_eq!(state.page_count(12), 3);

        let last = state.next_page(12).next_page(12);
        assert_eq!(last.page, 3);
        assert!(!last.has_next(12));
        assert_eq!(last.next_page(12).page, 3);
        assert_eq!(last.prev_page().page, 2);
        assert_eq!(state.prev_page().page, 1);

        assert_eq!(state.page_count(0), 1);
        assert!(!state.has_next(5));
    }

    #[test]
    fn filter_and_sort_changes_reset_the_page() {
        let state = ViewState { page: 3, ..Default::default() };
        assert_eq!(state.with_filter(TaskFilter::Completed).page, 1);
        assert_eq!(state.with_sort(TaskSort::DateDesc).page, 1);
    }

    #[test]
    fn query_window_comes_from_page() {
        let query = ViewState { page: 2, page_size: 5, ..Default::default() }.query();
        assert_eq!(query.offset, 5);
        assert_eq!(query.limit, Some(5));

        let clamped = ViewState { page: 0, page_size: 1000, ..Default::default() }.normalized();
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn view_state_round_trips_through_query_string() {
        let state = ViewState {
            page: 2,
            page_size: 5,
            filter: TaskFilter::NotCompleted,
            sort: TaskSort::DateAsc,
        };
        assert_eq!(state.query_string(), "page=2&pageSize=5&filter=not-completed&sort=date-asc");

        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["pageSize"], 5);
        assert_eq!(json["filter"], "not-completed");
    }

    #[test]
    fn apply_filters_then_sorts() {
        let tasks = vec![task(1, true, Some(20)), task(2, false, None), task(3, true, Some(5))];
        let state = ViewState::default().with_filter(TaskFilter::Completed).with_sort(TaskSort::DateAsc);

        let visible = apply(&tasks, &state);
        assert_eq!(visible.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn render_replaces_the_whole_list() {
        let page = TaskPage {
            tasks: vec![task(1, true, Some(2)), task(2, false, None)],
            total: 2,
        };
        let out = render(&ViewState::default(), &page);
        assert!(out.contains("Task 1"));
        assert!(out.contains("[x]"));
        assert!(out.contains("2025-01-02"));
        assert!(out.contains("Page 1 of 1"));

        let empty = render(&ViewState::default(), &TaskPage::default());
        assert!(empty.starts_with(&Message::TasksNotFound.to_string()));
    }

    #[test]
    fn html_escapes_titles_and_links_pages() {
        let mut t = task(1, false, None);
        t.title = "<b>milk & eggs</b>".to_string();
        let page = TaskPage { tasks: vec![t], total: 11 };

        let html = render_html(&ViewState::default(), &page);
        assert!(html.contains("&lt;b&gt;milk &amp; eggs&lt;/b&gt;"));
        assert!(html.contains("rel=\"next\" href=\"/?page=2&pageSize=10&filter=all&sort=none\""));
        assert!(!html.contains("rel=\"prev\""));
    }

    #[test]
    fn minutes_are_humanized() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(90), "1h 30m");
    }

    #[test]
    fn edit_commits_only_on_enter_with_text() {
        let mut session = EditSession::begin("Buy milk");
        assert_eq!(session.buffer(), "Buy milk");
        session.input("  Buy oat milk ");
        assert_eq!(session.clone().finish(EditKey::Enter), EditOutcome::Commit("Buy oat milk".to_string()));
        assert_eq!(session.clone().finish(EditKey::Escape), EditOutcome::Cancel);
        assert_eq!(session.finish(EditKey::Blur), EditOutcome::Cancel);

        let mut emptied = EditSession::begin("Buy milk");
        emptied.input("");
        assert_eq!(emptied.finish(EditKey::Enter), EditOutcome::Cancel);
    }
}
