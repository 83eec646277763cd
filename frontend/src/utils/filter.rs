//! Client-side search, filter and sort for task tables.

use std::cmp::Ordering;

use crate::api::{Task, TaskPriority, TaskStatus};
use crate::utils::format::date_key;

/// Select value meaning "no filter".
pub const ALL: &str = "ALL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSort {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    PriorityDesc,
    PriorityAsc,
}

impl TaskSort {
    pub const ALL: [TaskSort; 6] = [
        TaskSort::DateDesc,
        TaskSort::DateAsc,
        TaskSort::TitleAsc,
        TaskSort::TitleDesc,
        TaskSort::PriorityDesc,
        TaskSort::PriorityAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskSort::DateDesc => "DATE_DESC",
            TaskSort::DateAsc => "DATE_ASC",
            TaskSort::TitleAsc => "TITLE_ASC",
            TaskSort::TitleDesc => "TITLE_DESC",
            TaskSort::PriorityDesc => "PRIORITY_DESC",
            TaskSort::PriorityAsc => "PRIORITY_ASC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskSort::DateDesc => "Newest first",
            TaskSort::DateAsc => "Oldest first",
            TaskSort::TitleAsc => "Title A-Z",
            TaskSort::TitleDesc => "Title Z-A",
            TaskSort::PriorityDesc => "Highest priority",
            TaskSort::PriorityAsc => "Lowest priority",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == raw)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub sort: TaskSort,
}

impl TaskFilter {
    /// Parses a status `<select>` value; `ALL` or unknown clears the filter.
    pub fn set_status(&mut self, raw: &str) {
        self.status = TaskStatus::parse(raw);
    }

    pub fn set_priority(&mut self, raw: &str) {
        self.priority = TaskPriority::parse(raw);
    }

    pub fn active_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.priority.is_some())
    }

    /// Clears search and filters; the sort order is kept.
    pub fn reset(&mut self) {
        self.search.clear();
        self.status = None;
        self.priority = None;
    }

    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        let found = needle.is_empty()
            || task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
        found
            && self.status.map_or(true, |s| task.status == Some(s))
            && self.priority.map_or(true, |p| task.priority == Some(p))
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut out: Vec<Task> = tasks.iter().filter(|t| self.matches(t)).cloned().collect();
        out.sort_by(|a, b| compare(self.sort, a, b));
        out
    }
}

fn compare(sort: TaskSort, a: &Task, b: &Task) -> Ordering {
    let date = |t: &Task| t.due_date.as_deref().and_then(date_key);
    let rank = |t: &Task| t.priority.map(TaskPriority::rank).unwrap_or(0);
    match sort {
        TaskSort::DateDesc => date(b).cmp(&date(a)),
        TaskSort::DateAsc => date(a).cmp(&date(b)),
        TaskSort::TitleAsc => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        TaskSort::TitleDesc => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
        TaskSort::PriorityDesc => rank(b).cmp(&rank(a)),
        TaskSort::PriorityAsc => rank(a).cmp(&rank(b)),
    }
}
