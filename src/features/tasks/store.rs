//! Personal tasks attached to calendar days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::features::notes::truncate_chars;
use crate::storage::{CloudStore, TASKS_KEY};

/// Longest task note, in characters.
pub const MAX_TASK_NOTE_CHARS: usize = 512;

/// A task on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    /// `""`, `HH:MM` or `HH:MM–HH:MM`.
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TaskRecord {
    /// Build a task, trimming the title and note.
    ///
    /// A blank note becomes `None`; a long one is cut to
    /// [`MAX_TASK_NOTE_CHARS`].
    #[must_use]
    pub fn new(title: &str, time: impl Into<String>, note: Option<&str>) -> Self {
        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(|n| truncate_chars(n, MAX_TASK_NOTE_CHARS).0);
        Self {
            title: title.trim().to_string(),
            time: time.into(),
            note,
        }
    }

    #[must_use]
    pub fn has_time(&self) -> bool {
        !self.time.is_empty()
    }
}

/// Tasks of every day, in insertion order within a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    days: BTreeMap<NaiveDate, Vec<TaskRecord>>,
}

impl TaskStore {
    /// Load all tasks, empty when none were saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds malformed tasks.
    pub fn load(store: &CloudStore) -> Result<Self, ScheduleError> {
        Ok(store.load(TASKS_KEY)?.unwrap_or_default())
    }

    /// Persist all tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self, store: &CloudStore) -> Result<(), ScheduleError> {
        store.save(TASKS_KEY, self)
    }

    /// Append a task to `date`. Returns its 1-based position.
    pub fn add(&mut self, date: NaiveDate, task: TaskRecord) -> usize {
        let tasks = self.days.entry(date).or_default();
        tasks.push(task);
        tasks.len()
    }

    /// Tasks of `date`, in the order they were added.
    #[must_use]
    pub fn tasks_for(&self, date: NaiveDate) -> &[TaskRecord] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Remove the task at 1-based `position` of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NotFound`] if there is no such task.
    pub fn remove(&mut self, date: NaiveDate, position: usize) -> Result<TaskRecord, ScheduleError> {
        let not_found = || ScheduleError::NotFound(format!("task {position} on {date}"));

        let tasks = self.days.get_mut(&date).ok_or_else(not_found)?;
        if position == 0 || position > tasks.len() {
            return Err(not_found());
        }
        let removed = tasks.remove(position - 1);
        if tasks.is_empty() {
            self.days.remove(&date);
        }
        Ok(removed)
    }

    /// Days that have tasks, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
