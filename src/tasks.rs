//! Task list collaborator
//!
//! Lives beside the simulation core, not inside it: plain CRUD over a
//! record list, persisted as one JSON blob behind a flat key-value storage
//! contract. Covers what the page shell needs - add/toggle/delete,
//! clear-completed, calendar-day filtering and per-month day bucketing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the serialized task list
const STORAGE_KEY: &str = "tasks";

/// Flat key-value storage read/write contract
///
/// The host decides where this lands (browser local storage, a file, a
/// test map); the task list only ever reads and writes whole values.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory backend for native runs and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Validation failures when adding a task
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    #[error("a task needs a title before saving")]
    EmptyTitle,
    #[error("a task needs a due date to be placed on the calendar")]
    MissingDueDate,
}

/// One task record. `due_date` is a calendar day in `YYYY-MM-DD` form;
/// records bucket by exact-day string match. Fields absent in older stored
/// records default on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub notes: String,
}

/// The task list
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated task, returning its id
    pub fn add(&mut self, text: &str, due_date: &str, notes: &str) -> Result<u64, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let due_date = due_date.trim();
        if due_date.is_empty() {
            return Err(TaskError::MissingDueDate);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            due_date: due_date.to_string(),
            notes: notes.trim().to_string(),
        });
        Ok(id)
    }

    /// Flip a task's completion flag; false if the id is unknown
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task; false if the id is unknown
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Drop every completed task
    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.completed);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Tasks due on one calendar day
    pub fn due_on<'a>(&'a self, day: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| t.due_date == day)
    }

    /// Chronological view: by due date, ties broken by creation order.
    /// ISO day strings sort correctly as plain strings.
    pub fn chronological(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id)));
        view
    }

    /// Tasks not yet completed
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Days of the given month with at least one task due, sorted and
    /// deduplicated - the calendar view's day markers
    pub fn days_with_tasks(&self, year: i32, month: u32) -> Vec<u32> {
        let prefix = format!("{year:04}-{month:02}-");
        let mut days: Vec<u32> = self
            .tasks
            .iter()
            .filter_map(|t| t.due_date.strip_prefix(&prefix))
            .filter_map(|day| day.parse().ok())
            .collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// Load from storage. Corrupt or missing data degrades to an empty
    /// list - the store is a convenience, never a failure source.
    pub fn load(storage: &dyn StorageBackend) -> Self {
        let Some(json) = storage.get(STORAGE_KEY) else {
            log::info!("no stored tasks, starting fresh");
            return Self::new();
        };

        match serde_json::from_str::<Vec<Task>>(&json) {
            Ok(tasks) => {
                let next_id = tasks.iter().map(|t| t.id + 1).max().unwrap_or(0);
                log::info!("loaded {} tasks", tasks.len());
                Self { tasks, next_id }
            }
            Err(err) => {
                log::warn!("stored tasks unreadable ({err}), starting fresh");
                Self::new()
            }
        }
    }

    /// Persist the whole list under one key
    pub fn save(&self, storage: &mut dyn StorageBackend) {
        match serde_json::to_string(&self.tasks) {
            Ok(json) => {
                storage.set(STORAGE_KEY, &json);
                log::info!("saved {} tasks", self.tasks.len());
            }
            Err(err) => log::warn!("task list not saved: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_validates_title_and_due_date() {
        let mut list = TaskList::new();
        assert_eq!(list.add("   ", "2026-08-06", ""), Err(TaskError::EmptyTitle));
        assert_eq!(list.add("water plants", "", ""), Err(TaskError::MissingDueDate));
        assert!(list.is_empty());

        let id = list.add("water plants", "2026-08-06", "the ficus too").unwrap();
        assert_eq!(list.len(), 1);
        let task = list.iter().next().unwrap();
        assert_eq!(task.id, id);
        assert!(!task.completed);
        assert_eq!(task.notes, "the ficus too");
    }

    #[test]
    fn toggle_and_delete_by_id() {
        let mut list = TaskList::new();
        let id = list.add("write report", "2026-08-07", "").unwrap();

        assert!(list.toggle(id));
        assert!(list.iter().next().unwrap().completed);
        assert!(list.toggle(id));
        assert!(!list.iter().next().unwrap().completed);
        assert!(!list.toggle(id + 99));

        assert!(list.delete(id));
        assert!(!list.delete(id));
        assert!(list.is_empty());
    }

    #[test]
    fn clear_completed_keeps_active_tasks() {
        let mut list = TaskList::new();
        let a = list.add("a", "2026-08-01", "").unwrap();
        let _b = list.add("b", "2026-08-02", "").unwrap();
        list.toggle(a);
        list.clear_completed();

        assert_eq!(list.len(), 1);
        assert_eq!(list.active_count(), 1);
        assert_eq!(list.iter().next().unwrap().text, "b");
    }

    #[test]
    fn day_filter_and_chronological_order() {
        let mut list = TaskList::new();
        list.add("later", "2026-09-01", "").unwrap();
        list.add("sooner", "2026-08-06", "").unwrap();
        list.add("also sooner", "2026-08-06", "").unwrap();

        assert_eq!(list.due_on("2026-08-06").count(), 2);
        assert_eq!(list.due_on("2026-12-25").count(), 0);

        let view = list.chronological();
        assert_eq!(
            view.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
            vec!["sooner", "also sooner", "later"]
        );
    }

    #[test]
    fn month_bucketing_collects_distinct_days() {
        let mut list = TaskList::new();
        list.add("a", "2026-08-06", "").unwrap();
        list.add("b", "2026-08-06", "").unwrap();
        list.add("c", "2026-08-21", "").unwrap();
        list.add("d", "2026-09-01", "").unwrap();

        assert_eq!(list.days_with_tasks(2026, 8), vec![6, 21]);
        assert_eq!(list.days_with_tasks(2026, 9), vec![1]);
        assert_eq!(list.days_with_tasks(2025, 8), Vec::<u32>::new());
    }

    #[test]
    fn round_trips_through_storage() {
        let mut storage = MemoryStorage::default();
        let mut list = TaskList::new();
        list.add("pack", "2026-08-10", "passport!").unwrap();
        let done = list.add("book flights", "2026-08-08", "").unwrap();
        list.toggle(done);
        list.save(&mut storage);

        let mut loaded = TaskList::load(&storage);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.active_count(), 1);

        // Fresh ids never collide with stored ones
        let id = loaded.add("new", "2026-08-11", "").unwrap();
        assert!(loaded.iter().filter(|t| t.id == id).count() == 1);
        assert!(id > done);
    }

    #[test]
    fn unreadable_storage_degrades_to_empty() {
        let mut storage = MemoryStorage::default();
        storage.set(STORAGE_KEY, "{not json");
        let list = TaskList::load(&storage);
        assert!(list.is_empty());
    }

    #[test]
    fn older_records_without_optional_fields_still_load() {
        let mut storage = MemoryStorage::default();
        storage.set(STORAGE_KEY, r#"[{"id": 3, "text": "old"}]"#);
        let list = TaskList::load(&storage);
        assert_eq!(list.len(), 1);
        let task = list.iter().next().unwrap();
        assert_eq!(task.due_date, "");
        assert_eq!(task.notes, "");
    }
}
