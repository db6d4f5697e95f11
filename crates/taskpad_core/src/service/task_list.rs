//! Task list presenter.
//!
//! # Responsibility
//! - Own the ordered in-memory mirror of task titles that drives the list
//!   widget.
//! - Keep the mirror and the store in sync after every mutation.
//!
//! # Invariants
//! - The mirror is loaded exactly once, at construction, via `list_all()`.
//!   After that the mirror is trusted as source of truth; the table is never
//!   re-read to corroborate writes.
//! - `delete_selected` removes the FIRST in-memory occurrence of the selected
//!   display value; the store deletes ALL rows with that title. With
//!   duplicate titles present, one delete can leave the store missing more
//!   rows than the mirror. Inherited behavior, kept observable via
//!   `DeleteOutcome::rows_removed`.

use crate::model::task::Task;
use crate::repo::task_repo::{RepoResult, TaskRepository};
use log::info;

/// Result of submitting raw input from the entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was accepted and appended to the list.
    Added { title: String },
    /// Input was empty or whitespace-only; nothing changed.
    EmptyInput,
}

/// Result of a delete-selected request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One mirror entry was removed; `rows_removed` counts store rows, which
    /// can exceed one when duplicates exist.
    Deleted { title: String, rows_removed: usize },
    /// No list entry was selected; nothing changed.
    NothingSelected,
}

/// In-memory mirror of the task store, in display order.
pub struct TaskList<R: TaskRepository> {
    repo: R,
    titles: Vec<String>,
}

impl<R: TaskRepository> TaskList<R> {
    /// Loads the mirror from the store. Called once at startup.
    pub fn load(repo: R) -> RepoResult<Self> {
        let titles = repo
            .list_all()?
            .into_iter()
            .map(|task| task.title)
            .collect::<Vec<_>>();
        info!(
            "event=list_load module=presenter status=ok count={}",
            titles.len()
        );
        Ok(Self { repo, titles })
    }

    /// Submits raw input: trims, validates non-empty, appends to mirror and
    /// store.
    pub fn submit(&mut self, raw: &str) -> RepoResult<SubmitOutcome> {
        let task = match Task::parse(raw) {
            Ok(task) => task,
            Err(_) => return Ok(SubmitOutcome::EmptyInput),
        };

        self.titles.push(task.title.clone());
        self.repo.append(&task)?;
        info!("event=task_submit module=presenter status=ok");
        Ok(SubmitOutcome::Added { title: task.title })
    }

    /// Deletes the task at the given display index.
    ///
    /// The display value is looked up first, then the first mirror occurrence
    /// of that value is removed. The store deletes all rows with that title.
    pub fn delete_selected(&mut self, selection: Option<usize>) -> RepoResult<DeleteOutcome> {
        let Some(title) = selection.and_then(|index| self.titles.get(index)).cloned() else {
            return Ok(DeleteOutcome::NothingSelected);
        };

        if let Some(position) = self.titles.iter().position(|entry| *entry == title) {
            self.titles.remove(position);
        }
        let rows_removed = self.repo.remove(&title)?;
        info!(
            "event=task_delete module=presenter status=ok rows_removed={rows_removed}"
        );
        Ok(DeleteOutcome::Deleted {
            title,
            rows_removed,
        })
    }

    /// Empties the mirror and the store. The confirmation prompt is the UI
    /// layer's job; this method runs unconditionally.
    pub fn clear_all(&mut self) -> RepoResult<usize> {
        self.titles.clear();
        let rows_removed = self.repo.clear()?;
        info!(
            "event=task_clear_all module=presenter status=ok rows_removed={rows_removed}"
        );
        Ok(rows_removed)
    }

    /// The ordered view the UI renders from after every mutation.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
