//! Task domain model.
//!
//! # Responsibility
//! - Define the typed record for one to-do item.
//! - Enforce the single validation rule: a title is non-empty after trimming.
//!
//! # Invariants
//! - `title` never holds leading/trailing whitespace and is never empty.
//! - Duplicate titles are allowed; two tasks with equal titles are
//!   indistinguishable.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for raw task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input was empty or whitespace-only after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item. The title is the whole identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
}

impl Task {
    /// Parses raw user input into a task, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyTitle` when the trimmed input is
    ///   empty.
    pub fn parse(raw: &str) -> Result<Self, TaskValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_string(),
        })
    }

    /// Validates an already-constructed task.
    ///
    /// Repository write paths call this before any SQL mutation, so a task
    /// assembled by hand goes through the same gate as parsed input.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
