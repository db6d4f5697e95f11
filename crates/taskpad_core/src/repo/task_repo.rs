//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the four store operations over the `tasks` table: append,
//!   remove-by-title, clear, list-all.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before SQL mutations.
//! - `remove` deletes ALL rows matching the title, while the presenter
//!   removes only the first in-memory match. This mismatch is inherited
//!   behavior and is surfaced through the returned row count rather than
//!   silently changed.
//! - `list_all` requests no ORDER BY; iteration order after a restart is
//!   whatever the engine returns.

use crate::db::DbError;
use crate::model::task::{Task, TaskValidationError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the task store.
pub trait TaskRepository {
    /// Inserts one row. Duplicate titles are allowed silently.
    fn append(&self, task: &Task) -> RepoResult<()>;
    /// Deletes all rows whose title matches exactly. Returns rows removed.
    fn remove(&self, title: &str) -> RepoResult<usize>;
    /// Deletes every row. Returns rows removed.
    fn clear(&self) -> RepoResult<usize>;
    /// Returns all tasks in engine iteration order.
    fn list_all(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Wraps a connection that has been bootstrapped via `db::open_db` or
    /// `db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn append(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;
        self.conn.execute(
            "INSERT INTO tasks (title) VALUES (?1);",
            [task.title.as_str()],
        )?;
        Ok(())
    }

    fn remove(&self, title: &str) -> RepoResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE title = ?1;", [title])?;
        Ok(removed)
    }

    fn clear(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM tasks;", [])?;
        Ok(removed)
    }

    fn list_all(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare("SELECT title FROM tasks;")?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            let title: String = row.get(0)?;
            tasks.push(Task { title });
        }

        Ok(tasks)
    }
}
