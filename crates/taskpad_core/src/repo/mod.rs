//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for the task store.
//! - Isolate SQLite query details from presenter orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Task::validate()` before persistence.

pub mod task_repo;
