//! Domain model for taskpad.
//!
//! # Responsibility
//! - Define the canonical task record used by core business logic.
//!
//! # Invariants
//! - A task is identified only by its literal title text; there is no
//!   separate identifier.

pub mod task;
