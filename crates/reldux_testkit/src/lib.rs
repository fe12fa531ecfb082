//! # Reldux Testkit
//!
//! Test utilities for Reldux.
//!
//! This crate provides:
//! - Fixture schemas and rows (a todo list and a chat with relations)
//! - Property-based test generators using proptest
//! - A reference model that replays queued operations on a plain map
//!
//! ## Usage
//!
//! ```
//! use reldux_testkit::prelude::*;
//!
//! let schema = todo_schema();
//! let state = scenarios::populated_todos(&schema, 3);
//! assert_eq!(state.table(TODO).unwrap().len(), 3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
