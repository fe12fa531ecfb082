//! # Reldux Value
//!
//! Row and value model for Reldux.
//!
//! This crate provides:
//! - [`RowId`]: application-assigned row identity (integer or string)
//! - [`Value`]: dynamic field values
//! - [`Row`]: persistent field maps with shallow merge
//!
//! ## Usage
//!
//! ```
//! use reldux_value::{Row, RowId};
//!
//! let todo = Row::new()
//!     .with("id", 0)
//!     .with("text", "Use Redux")
//!     .with("completed", false);
//!
//! let done = todo.merge(&Row::new().with("completed", true));
//! assert_eq!(done.id().unwrap(), RowId::Int(0));
//! assert_eq!(done.bool("completed").unwrap(), true);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod id;
mod row;
mod value;

pub use error::{ValueError, ValueResult};
pub use id::RowId;
pub use row::{Row, ID_FIELD};
pub use value::Value;
