//! # Reldux Core
//!
//! Schema-defined, normalized, immutable table-space for reducer state.
//!
//! This crate provides:
//! - [`Schema`]: the declared collections and their relations
//! - [`TableSpace`] and [`Table`]: persistent snapshots of rows keyed by id
//! - [`Db`]: a transaction session that queues operations and commits them
//!   atomically on [`Db::run`]
//! - [`After`]: one operation, run immediately
//! - Relation traversal ([`RelationQuery`]) and linking ([`RelationChain`])
//!
//! A reducer takes the current snapshot, opens a session over it, queues
//! work, and returns whatever `run()` produces. Snapshots are never mutated,
//! so the previous state stays valid for change detection.
//!
//! ## Usage
//!
//! ```
//! use reldux_core::{collection, schema};
//! use reldux_value::Row;
//!
//! let app = schema([
//!     collection("User").has_many("sent", "Message", "from"),
//!     collection("Message").belongs_to("from", "User"),
//! ])
//! .unwrap();
//!
//! let mut db = app.db(app.initial());
//! db.insert("User", Row::new().with("id", 1).with("name", "ada"))
//!     .insert("Message", Row::new().with("id", 10).with("from", 1));
//! let state = db.run().unwrap();
//!
//! let db = app.db(state);
//! let ada = db.get("User", 1).unwrap().unwrap();
//! let sent = db.for_row("User", &ada).all("Message").unwrap();
//! assert_eq!(sent.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod config;
mod error;
mod relation;
mod schema;
mod session;
mod space;

pub use collection::{collection, Collection, Record};
pub use config::{Config, MissingRowPolicy};
pub use error::{CoreError, CoreResult};
pub use relation::{Relation, RelationChain, RelationKind, RelationQuery, RelationRecord};
pub use schema::{schema, Schema};
pub use session::{After, Db};
pub use space::{Table, TableSpace};

pub use reldux_value::{Row, RowId, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
