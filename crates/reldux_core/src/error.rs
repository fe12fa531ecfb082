//! Error types for Reldux core.

use reldux_value::{RowId, ValueError};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in Reldux core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Row data could not be read.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// An operation referenced a table that the table-space does not hold.
    #[error("no such table: {name}")]
    NoSuchTable {
        /// Name of the table.
        name: String,
    },

    /// A table-space holds a table that the schema does not declare.
    #[error("undeclared table in table-space: {name}")]
    UndeclaredTable {
        /// Name of the table.
        name: String,
    },

    /// An update targeted a row that does not exist.
    #[error("no such row: {id} in table {table}")]
    NoSuchRow {
        /// The table searched.
        table: String,
        /// The row id that was not found.
        id: RowId,
    },

    /// A row handed to insert carries no usable id.
    #[error("row inserted into {table} has no usable id: {source}")]
    MissingRowId {
        /// The target table.
        table: String,
        /// Why the id could not be read.
        source: ValueError,
    },

    /// No relation is declared between two collections.
    #[error("no relation declared between {from} and {to}")]
    NoSuchRelation {
        /// The collection the lookup started from.
        from: String,
        /// The collection or relation name that was requested.
        to: String,
    },

    /// Two collections in one schema share a name.
    #[error("duplicate collection name: {name}")]
    DuplicateCollection {
        /// The repeated name.
        name: String,
    },

    /// The schema declaration is inconsistent.
    #[error("invalid schema: {message}")]
    InvalidSchema {
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates a no such table error.
    pub fn no_such_table(name: impl Into<String>) -> Self {
        Self::NoSuchTable { name: name.into() }
    }

    /// Creates a no such row error.
    pub fn no_such_row(table: impl Into<String>, id: RowId) -> Self {
        Self::NoSuchRow {
            table: table.into(),
            id,
        }
    }

    /// Creates a no such relation error.
    pub fn no_such_relation(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoSuchRelation {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }
}
