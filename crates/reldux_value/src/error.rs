//! Error types for the value crate.

use thiserror::Error;

/// Result type for value operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised when reading typed data out of rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The row has no field with this name.
    #[error("missing field: {field}")]
    MissingField {
        /// Name of the field.
        field: String,
    },

    /// The field exists but holds a different kind of value.
    #[error("field {field}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the field.
        field: String,
        /// Expected value kind.
        expected: &'static str,
        /// Actual value kind.
        found: &'static str,
    },

    /// A value cannot be used as a row identifier.
    #[error("invalid row id: expected integer or text, found {found}")]
    InvalidRowId {
        /// Actual value kind.
        found: &'static str,
    },
}

impl ValueError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }
}
