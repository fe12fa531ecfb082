//! Row identifier.

use crate::error::ValueError;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a row within its table.
///
/// Row ids are assigned by the application, not by the store. They are
/// either integers or strings; every integer id sorts before every string id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Integer identifier.
    Int(i64),
    /// String identifier.
    Text(String),
}

impl RowId {
    /// Returns the integer id, if this is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RowId::Int(n) => Some(*n),
            RowId::Text(_) => None,
        }
    }

    /// Returns the string id, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RowId::Int(_) => None,
            RowId::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<i32> for RowId {
    fn from(n: i32) -> Self {
        RowId::Int(i64::from(n))
    }
}

impl From<u32> for RowId {
    fn from(n: u32) -> Self {
        RowId::Int(i64::from(n))
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Text(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId::Text(s)
    }
}

impl From<&RowId> for RowId {
    fn from(id: &RowId) -> Self {
        id.clone()
    }
}

impl TryFrom<&Value> for RowId {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(RowId::Int(*n)),
            Value::Text(s) => Ok(RowId::Text(s.clone())),
            other => Err(ValueError::InvalidRowId {
                found: other.type_name(),
            }),
        }
    }
}
