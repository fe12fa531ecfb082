//! Dynamic field value type.

use crate::id::RowId;
use crate::row::Row;
use serde::{Deserialize, Serialize};

/// A dynamic field value.
///
/// Floats are intentionally not supported: rows are compared structurally and
/// every value must have a total equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Text string.
    Text(String),
    /// Array of values.
    Array(Vec<Value>),
    /// Nested record.
    Map(Row),
}

impl Value {
    /// Returns the kind of this value, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Check if this is a null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get this value as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this value as a text string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get this value as a nested record.
    #[must_use]
    pub fn as_map(&self) -> Option<&Row> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<Row> for Value {
    fn from(row: Row) -> Self {
        Value::Map(row)
    }
}

impl From<RowId> for Value {
    fn from(id: RowId) -> Self {
        match id {
            RowId::Int(n) => Value::Integer(n),
            RowId::Text(s) => Value::Text(s),
        }
    }
}

impl From<&RowId> for Value {
    fn from(id: &RowId) -> Self {
        Value::from(id.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(Value::from("hi").as_text(), Some("hi"));
        assert_eq!(Value::Integer(3).as_text(), None);
        assert!(Value::from(None::<i64>).is_null());
    }

    #[test]
    fn row_id_converts_to_matching_kind() {
        assert_eq!(Value::from(RowId::Int(2)), Value::Integer(2));
        assert_eq!(Value::from(RowId::from("k")), Value::Text("k".into()));
    }

    #[test]
    fn json_shape_is_untagged() {
        let value = Value::Array(vec![Value::Null, Value::Bool(false), Value::Integer(1)]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "[null,false,1]");

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
