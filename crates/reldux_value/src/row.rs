//! Row records.

use crate::error::{ValueError, ValueResult};
use crate::id::RowId;
use crate::value::Value;
use imbl::OrdMap;
use serde::{Deserialize, Serialize};

/// Name of the field that carries a row's identity.
pub const ID_FIELD: &str = "id";

/// A record: an ordered, persistent map from field name to value.
///
/// Cloning a row is O(1) and clones share structure, so rows can be kept in
/// many snapshots at once without copying their fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(OrdMap<String, Value>);

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self(OrdMap::new())
    }

    /// Returns this row with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Sets a field, returning the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Gets a field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Checks if a field is present.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Shallow-merges `patch` over this row.
    ///
    /// Fields present in `patch` replace those in `self`; all other fields
    /// of `self` are kept. Nested maps are replaced, not merged.
    #[must_use]
    pub fn merge(&self, patch: &Row) -> Row {
        let mut merged = self.0.clone();
        for (field, value) in patch.0.iter() {
            merged.insert(field.clone(), value.clone());
        }
        Row(merged)
    }

    /// Reads the row's identity from its `id` field.
    pub fn id(&self) -> ValueResult<RowId> {
        RowId::try_from(self.field(ID_FIELD)?)
    }

    /// Gets a field that must be present.
    pub fn field(&self, field: &str) -> ValueResult<&Value> {
        self.0
            .get(field)
            .ok_or_else(|| ValueError::missing_field(field))
    }

    /// Reads a boolean field.
    pub fn bool(&self, field: &str) -> ValueResult<bool> {
        let value = self.field(field)?;
        value
            .as_bool()
            .ok_or_else(|| ValueError::type_mismatch(field, "bool", value.type_name()))
    }

    /// Reads an integer field.
    pub fn integer(&self, field: &str) -> ValueResult<i64> {
        let value = self.field(field)?;
        value
            .as_integer()
            .ok_or_else(|| ValueError::type_mismatch(field, "integer", value.type_name()))
    }

    /// Reads a text field.
    pub fn text(&self, field: &str) -> ValueResult<&str> {
        let value = self.field(field)?;
        value
            .as_text()
            .ok_or_else(|| ValueError::type_mismatch(field, "text", value.type_name()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}
