//! The table-space: every table of one schema.

use crate::error::{CoreError, CoreResult};
use crate::space::Table;
use imbl::OrdMap;
use reldux_value::{Row, RowId};

/// An immutable mapping from table name to table.
///
/// This is the state a host application stores. A table-space produced by
/// `Schema::initial` holds exactly one table per declared collection, and
/// every session over it keeps that set of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpace {
    tables: OrdMap<String, Table>,
}

impl TableSpace {
    /// Creates a table-space with no tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a table by name.
    pub fn table(&self, name: &str) -> CoreResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| CoreError::no_such_table(name))
    }

    /// Gets a table by name, if present.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Checks if a table is present.
    #[must_use]
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Iterates table names in order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Iterates `(name, table)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Returns the number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Checks if there are no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Gets a row from a table.
    pub fn row(&self, table: &str, id: &RowId) -> CoreResult<Option<&Row>> {
        Ok(self.table(table)?.get(id))
    }

    pub(crate) fn insert_table(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }
}
