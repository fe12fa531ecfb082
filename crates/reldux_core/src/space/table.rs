//! A single table.

use imbl::OrdMap;
use reldux_value::{Row, RowId};

/// An immutable mapping from row id to row, for one collection.
///
/// Rows iterate in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: OrdMap<RowId, Row>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a row by id.
    #[must_use]
    pub fn get(&self, id: &RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    /// Checks if a row exists.
    #[must_use]
    pub fn contains(&self, id: &RowId) -> bool {
        self.rows.contains_key(id)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates `(id, row)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&RowId, &Row)> {
        self.rows.iter()
    }

    /// Iterates row ids.
    pub fn ids(&self) -> impl Iterator<Item = &RowId> {
        self.rows.keys()
    }

    /// Iterates rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    pub(crate) fn insert(&mut self, id: RowId, row: Row) {
        self.rows.insert(id, row);
    }

    pub(crate) fn remove(&mut self, id: &RowId) -> Option<Row> {
        self.rows.remove(id)
    }
}

impl FromIterator<(RowId, Row)> for Table {
    fn from_iter<I: IntoIterator<Item = (RowId, Row)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> Row {
        Row::new().with("id", id)
    }

    #[test]
    fn iterates_in_id_order() {
        let table: Table = [2, 0, 1]
            .into_iter()
            .map(|n| (RowId::Int(n), row(n)))
            .collect();

        let ids: Vec<_> = table.ids().cloned().collect();
        assert_eq!(ids, vec![RowId::Int(0), RowId::Int(1), RowId::Int(2)]);
    }

    #[test]
    fn clones_are_independent() {
        let mut original = Table::new();
        original.insert(RowId::Int(1), row(1));

        let mut copy = original.clone();
        copy.insert(RowId::Int(2), row(2));
        copy.remove(&RowId::Int(1));

        assert_eq!(original.len(), 1);
        assert!(original.contains(&RowId::Int(1)));
        assert_eq!(copy.len(), 1);
        assert!(copy.contains(&RowId::Int(2)));
    }

    #[test]
    fn insert_at_existing_id_replaces() {
        let mut table = Table::new();
        table.insert(RowId::Int(1), row(1));
        table.insert(RowId::Int(1), row(1).with("text", "again"));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(&RowId::Int(1)).and_then(|r| r.text("text").ok()),
            Some("again")
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ids_are_sorted_and_unique(keys in prop::collection::vec(-50i64..50, 0..40)) {
                let table: Table = keys.iter().map(|&n| (RowId::Int(n), row(n))).collect();
                let ids: Vec<i64> = table.ids().filter_map(RowId::as_int).collect();

                let mut expected = keys.clone();
                expected.sort_unstable();
                expected.dedup();
                prop_assert_eq!(ids, expected);
            }
        }
    }
}
