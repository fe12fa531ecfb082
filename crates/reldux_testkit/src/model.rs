//! Reference model for queued batches.
//!
//! Replays [`QueuedOp`]s on a plain `BTreeMap` with the default
//! missing-row policy, so property tests can compare a session's result
//! against an obviously correct implementation.

use crate::generators::{toggled, QueuedOp};
use reldux_core::Table;
use reldux_value::{Row, RowId};
use std::collections::BTreeMap;

/// The expected contents of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    rows: BTreeMap<RowId, Row>,
}

impl TableModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the rows of a committed table.
    pub fn from_table(table: &Table) -> Self {
        Self {
            rows: table.iter().map(|(id, row)| (id.clone(), row.clone())).collect(),
        }
    }

    /// Replays a whole batch. Returns `None` if any step would fail, in
    /// which case nothing is applied.
    pub fn replay(&self, ops: &[QueuedOp]) -> Option<Self> {
        let mut next = self.clone();
        for op in ops {
            next.apply(op)?;
        }
        Some(next)
    }

    /// Applies one step, returning `None` where the session would fail.
    pub fn apply(&mut self, op: &QueuedOp) -> Option<()> {
        match op {
            QueuedOp::Insert { row } => {
                let id = row.id().ok()?;
                let stored = match self.rows.get(&id) {
                    Some(existing) => existing.merge(row),
                    None => row.clone(),
                };
                self.rows.insert(id, stored);
            }
            QueuedOp::Update { id, patch } => {
                let existing = self.rows.get_mut(id)?;
                *existing = existing.merge(patch);
            }
            QueuedOp::Toggle { id } => {
                let existing = self.rows.get_mut(id)?;
                *existing = existing.merge(&toggled(existing));
            }
            QueuedOp::UpdateAll { patch } => {
                for row in self.rows.values_mut() {
                    *row = row.merge(patch);
                }
            }
            QueuedOp::Delete { id } => {
                self.rows.remove(id);
            }
            QueuedOp::DeleteWhereCompleted { completed } => {
                self.rows
                    .retain(|_, row| row.bool("completed") != Ok(*completed));
            }
        }
        Some(())
    }

    /// Returns true if `table` holds exactly the modelled rows.
    pub fn matches(&self, table: &Table) -> bool {
        table.len() == self.rows.len()
            && table
                .iter()
                .zip(self.rows.iter())
                .all(|((a_id, a), (b_id, b))| a_id == b_id && a == b)
    }

    /// Returns the number of modelled rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are modelled.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
