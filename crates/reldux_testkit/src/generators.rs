//! Property-based test generators using proptest.
//!
//! Ids are drawn from a small range so that generated batches hit the same
//! rows often: inserts overwrite, updates find (or miss) earlier rows, and
//! deletes remove them.

use proptest::prelude::*;
use reldux_core::Db;
use reldux_value::{Row, RowId, Value};

/// Strategy for generating row ids, mostly integers with some strings.
pub fn row_id_strategy() -> impl Strategy<Value = RowId> {
    prop_oneof![
        4 => (0i64..8).prop_map(RowId::Int),
        1 => prop::string::string_regex("[a-c]").expect("Invalid regex").prop_map(RowId::Text),
    ]
}

/// Strategy for generating scalar field values.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100i64..100).prop_map(Value::Integer),
        prop::string::string_regex("[a-z ]{0,12}")
            .expect("Invalid regex")
            .prop_map(Value::Text),
    ]
}

/// Strategy for generating a patch over the todo fields.
///
/// Never touches `id`, so a patch cannot move a row.
pub fn patch_strategy() -> impl Strategy<Value = Row> {
    (
        prop::option::of(prop::string::string_regex("[a-z ]{0,12}").expect("Invalid regex")),
        prop::option::of(any::<bool>()),
        prop::option::of(value_strategy()),
    )
        .prop_map(|(text, completed, rank)| {
            let mut row = Row::new();
            if let Some(text) = text {
                row.set("text", text);
            }
            if let Some(completed) = completed {
                row.set("completed", completed);
            }
            if let Some(rank) = rank {
                row.set("rank", rank);
            }
            row
        })
}

/// Strategy for generating a full row with an id.
pub fn row_strategy() -> impl Strategy<Value = Row> {
    (row_id_strategy(), patch_strategy()).prop_map(|(id, patch)| patch.with("id", id))
}

/// One queued step against a single table.
#[derive(Debug, Clone)]
pub enum QueuedOp {
    /// Insert a row (its id is in the row).
    Insert {
        /// The row
        row: Row,
    },
    /// Merge a patch over one row.
    Update {
        /// Row ID
        id: RowId,
        /// The patch
        patch: Row,
    },
    /// Flip `completed` on one row.
    Toggle {
        /// Row ID
        id: RowId,
    },
    /// Merge a patch over every row.
    UpdateAll {
        /// The patch
        patch: Row,
    },
    /// Delete one row.
    Delete {
        /// Row ID
        id: RowId,
    },
    /// Delete every row whose `completed` field equals the flag.
    DeleteWhereCompleted {
        /// The `completed` value to match
        completed: bool,
    },
}

impl QueuedOp {
    /// Queues this step on `db` against `table`.
    pub fn queue(&self, db: &mut Db<'_>, table: &str) {
        match self {
            QueuedOp::Insert { row } => {
                db.insert(table, row.clone());
            }
            QueuedOp::Update { id, patch } => {
                db.update(table, id, patch.clone());
            }
            QueuedOp::Toggle { id } => {
                db.update_with(table, id, toggled);
            }
            QueuedOp::UpdateAll { patch } => {
                db.update_all(table, patch.clone());
            }
            QueuedOp::Delete { id } => {
                db.delete(table, id);
            }
            QueuedOp::DeleteWhereCompleted { completed } => {
                let completed = *completed;
                db.delete_where(table, move |row, _| row.bool("completed") == Ok(completed));
            }
        }
    }
}

/// The patch a `Toggle` step merges over `row`.
pub fn toggled(row: &Row) -> Row {
    Row::new().with("completed", !row.bool("completed").unwrap_or(false))
}

/// Strategy for generating queued steps.
pub fn queued_op_strategy() -> impl Strategy<Value = QueuedOp> {
    prop_oneof![
        4 => row_strategy().prop_map(|row| QueuedOp::Insert { row }),
        2 => (row_id_strategy(), patch_strategy())
            .prop_map(|(id, patch)| QueuedOp::Update { id, patch }),
        1 => row_id_strategy().prop_map(|id| QueuedOp::Toggle { id }),
        1 => patch_strategy().prop_map(|patch| QueuedOp::UpdateAll { patch }),
        2 => row_id_strategy().prop_map(|id| QueuedOp::Delete { id }),
        1 => any::<bool>().prop_map(|completed| QueuedOp::DeleteWhereCompleted { completed }),
    ]
}

/// Strategy for generating a batch of steps.
pub fn op_sequence_strategy(min_ops: usize, max_ops: usize) -> impl Strategy<Value = Vec<QueuedOp>> {
    prop::collection::vec(queued_op_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn generated_rows_carry_an_id(row in row_strategy()) {
            prop_assert!(row.id().is_ok());
        }

        #[test]
        fn patches_never_carry_an_id(patch in patch_strategy()) {
            prop_assert!(!patch.contains("id"));
        }

        #[test]
        fn sequences_respect_bounds(ops in op_sequence_strategy(2, 10)) {
            prop_assert!(ops.len() >= 2 && ops.len() < 10);
        }
    }

    #[test]
    fn toggled_defaults_missing_flag_to_false() {
        assert_eq!(toggled(&Row::new()).bool("completed"), Ok(true));
        assert_eq!(
            toggled(&Row::new().with("completed", true)).bool("completed"),
            Ok(false)
        );
    }

    #[test]
    fn config_presets() {
        assert_eq!(PropTestConfig::default().cases, 256);
        assert_eq!(PropTestConfig::quick().to_proptest_config().cases, 32);
        assert_eq!(PropTestConfig::thorough().max_shrink_iters, 10000);
    }
}
