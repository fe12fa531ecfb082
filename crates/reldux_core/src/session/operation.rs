//! Queued operations.

use crate::config::MissingRowPolicy;
use crate::error::{CoreError, CoreResult};
use crate::space::{Table, TableSpace};
use reldux_value::{Row, RowId, ID_FIELD};
use std::fmt;

/// Produces a patch from the current row.
pub(crate) type Updater = Box<dyn Fn(&Row) -> CoreResult<Row>>;

/// Decides whether a row is removed.
pub(crate) type Predicate = Box<dyn Fn(&Row, &RowId) -> bool>;

/// How an update derives the patch it merges over a row.
pub(crate) enum Change {
    /// A fixed patch.
    Patch(Row),
    /// A patch computed from the current row.
    Updater(Updater),
}

impl Change {
    /// Shallow-merges the patch over `row`.
    fn apply(&self, row: &Row) -> CoreResult<Row> {
        match self {
            Change::Patch(patch) => Ok(row.merge(patch)),
            Change::Updater(f) => Ok(row.merge(&f(row)?)),
        }
    }
}

impl fmt::Debug for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Patch(patch) => f.debug_tuple("Patch").field(patch).finish(),
            Change::Updater(_) => f.write_str("Updater(..)"),
        }
    }
}

/// One staged mutation: a function from one table-space to the next.
pub(crate) enum Operation {
    /// Merge a row over the row at its own id, or store it if absent.
    Insert { table: String, row: Row },
    /// Merge a patch over one row.
    Update {
        table: String,
        id: RowId,
        change: Change,
    },
    /// Merge a patch over every row.
    UpdateAll { table: String, change: Change },
    /// Remove one row, if present.
    Delete { table: String, id: RowId },
    /// Remove every row matching a predicate.
    DeleteWhere { table: String, predicate: Predicate },
}

impl Operation {
    /// Returns the table this operation touches.
    pub(crate) fn table(&self) -> &str {
        match self {
            Operation::Insert { table, .. }
            | Operation::Update { table, .. }
            | Operation::UpdateAll { table, .. }
            | Operation::Delete { table, .. }
            | Operation::DeleteWhere { table, .. } => table,
        }
    }

    /// Returns a short name for logging.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Operation::Insert { .. } => "insert",
            Operation::Update { .. } => "update",
            Operation::UpdateAll { .. } => "update_all",
            Operation::Delete { .. } => "delete",
            Operation::DeleteWhere { .. } => "delete_where",
        }
    }

    /// Applies this operation to `space`, returning the next snapshot.
    ///
    /// `space` is consumed; the caller's own snapshot is never modified
    /// because tables are cloned before they are changed.
    pub(crate) fn apply(
        &self,
        mut space: TableSpace,
        missing_row: MissingRowPolicy,
    ) -> CoreResult<TableSpace> {
        let name = self.table();
        let mut table: Table = space.table(name)?.clone();

        match self {
            Operation::Insert { row, .. } => {
                let id = row.id().map_err(|source| CoreError::MissingRowId {
                    table: name.to_string(),
                    source,
                })?;
                let stored = match table.get(&id) {
                    Some(existing) => existing.merge(row),
                    None => row.clone(),
                };
                table.insert(id, stored);
            }
            Operation::Update { id, change, .. } => match table.get(id) {
                Some(existing) => {
                    let updated = change.apply(existing)?;
                    table.insert(id.clone(), updated);
                }
                None => match missing_row {
                    MissingRowPolicy::Fail => {
                        return Err(CoreError::no_such_row(name, id.clone()));
                    }
                    MissingRowPolicy::Ignore => return Ok(space),
                    MissingRowPolicy::Upsert => {
                        let seed = Row::new().with(ID_FIELD, id.clone());
                        let created = change.apply(&seed)?;
                        table.insert(id.clone(), created);
                    }
                },
            },
            Operation::UpdateAll { change, .. } => {
                let mut updated = Vec::with_capacity(table.len());
                for (id, row) in table.iter() {
                    updated.push((id.clone(), change.apply(row)?));
                }
                for (id, row) in updated {
                    table.insert(id, row);
                }
            }
            Operation::Delete { id, .. } => {
                if table.remove(id).is_none() {
                    return Ok(space);
                }
            }
            Operation::DeleteWhere { predicate, .. } => {
                let doomed: Vec<RowId> = table
                    .iter()
                    .filter(|(id, row)| predicate(*row, *id))
                    .map(|(id, _)| id.clone())
                    .collect();
                for id in &doomed {
                    table.remove(id);
                }
            }
        }

        space.insert_table(name, table);
        Ok(space)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { table, row } => f
                .debug_struct("Insert")
                .field("table", table)
                .field("row", row)
                .finish(),
            Operation::Update { table, id, change } => f
                .debug_struct("Update")
                .field("table", table)
                .field("id", id)
                .field("change", change)
                .finish(),
            Operation::UpdateAll { table, change } => f
                .debug_struct("UpdateAll")
                .field("table", table)
                .field("change", change)
                .finish(),
            Operation::Delete { table, id } => f
                .debug_struct("Delete")
                .field("table", table)
                .field("id", id)
                .finish(),
            Operation::DeleteWhere { table, .. } => f
                .debug_struct("DeleteWhere")
                .field("table", table)
                .finish_non_exhaustive(),
        }
    }
}
