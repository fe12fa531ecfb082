//! The `Db` session: a queue of operations over one snapshot.

use crate::error::CoreResult;
use crate::relation::{RelationChain, RelationQuery};
use crate::schema::Schema;
use crate::session::operation::{Change, Operation};
use crate::session::After;
use crate::space::TableSpace;
use reldux_value::{Row, RowId};
use tracing::{debug, trace, warn};

/// A transaction session over one table-space snapshot.
///
/// Mutating methods only queue work and return `&mut Self`, so several
/// steps can be chained before a single [`run`](Db::run). Reads (`all`,
/// `get`, relation queries) always see the committed snapshot, never the
/// queue.
///
/// # Example
///
/// ```
/// use reldux_core::{collection, schema};
/// use reldux_value::{Row, RowId};
///
/// let app = schema([collection("Todo")]).unwrap();
/// let mut db = app.db(app.initial());
///
/// db.insert("Todo", Row::new().with("id", 0).with("completed", false))
///     .insert("Todo", Row::new().with("id", 1).with("completed", false))
///     .update("Todo", 1, Row::new().with("completed", true))
///     .delete_where("Todo", |row, _| !row.bool("completed").unwrap_or(false));
///
/// // Nothing is visible until the queue runs.
/// assert!(db.all("Todo").unwrap().is_empty());
///
/// let state = db.run().unwrap();
/// let ids: Vec<_> = state.table("Todo").unwrap().ids().cloned().collect();
/// assert_eq!(ids, vec![RowId::Int(1)]);
/// ```
pub struct Db<'s> {
    schema: &'s Schema,
    state: TableSpace,
    operations: Vec<Operation>,
}

impl<'s> Db<'s> {
    pub(crate) fn new(schema: &'s Schema, state: TableSpace) -> Self {
        Self {
            schema,
            state,
            operations: Vec::new(),
        }
    }

    /// Returns the schema this session was opened from.
    #[must_use]
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Returns the committed snapshot.
    #[must_use]
    pub fn state(&self) -> &TableSpace {
        &self.state
    }

    /// Consumes the session, returning the committed snapshot.
    ///
    /// Queued operations that were never run are discarded.
    #[must_use]
    pub fn into_state(self) -> TableSpace {
        self.state
    }

    /// Returns the number of queued operations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.operations.len()
    }

    /// Returns a façade whose methods queue one operation and run at once.
    pub fn after(&mut self) -> After<'_, 's> {
        After::new(self)
    }

    /// Queues storing `row` at the id in its `id` field.
    ///
    /// An existing row at that id has `row` merged over it, so inserting a
    /// complete row replaces it. A row without a usable id fails the batch
    /// with `MissingRowId`.
    pub fn insert(&mut self, table: impl Into<String>, row: Row) -> &mut Self {
        self.queue(Operation::Insert {
            table: table.into(),
            row,
        })
    }

    /// Queues merging `patch` over the row at `id`.
    ///
    /// A missing row is handled according to `Config::missing_row`.
    pub fn update(
        &mut self,
        table: impl Into<String>,
        id: impl Into<RowId>,
        patch: Row,
    ) -> &mut Self {
        self.queue(Operation::Update {
            table: table.into(),
            id: id.into(),
            change: Change::Patch(patch),
        })
    }

    /// Queues merging the patch computed by `f` over the row at `id`.
    ///
    /// `f` runs during [`run`](Db::run) and sees the row as left by earlier
    /// steps of the same batch.
    pub fn update_with<F>(
        &mut self,
        table: impl Into<String>,
        id: impl Into<RowId>,
        f: F,
    ) -> &mut Self
    where
        F: Fn(&Row) -> Row + 'static,
    {
        self.queue(Operation::Update {
            table: table.into(),
            id: id.into(),
            change: Change::Updater(Box::new(move |row| Ok(f(row)))),
        })
    }

    /// Queues merging `patch` over every row of the table.
    pub fn update_all(&mut self, table: impl Into<String>, patch: Row) -> &mut Self {
        self.queue(Operation::UpdateAll {
            table: table.into(),
            change: Change::Patch(patch),
        })
    }

    /// Queues merging the patch computed by `f` over every row of the table.
    ///
    /// The rows visited are those present when this step executes.
    pub fn update_all_with<F>(&mut self, table: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&Row) -> Row + 'static,
    {
        self.queue(Operation::UpdateAll {
            table: table.into(),
            change: Change::Updater(Box::new(move |row| Ok(f(row)))),
        })
    }

    /// Queues removing the row at `id`. Removing an absent row is a no-op.
    pub fn delete(&mut self, table: impl Into<String>, id: impl Into<RowId>) -> &mut Self {
        self.queue(Operation::Delete {
            table: table.into(),
            id: id.into(),
        })
    }

    /// Queues removing every row for which `predicate` returns true.
    pub fn delete_where<F>(&mut self, table: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&Row, &RowId) -> bool + 'static,
    {
        self.queue(Operation::DeleteWhere {
            table: table.into(),
            predicate: Box::new(predicate),
        })
    }

    /// Returns every committed row of a table, in id order.
    pub fn all(&self, table: &str) -> CoreResult<Vec<Row>> {
        Ok(self.state.table(table)?.rows().cloned().collect())
    }

    /// Returns one committed row.
    pub fn get(&self, table: &str, id: impl Into<RowId>) -> CoreResult<Option<Row>> {
        Ok(self.state.row(table, &id.into())?.cloned())
    }

    /// Starts a relation traversal rooted at `owner`, a row of `table`.
    #[must_use]
    pub fn for_row<'a>(&'a self, table: &'a str, owner: &'a Row) -> RelationQuery<'a> {
        RelationQuery::new(self.schema, &self.state, table, owner)
    }

    /// Returns the first row of `target` related to `owner`.
    ///
    /// Belongs-to relations are consulted before has-many ones.
    pub fn get_for(&self, table: &str, owner: &Row, target: &str) -> CoreResult<Option<Row>> {
        self.for_row(table, owner).first(target)
    }

    /// Starts establishing a relation from `record`, a row of `table`.
    #[must_use]
    pub fn relate<'a>(&'a self, table: &'a str, record: &'a Row) -> RelationChain<'a> {
        RelationChain::new(self.schema, table, record)
    }

    /// Applies the queued operations in order and commits the result.
    ///
    /// Each operation receives the snapshot produced by the previous one.
    /// On success the session's snapshot is replaced and returned. On
    /// failure the session's snapshot is left as it was. The queue is
    /// drained either way, so calling `run()` again without queueing more
    /// work returns the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step (`NoSuchTable`, `NoSuchRow`,
    /// `MissingRowId`, or a `Value` error from an updater); no later step
    /// runs.
    pub fn run(&mut self) -> CoreResult<TableSpace> {
        let operations = std::mem::take(&mut self.operations);
        let config = self.schema.config();

        if config.validate_snapshot {
            self.schema.validate(&self.state)?;
        }

        debug!(operations = operations.len(), "running queued operations");

        let mut state = self.state.clone();
        for (index, operation) in operations.iter().enumerate() {
            trace!(
                index,
                kind = operation.kind(),
                table = operation.table(),
                "applying operation"
            );
            state = operation
                .apply(state, config.missing_row)
                .inspect_err(|error| {
                    warn!(
                        index,
                        kind = operation.kind(),
                        table = operation.table(),
                        %error,
                        "batch aborted"
                    );
                })?;
        }

        self.state = state.clone();
        Ok(state)
    }

    pub(crate) fn queue(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }
}

impl std::fmt::Debug for Db<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("tables", &self.state.len())
            .field("pending", &self.operations)
            .finish_non_exhaustive()
    }
}
