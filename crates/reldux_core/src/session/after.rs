//! Single-operation façade.

use crate::collection::Record;
use crate::error::CoreResult;
use crate::session::Db;
use crate::space::TableSpace;
use reldux_value::{Row, RowId};

/// Queues one operation and commits it immediately.
///
/// Obtained from [`Db::after`]. Each method is the matching `Db` method
/// followed by [`Db::run`], returning the new snapshot instead of the
/// session. This fits reducers that perform exactly one mutation per action.
///
/// ```
/// use reldux_core::{collection, schema};
/// use reldux_value::Row;
///
/// let app = schema([collection("Todo")]).unwrap();
/// let state = app
///     .db(app.initial())
///     .after()
///     .insert("Todo", Row::new().with("id", 0).with("completed", false))
///     .unwrap();
///
/// let state = app
///     .db(state)
///     .after()
///     .update("Todo", 0, Row::new().with("completed", true))
///     .unwrap();
///
/// let todo = app.db(state).get("Todo", 0).unwrap().unwrap();
/// assert_eq!(todo.bool("completed").unwrap(), true);
/// ```
#[derive(Debug)]
pub struct After<'d, 's> {
    db: &'d mut Db<'s>,
}

impl<'d, 's> After<'d, 's> {
    pub(crate) fn new(db: &'d mut Db<'s>) -> Self {
        Self { db }
    }

    /// Stores `row` at its own id, replacing any row already there.
    pub fn insert(self, table: impl Into<String>, row: Row) -> CoreResult<TableSpace> {
        self.db.insert(table, row).run()
    }

    /// Stores a typed record.
    pub fn insert_record<T: Record>(self, record: &T) -> CoreResult<TableSpace> {
        self.db.insert_record(record).run()
    }

    /// Merges `patch` over the row at `id`.
    pub fn update(
        self,
        table: impl Into<String>,
        id: impl Into<RowId>,
        patch: Row,
    ) -> CoreResult<TableSpace> {
        self.db.update(table, id, patch).run()
    }

    /// Merges the patch computed by `f` over the row at `id`.
    pub fn update_with<F>(
        self,
        table: impl Into<String>,
        id: impl Into<RowId>,
        f: F,
    ) -> CoreResult<TableSpace>
    where
        F: Fn(&Row) -> Row + 'static,
    {
        self.db.update_with(table, id, f).run()
    }

    /// Merges `patch` over every row.
    pub fn update_all(self, table: impl Into<String>, patch: Row) -> CoreResult<TableSpace> {
        self.db.update_all(table, patch).run()
    }

    /// Merges the patch computed by `f` over every row.
    pub fn update_all_with<F>(self, table: impl Into<String>, f: F) -> CoreResult<TableSpace>
    where
        F: Fn(&Row) -> Row + 'static,
    {
        self.db.update_all_with(table, f).run()
    }

    /// Removes the row at `id`, if present.
    pub fn delete(
        self,
        table: impl Into<String>,
        id: impl Into<RowId>,
    ) -> CoreResult<TableSpace> {
        self.db.delete(table, id).run()
    }

    /// Removes every row for which `predicate` returns true.
    pub fn delete_where<F>(
        self,
        table: impl Into<String>,
        predicate: F,
    ) -> CoreResult<TableSpace>
    where
        F: Fn(&Row, &RowId) -> bool + 'static,
    {
        self.db.delete_where(table, predicate).run()
    }
}

#[cfg(test)]
mod tests {
    use crate::collection::collection;
    use crate::error::CoreError;
    use crate::schema::schema;
    use reldux_value::{Row, RowId};

    #[test]
    fn each_call_commits_one_step() {
        let app = schema([collection("Todo")]).unwrap();
        let mut db = app.db(app.initial());

        let one = db
            .after()
            .insert("Todo", Row::new().with("id", 0).with("n", 1))
            .unwrap();
        assert_eq!(db.state(), &one);

        let two = db
            .after()
            .update_with("Todo", 0, |row| {
                Row::new().with("n", row.integer("n").unwrap_or(0) + 1)
            })
            .unwrap();
        assert_eq!(
            two.row("Todo", &RowId::Int(0)).unwrap().unwrap().integer("n"),
            Ok(2)
        );

        let three = db.after().delete("Todo", 0).unwrap();
        assert!(three.table("Todo").unwrap().is_empty());
        assert_eq!(db.pending(), 0);
    }

    #[test]
    fn update_all_and_delete_where() {
        let app = schema([collection("Todo")]).unwrap();
        let mut db = app.db(app.initial());
        db.insert("Todo", Row::new().with("id", 0).with("done", false))
            .insert("Todo", Row::new().with("id", 1).with("done", false));
        db.run().unwrap();

        let all_done = db
            .after()
            .update_all("Todo", Row::new().with("done", true))
            .unwrap();
        assert!(all_done
            .table("Todo")
            .unwrap()
            .rows()
            .all(|row| row.bool("done") == Ok(true)));

        let cleared = db
            .after()
            .delete_where("Todo", |row, _| row.bool("done").unwrap_or(false))
            .unwrap();
        assert!(cleared.table("Todo").unwrap().is_empty());
    }

    #[test]
    fn failure_is_returned_not_raised() {
        let app = schema([collection("Todo")]).unwrap();
        let mut db = app.db(app.initial());

        let result = db.after().update("Todo", 0, Row::new().with("done", true));
        assert_eq!(
            result.unwrap_err(),
            CoreError::no_such_row("Todo", RowId::Int(0))
        );
    }
}
