//! Typed record access on a session.

use crate::collection::Record;
use crate::error::CoreResult;
use crate::session::operation::{Change, Operation};
use crate::session::Db;
use reldux_value::RowId;

impl Db<'_> {
    /// Queues storing a typed record in its collection.
    pub fn insert_record<T: Record>(&mut self, record: &T) -> &mut Self {
        self.queue(Operation::Insert {
            table: T::TABLE.to_string(),
            row: record.to_row(),
        })
    }

    /// Queues replacing the record at `id` with the one computed by `f`.
    ///
    /// The new record is merged over the stored row, so fields the record
    /// type does not know about are kept.
    pub fn update_record<T, F>(&mut self, id: impl Into<RowId>, f: F) -> &mut Self
    where
        T: Record + 'static,
        F: Fn(&T) -> T + 'static,
    {
        self.queue(Operation::Update {
            table: T::TABLE.to_string(),
            id: id.into(),
            change: Change::Updater(Box::new(move |row| {
                let current = T::from_row(row)?;
                Ok(f(&current).to_row())
            })),
        })
    }

    /// Returns every committed record of a collection, in id order.
    pub fn records<T: Record>(&self) -> CoreResult<Vec<T>> {
        self.state()
            .table(T::TABLE)?
            .rows()
            .map(T::from_row)
            .collect()
    }

    /// Returns one committed record.
    pub fn record<T: Record>(&self, id: impl Into<RowId>) -> CoreResult<Option<T>> {
        self.state()
            .row(T::TABLE, &id.into())?
            .map(T::from_row)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::collection::{Collection, Record};
    use crate::error::{CoreError, CoreResult};
    use crate::schema::Schema;
    use reldux_value::{Row, RowId, ValueError};

    #[derive(Debug, Clone, PartialEq)]
    struct Todo {
        id: i64,
        text: String,
        completed: bool,
    }

    impl Record for Todo {
        const TABLE: &'static str = "Todo";

        fn row_id(&self) -> RowId {
            RowId::Int(self.id)
        }

        fn to_row(&self) -> Row {
            Row::new()
                .with("id", self.id)
                .with("text", self.text.as_str())
                .with("completed", self.completed)
        }

        fn from_row(row: &Row) -> CoreResult<Self> {
            Ok(Todo {
                id: row.integer("id")?,
                text: row.text("text")?.to_string(),
                completed: row.bool("completed")?,
            })
        }
    }

    fn todo(id: i64, text: &str) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed: false,
        }
    }

    fn app() -> Schema {
        Schema::new([Collection::of::<Todo>()]).unwrap()
    }

    #[test]
    fn insert_and_read_records() {
        let app = app();
        let mut db = app.db(app.initial());
        db.insert_record(&todo(1, "b")).insert_record(&todo(0, "a"));
        db.run().unwrap();

        assert_eq!(db.records::<Todo>().unwrap(), vec![todo(0, "a"), todo(1, "b")]);
        assert_eq!(db.record::<Todo>(1).unwrap(), Some(todo(1, "b")));
        assert_eq!(db.record::<Todo>(7).unwrap(), None);
    }

    #[test]
    fn update_record_keeps_unknown_fields() {
        let app = app();
        let mut db = app.db(app.initial());
        db.insert("Todo", todo(0, "a").to_row().with("color", "red"));
        db.run().unwrap();

        let state = db
            .update_record(0, |t: &Todo| Todo {
                completed: true,
                ..t.clone()
            })
            .run()
            .unwrap();

        let row = state.row("Todo", &RowId::Int(0)).unwrap().unwrap();
        assert_eq!(row.bool("completed"), Ok(true));
        assert_eq!(row.text("color"), Ok("red"));
    }

    #[test]
    fn malformed_row_surfaces_value_error() {
        let app = app();
        let mut db = app.db(app.initial());
        db.insert("Todo", Row::new().with("id", 0));
        db.run().unwrap();

        assert_eq!(
            db.records::<Todo>().unwrap_err(),
            CoreError::Value(ValueError::missing_field("text"))
        );
    }

    #[test]
    fn after_insert_record() {
        let app = app();
        let mut db = app.db(app.initial());
        let state = db.after().insert_record(&todo(3, "c")).unwrap();
        assert_eq!(state.table("Todo").unwrap().len(), 1);
        assert_eq!(todo(3, "c").row_id(), RowId::Int(3));
    }
}
