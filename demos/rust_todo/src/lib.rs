//! TodoMVC reducer over a Reldux table-space.
//!
//! State is a [`TableSpace`] with two tables: `Todo` holds the todos and
//! `IdSequence` holds the last id handed out per table. A new id is one past
//! the larger of the highest existing id and the stored mark, and the mark
//! is written in the same batch as the insert, so deleting the newest todo
//! never makes its id available again. Once `i64::MAX` has been used the
//! reducer reports [`TodoError::IdsExhausted`] instead of wrapping.
//!
//! ```
//! use rust_todo::{Action, TodoApp};
//!
//! let app = TodoApp::new().unwrap();
//! let state = app.initial().unwrap();
//! let state = app
//!     .reduce(state, &Action::AddTodo { text: "Run the tests".into() })
//!     .unwrap();
//!
//! let todos = app.todos(&state).unwrap();
//! assert_eq!(todos.len(), 2);
//! assert_eq!(todos[1].id, 1);
//! ```

#![warn(missing_docs)]

use reldux_core::{
    collection, Collection, Config, CoreError, CoreResult, MissingRowPolicy, Record, Schema,
    TableSpace,
};
use reldux_value::{Row, RowId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Result type for the todo reducer.
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors the todo reducer returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// The store rejected a batch.
    #[error(transparent)]
    Store(#[from] CoreError),

    /// Every id up to `i64::MAX` has been handed out.
    #[error("no todo id left after {last}")]
    IdsExhausted {
        /// The highest id already used.
        last: i64,
    },
}

/// Table holding per-table id high-water marks.
pub const ID_SEQUENCE: &str = "IdSequence";

/// A todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identity, assigned by the reducer.
    pub id: i64,
    /// What needs doing.
    pub text: String,
    /// Whether it is done.
    pub completed: bool,
}

impl Todo {
    /// Creates a todo.
    pub fn new(id: i64, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }
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
        Ok(Self {
            id: row.integer("id")?,
            text: row.text("text")?.to_string(),
            completed: row.bool("completed")?,
        })
    }
}

/// Actions the reducer understands.
///
/// Serialized the Redux way: `{"type": "ADD_TODO", "text": "..."}`.
/// Unrecognized types deserialize to [`Action::Unknown`] and leave the state
/// as it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Adds an incomplete todo with the next id.
    AddTodo {
        /// Text of the new todo.
        text: String,
    },
    /// Removes a todo.
    DeleteTodo {
        /// Todo to remove.
        id: i64,
    },
    /// Replaces a todo's text.
    EditTodo {
        /// Todo to edit.
        id: i64,
        /// New text.
        text: String,
    },
    /// Flips a todo's completed flag.
    CompleteTodo {
        /// Todo to toggle.
        id: i64,
    },
    /// Marks every todo completed, or none if all already are.
    CompleteAll,
    /// Removes every completed todo.
    ClearCompleted,
    /// Any other action.
    #[serde(other)]
    Unknown,
}

/// The todo application: its schema and reducer.
#[derive(Debug, Clone)]
pub struct TodoApp {
    schema: Schema,
}

impl TodoApp {
    /// Declares the todo schema.
    ///
    /// Actions naming a todo that no longer exists are ignored, as a UI
    /// may dispatch them after the row is gone.
    pub fn new() -> TodoResult<Self> {
        let schema = Schema::with_config(
            [Collection::of::<Todo>(), collection(ID_SEQUENCE)],
            Config::new().missing_row(MissingRowPolicy::Ignore),
        )?;
        Ok(Self { schema })
    }

    /// Returns the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The state a fresh app starts with: one todo, "Use Redux".
    pub fn initial(&self) -> TodoResult<TableSpace> {
        self.from_todos(&[Todo::new(0, "Use Redux", false)])
    }

    /// Builds a state holding exactly `todos`.
    ///
    /// Any id is accepted, including `i64::MAX`; running out of ids only
    /// matters to the next `AddTodo`.
    pub fn from_todos(&self, todos: &[Todo]) -> TodoResult<TableSpace> {
        let mut db = self.schema.db(self.schema.initial());
        for todo in todos {
            db.insert_record(todo);
        }
        if let Some(max) = todos.iter().map(|t| t.id).max() {
            db.insert(ID_SEQUENCE, sequence_row(max));
        }
        Ok(db.run()?)
    }

    /// Applies one action, returning the next state.
    ///
    /// # Errors
    ///
    /// `IdsExhausted` when `AddTodo` finds no id above those already used;
    /// `Store` when a stored row cannot be read back as a todo.
    pub fn reduce(&self, state: TableSpace, action: &Action) -> TodoResult<TableSpace> {
        debug!(?action, "reducing");
        let mut db = self.schema.db(state);

        let next = match action {
            Action::AddTodo { text } => {
                let id = next_id(&db.records::<Todo>()?, db.get(ID_SEQUENCE, Todo::TABLE)?)?;
                db.insert_record(&Todo::new(id, text.as_str(), false))
                    .insert(ID_SEQUENCE, sequence_row(id))
                    .run()
            }
            Action::DeleteTodo { id } => db.after().delete(Todo::TABLE, *id),
            Action::EditTodo { id, text } => db.after().update(
                Todo::TABLE,
                *id,
                Row::new().with("text", text.as_str()),
            ),
            Action::CompleteTodo { id } => db.after().update_with(Todo::TABLE, *id, |todo| {
                Row::new().with("completed", !todo.bool("completed").unwrap_or(false))
            }),
            Action::CompleteAll => {
                let all_marked = db.records::<Todo>()?.iter().all(|t| t.completed);
                db.after()
                    .update_all(Todo::TABLE, Row::new().with("completed", !all_marked))
            }
            Action::ClearCompleted => db.after().delete_where(Todo::TABLE, |todo, _| {
                todo.bool("completed").unwrap_or(false)
            }),
            Action::Unknown => Ok(db.into_state()),
        };
        Ok(next?)
    }

    /// Applies actions in order.
    pub fn reduce_all<'a>(
        &self,
        state: TableSpace,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> TodoResult<TableSpace> {
        actions
            .into_iter()
            .try_fold(state, |state, action| self.reduce(state, action))
    }

    /// Returns the todos of a state, in id order.
    pub fn todos(&self, state: &TableSpace) -> TodoResult<Vec<Todo>> {
        Ok(self.schema.db(state.clone()).records::<Todo>()?)
    }
}

fn sequence_row(last: i64) -> Row {
    Row::new().with("id", Todo::TABLE).with("last", last)
}

/// One past the highest id in use or recorded as used; 0 for a fresh table.
fn next_id(todos: &[Todo], sequence: Option<Row>) -> TodoResult<i64> {
    let in_use = todos.iter().map(|t| t.id).max();
    let recorded = sequence.and_then(|row| row.integer("last").ok());
    match in_use.max(recorded) {
        Some(last) => last
            .checked_add(1)
            .ok_or(TodoError::IdsExhausted { last }),
        None => Ok(0),
    }
}
