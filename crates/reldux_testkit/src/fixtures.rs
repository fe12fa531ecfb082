//! Fixture schemas and rows.
//!
//! Two small applications cover most tests: a todo list with a single
//! collection, and a chat where users send messages to each other.

use reldux_core::{collection, schema, Schema, TableSpace};
use reldux_value::Row;

/// Name of the todo collection.
pub const TODO: &str = "Todo";
/// Name of the user collection.
pub const USER: &str = "User";
/// Name of the message collection.
pub const MESSAGE: &str = "Message";

/// A schema with one `Todo` collection.
pub fn todo_schema() -> Schema {
    schema([collection(TODO)]).expect("todo schema is valid")
}

/// A schema with `User` and `Message` related both ways.
///
/// Users have many `sent` messages (keyed by `from`) and many `received`
/// messages (keyed by `to`); each message belongs to its `from` and `to`
/// users.
pub fn chat_schema() -> Schema {
    schema([
        collection(USER)
            .has_many("sent", MESSAGE, "from")
            .has_many("received", MESSAGE, "to"),
        collection(MESSAGE)
            .belongs_to("from", USER)
            .belongs_to("to", USER),
    ])
    .expect("chat schema is valid")
}

/// Builds a todo row.
pub fn todo_row(id: i64, text: &str, completed: bool) -> Row {
    Row::new()
        .with("id", id)
        .with("text", text)
        .with("completed", completed)
}

/// Builds a user row.
pub fn user_row(id: i64, name: &str) -> Row {
    Row::new().with("id", id).with("name", name)
}

/// Builds a message row from one user to another.
pub fn message_row(id: i64, from: i64, to: i64, body: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("from", from)
        .with("to", to)
        .with("body", body)
}

/// Loads rows from a JSON array, as a reducer would receive them.
pub fn rows_from_json(json: &str) -> Vec<Row> {
    serde_json::from_str(json).expect("fixture JSON is a row array")
}

/// Prebuilt states.
pub mod scenarios {
    use super::*;

    /// A todo state with `count` rows; every third one is completed.
    pub fn populated_todos(schema: &Schema, count: usize) -> TableSpace {
        let mut db = schema.db(schema.initial());
        for i in 0..count {
            let id = i as i64;
            db.insert(TODO, todo_row(id, &format!("todo {i}"), i % 3 == 2));
        }
        db.run().expect("failed to populate todos")
    }

    /// A chat state where each of `users` users has sent one message to
    /// the next user, wrapping around.
    pub fn chat_ring(schema: &Schema, users: usize) -> TableSpace {
        let mut db = schema.db(schema.initial());
        let users = users as i64;
        for id in 0..users {
            db.insert(USER, user_row(id, &format!("user {id}")));
        }
        for id in 0..users {
            let to = (id + 1) % users;
            db.insert(MESSAGE, message_row(100 + id, id, to, "hello"));
        }
        db.run().expect("failed to populate chat")
    }
}
