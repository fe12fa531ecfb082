//! Record trait for typed collections.

use crate::error::CoreResult;
use reldux_value::{Row, RowId};

/// Trait for application types stored as rows.
///
/// Implementors must provide:
/// - `TABLE`: the collection's table name, unique within a schema
/// - `row_id()`: the stable identity of the record
/// - `to_row()`: the record as a row, including its `id` field
/// - `from_row()`: the record read back from a row
///
/// # Example
///
/// ```
/// use reldux_core::{CoreResult, Record};
/// use reldux_value::{Row, RowId};
///
/// struct Todo {
///     id: i64,
///     text: String,
///     completed: bool,
/// }
///
/// impl Record for Todo {
///     const TABLE: &'static str = "Todo";
///
///     fn row_id(&self) -> RowId {
///         RowId::Int(self.id)
///     }
///
///     fn to_row(&self) -> Row {
///         Row::new()
///             .with("id", self.id)
///             .with("text", self.text.as_str())
///             .with("completed", self.completed)
///     }
///
///     fn from_row(row: &Row) -> CoreResult<Self> {
///         Ok(Todo {
///             id: row.integer("id")?,
///             text: row.text("text")?.to_string(),
///             completed: row.bool("completed")?,
///         })
///     }
/// }
/// ```
pub trait Record: Sized {
    /// Table name of the collection holding this record kind.
    const TABLE: &'static str;

    /// Returns the record's identity.
    ///
    /// This must match the `id` field written by `to_row`.
    fn row_id(&self) -> RowId;

    /// Converts the record to a row.
    fn to_row(&self) -> Row;

    /// Reads a record from a row.
    fn from_row(row: &Row) -> CoreResult<Self>;
}
