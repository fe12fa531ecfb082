//! Establishing relations between two rows.

use crate::error::{CoreError, CoreResult};
use crate::schema::Schema;
use reldux_value::{Row, RowId};

/// A link between two row ids through a declared relation.
///
/// The record is a value only. It says the two collections are related and
/// names the ids, not that either row is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRecord {
    /// Name of the relation that links the rows.
    pub relation: String,
    /// Id of the row the chain started from.
    pub id_a: RowId,
    /// Id of the row it was related to.
    pub id_b: RowId,
}

/// The first half of `relate(..).to(..)`.
#[derive(Debug, Clone, Copy)]
pub struct RelationChain<'a> {
    schema: &'a Schema,
    table: &'a str,
    record: &'a Row,
}

impl<'a> RelationChain<'a> {
    pub(crate) fn new(schema: &'a Schema, table: &'a str, record: &'a Row) -> Self {
        Self {
            schema,
            table,
            record,
        }
    }

    /// Relates the starting row to `other`, a row of `other_table`.
    ///
    /// Only the schema is consulted. Neither row is looked up in the
    /// table-space, so rows that were never inserted (or were deleted) still
    /// link; use [`Db::get`](crate::Db::get) first when presence matters.
    ///
    /// # Errors
    ///
    /// `NoSuchRelation` when neither collection declares a relation to the
    /// other; a `Value` error when either row has no usable id.
    pub fn to(&self, other_table: &str, other: &Row) -> CoreResult<RelationRecord> {
        let relation = self
            .schema
            .relation_between(self.table, other_table)
            .ok_or_else(|| CoreError::no_such_relation(self.table, other_table))?;

        Ok(RelationRecord {
            relation: relation.name().to_string(),
            id_a: self.record.id()?,
            id_b: other.id()?,
        })
    }
}
