//! Relation declaration.

use crate::error::CoreResult;
use crate::space::Table;
use reldux_value::{Row, RowId, Value};
use std::fmt;

/// Direction of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Rows of the target carry this row's id in the key field.
    HasMany,
    /// This row carries the target row's id in the key field.
    BelongsTo,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::HasMany => write!(f, "has_many"),
            RelationKind::BelongsTo => write!(f, "belongs_to"),
        }
    }
}

/// A named relation from one collection to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    name: String,
    kind: RelationKind,
    target: String,
    key: String,
}

impl Relation {
    pub(crate) fn new(
        name: impl Into<String>,
        kind: RelationKind,
        target: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            key: key.into(),
        }
    }

    /// Returns the relation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the relation direction.
    #[must_use]
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Returns the related collection's name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the foreign-key field.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Collects the rows of `target` related to `owner` through this relation,
    /// paired with their ids.
    pub(crate) fn resolve(&self, owner: &Row, target: &Table) -> CoreResult<Vec<(RowId, Row)>> {
        match self.kind {
            RelationKind::HasMany => {
                let owner_id = Value::from(owner.id()?);
                Ok(target
                    .iter()
                    .filter(|(_, row)| row.get(&self.key) == Some(&owner_id))
                    .map(|(id, row)| (id.clone(), row.clone()))
                    .collect())
            }
            RelationKind::BelongsTo => match owner.get(&self.key) {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(value) => {
                    let id = RowId::try_from(value)?;
                    Ok(target
                        .get(&id)
                        .map(|row| (id.clone(), row.clone()))
                        .into_iter()
                        .collect())
                }
            },
        }
    }
}
