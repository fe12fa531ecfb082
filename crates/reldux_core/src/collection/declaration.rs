//! Collection declaration.

use crate::collection::Record;
use crate::relation::{Relation, RelationKind};

/// Declaration of one record kind: its table name and its relations.
///
/// Declarations are built once, handed to `Schema::new`, and immutable
/// afterwards.
///
/// # Example
///
/// ```
/// use reldux_core::Collection;
///
/// let users = Collection::new("User")
///     .has_many("sent", "Message", "from")
///     .has_many("received", "Message", "to");
///
/// let messages = Collection::new("Message")
///     .belongs_to("from", "User")
///     .belongs_to("to", "User");
///
/// assert_eq!(users.relations().len(), 2);
/// assert_eq!(messages.relation("to").unwrap().key(), "to");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: String,
    relations: Vec<Relation>,
}

impl Collection {
    /// Declares a collection with the given table name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: Vec::new(),
        }
    }

    /// Declares the collection for a record type.
    #[must_use]
    pub fn of<T: Record>() -> Self {
        Self::new(T::TABLE)
    }

    /// Declares that rows of `target` point at rows of this collection
    /// through their `key` field.
    #[must_use]
    pub fn has_many(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.relations.push(Relation::new(
            name,
            RelationKind::HasMany,
            target,
            key,
        ));
        self
    }

    /// Declares that rows of this collection point at a row of `target`
    /// through the field called `name`.
    #[must_use]
    pub fn belongs_to(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        let name = name.into();
        self.relations.push(Relation::new(
            name.clone(),
            RelationKind::BelongsTo,
            target,
            name,
        ));
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared relations.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Finds a relation by name.
    #[must_use]
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name() == name)
    }

    /// Returns the relations that point at `target`, in declaration order.
    #[must_use]
    pub fn relations_to(&self, target: &str) -> Vec<&Relation> {
        self.relations
            .iter()
            .filter(|r| r.target() == target)
            .collect()
    }
}

/// Declares a collection with the given table name.
#[must_use]
pub fn collection(name: impl Into<String>) -> Collection {
    Collection::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn belongs_to_uses_relation_name_as_key() {
        let messages = collection("Message").belongs_to("from", "User");
        let from = messages.relation("from").unwrap();

        assert_eq!(from.kind(), RelationKind::BelongsTo);
        assert_eq!(from.target(), "User");
        assert_eq!(from.key(), "from");
    }

    #[test]
    fn relations_to_filters_by_target() {
        let users = collection("User")
            .has_many("sent", "Message", "from")
            .has_many("groups", "Group", "owner");

        let names: Vec<_> = users
            .relations_to("Message")
            .into_iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(names, vec!["sent"]);
        assert!(users.relation("missing").is_none());
    }
}
