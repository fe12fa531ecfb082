//! Relation traversal.

use crate::error::{CoreError, CoreResult};
use crate::relation::{Relation, RelationKind};
use crate::schema::Schema;
use crate::space::TableSpace;
use reldux_value::{Row, RowId};
use std::collections::BTreeMap;

/// A traversal rooted at one owner row.
///
/// Obtained from [`Db::for_row`](crate::Db::for_row). Reads the session's
/// committed snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RelationQuery<'a> {
    schema: &'a Schema,
    state: &'a TableSpace,
    table: &'a str,
    owner: &'a Row,
}

impl<'a> RelationQuery<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        state: &'a TableSpace,
        table: &'a str,
        owner: &'a Row,
    ) -> Self {
        Self {
            schema,
            state,
            table,
            owner,
        }
    }

    /// Returns every row of `target` related to the owner, in id order.
    ///
    /// All relations the owner's collection declares towards `target` are
    /// followed; a row reachable through several of them appears once.
    ///
    /// # Errors
    ///
    /// `NoSuchRelation` if the owner's collection declares nothing towards
    /// `target`; `NoSuchTable` if either table is missing.
    pub fn all(&self, target: &str) -> CoreResult<Vec<Row>> {
        let relations = self.relations_to(target)?;
        let mut found = BTreeMap::new();
        for relation in relations {
            found.extend(self.follow(relation)?);
        }
        Ok(found.into_values().collect())
    }

    /// Returns the rows related to the owner through one named relation.
    pub fn through(&self, relation: &str) -> CoreResult<Vec<Row>> {
        let owner = self.schema.declared(self.table)?;
        let relation = owner
            .relation(relation)
            .ok_or_else(|| CoreError::no_such_relation(self.table, relation))?;
        Ok(self
            .follow(relation)?
            .into_iter()
            .map(|(_, row)| row)
            .collect())
    }

    /// Returns the first row of `target` related to the owner.
    ///
    /// Belongs-to relations are tried before has-many ones, each in
    /// declaration order.
    pub fn first(&self, target: &str) -> CoreResult<Option<Row>> {
        let mut relations = self.relations_to(target)?;
        relations.sort_by_key(|r| r.kind() != RelationKind::BelongsTo);
        for relation in relations {
            if let Some((_, row)) = self.follow(relation)?.into_iter().next() {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    fn relations_to(&self, target: &str) -> CoreResult<Vec<&'a Relation>> {
        let owner = self.schema.declared(self.table)?;
        let relations = owner.relations_to(target);
        if relations.is_empty() {
            return Err(CoreError::no_such_relation(self.table, target));
        }
        Ok(relations)
    }

    fn follow(&self, relation: &Relation) -> CoreResult<Vec<(RowId, Row)>> {
        let target = self.state.table(relation.target())?;
        relation.resolve(self.owner, target)
    }
}

#[cfg(test)]
mod tests {
    use crate::collection::collection;
    use crate::error::CoreError;
    use crate::schema::{schema, Schema};
    use crate::space::TableSpace;
    use reldux_value::{Row, RowId};

    fn chat() -> Schema {
        schema([
            collection("User")
                .has_many("sent", "Message", "from")
                .has_many("received", "Message", "to"),
            collection("Message")
                .belongs_to("from", "User")
                .belongs_to("to", "User"),
            collection("Tag"),
        ])
        .unwrap()
    }

    fn user(id: i64) -> Row {
        Row::new().with("id", id)
    }

    fn message(id: i64, from: i64, to: i64) -> Row {
        Row::new().with("id", id).with("from", from).with("to", to)
    }

    fn populated(schema: &Schema) -> TableSpace {
        let mut db = schema.db(schema.initial());
        db.insert("User", user(1))
            .insert("User", user(2))
            .insert("User", user(3))
            .insert("Message", message(10, 1, 2))
            .insert("Message", message(11, 2, 1))
            .insert("Message", message(12, 1, 3))
            .insert("Message", message(13, 1, 1));
        db.run().unwrap()
    }

    fn ids(rows: &[Row]) -> Vec<RowId> {
        rows.iter().map(|r| r.id().unwrap()).collect()
    }

    #[test]
    fn all_unions_every_relation_to_target() {
        let schema = chat();
        let db = schema.db(populated(&schema));
        let alice = user(1);

        let related = db.for_row("User", &alice).all("Message").unwrap();
        assert_eq!(
            ids(&related),
            vec![
                RowId::Int(10),
                RowId::Int(11),
                RowId::Int(12),
                RowId::Int(13)
            ]
        );
    }

    #[test]
    fn through_follows_one_relation() {
        let schema = chat();
        let db = schema.db(populated(&schema));
        let alice = user(1);

        let sent = db.for_row("User", &alice).through("sent").unwrap();
        assert_eq!(ids(&sent), vec![RowId::Int(10), RowId::Int(12), RowId::Int(13)]);

        let received = db.for_row("User", &alice).through("received").unwrap();
        assert_eq!(ids(&received), vec![RowId::Int(11), RowId::Int(13)]);
    }

    #[test]
    fn belongs_to_traversal() {
        let schema = chat();
        let db = schema.db(populated(&schema));
        let msg = message(12, 1, 3);

        let users = db.for_row("Message", &msg).all("User").unwrap();
        assert_eq!(ids(&users), vec![RowId::Int(1), RowId::Int(3)]);

        let sender = db.get_for("Message", &msg, "User").unwrap();
        assert_eq!(sender, Some(user(1)));
    }

    #[test]
    fn get_for_without_match_is_none() {
        let schema = chat();
        let db = schema.db(populated(&schema));
        let nobody = user(99);

        assert_eq!(db.get_for("User", &nobody, "Message").unwrap(), None);
    }

    #[test]
    fn undeclared_relation_is_an_error() {
        let schema = chat();
        let db = schema.db(populated(&schema));
        let alice = user(1);

        assert_eq!(
            db.for_row("User", &alice).all("Tag").unwrap_err(),
            CoreError::no_such_relation("User", "Tag")
        );
        assert_eq!(
            db.for_row("User", &alice).through("likes").unwrap_err(),
            CoreError::no_such_relation("User", "likes")
        );
        assert_eq!(
            db.for_row("Ghost", &alice).all("User").unwrap_err(),
            CoreError::no_such_table("Ghost")
        );
    }

    #[test]
    fn traversal_ignores_queued_operations() {
        let schema = chat();
        let mut db = schema.db(populated(&schema));
        db.delete_where("Message", |_, _| true);

        let alice = user(1);
        assert_eq!(db.for_row("User", &alice).all("Message").unwrap().len(), 4);

        db.run().unwrap();
        assert!(db.for_row("User", &alice).all("Message").unwrap().is_empty());
    }
}
