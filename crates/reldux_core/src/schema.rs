//! Schema: the closed set of collections an application declares.

use crate::collection::Collection;
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::relation::Relation;
use crate::session::Db;
use crate::space::{Table, TableSpace};
use std::collections::HashSet;
use tracing::debug;

/// The declared collections of an application.
///
/// A schema is built once at startup and never changes. It produces empty
/// table-spaces and opens [`Db`] sessions; it holds no per-session state, so
/// any number of schemas can coexist in one process.
///
/// # Example
///
/// ```
/// use reldux_core::{collection, schema};
/// use reldux_value::Row;
///
/// let app = schema([collection("Todo")]).unwrap();
/// let state = app.initial();
///
/// let next = app
///     .db(state)
///     .after()
///     .insert("Todo", Row::new().with("id", 0).with("text", "Use Redux"))
///     .unwrap();
///
/// assert_eq!(next.table("Todo").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    collections: Vec<Collection>,
    config: Config,
}

impl Schema {
    /// Creates a schema with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two collections share a name (`DuplicateCollection`)
    /// - A relation targets an undeclared collection, or two relations of
    ///   one collection share a name (`InvalidSchema`)
    pub fn new(collections: impl IntoIterator<Item = Collection>) -> CoreResult<Self> {
        Self::with_config(collections, Config::default())
    }

    /// Creates a schema with a custom configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::new`]: `DuplicateCollection` for a repeated name,
    /// `InvalidSchema` for a relation to an undeclared collection or a
    /// relation name used twice on one collection.
    pub fn with_config(
        collections: impl IntoIterator<Item = Collection>,
        config: Config,
    ) -> CoreResult<Self> {
        let collections: Vec<Collection> = collections.into_iter().collect();

        let mut names = HashSet::new();
        for collection in &collections {
            if !names.insert(collection.name()) {
                return Err(CoreError::DuplicateCollection {
                    name: collection.name().to_string(),
                });
            }
        }

        for collection in &collections {
            let mut relation_names = HashSet::new();
            for relation in collection.relations() {
                if !names.contains(relation.target()) {
                    return Err(CoreError::invalid_schema(format!(
                        "relation {}.{} targets undeclared collection {}",
                        collection.name(),
                        relation.name(),
                        relation.target()
                    )));
                }
                if !relation_names.insert(relation.name()) {
                    return Err(CoreError::invalid_schema(format!(
                        "relation {}.{} is declared twice",
                        collection.name(),
                        relation.name()
                    )));
                }
            }
        }

        debug!(collections = collections.len(), "schema declared");

        Ok(Self {
            collections,
            config,
        })
    }

    /// Builds a table-space with one empty table per declared collection.
    #[must_use]
    pub fn initial(&self) -> TableSpace {
        let mut space = TableSpace::new();
        for collection in &self.collections {
            space.insert_table(collection.name(), Table::new());
        }
        space
    }

    /// Opens a session over a snapshot.
    ///
    /// The snapshot is not checked against this schema here; a missing table
    /// surfaces as `NoSuchTable` when it is accessed (or on `run()` when
    /// `Config::validate_snapshot` is set).
    #[must_use]
    pub fn db(&self, space: TableSpace) -> Db<'_> {
        Db::new(self, space)
    }

    /// Checks that a table-space holds exactly the declared tables.
    pub fn validate(&self, space: &TableSpace) -> CoreResult<()> {
        for collection in &self.collections {
            if !space.contains_table(collection.name()) {
                return Err(CoreError::no_such_table(collection.name()));
            }
        }
        if let Some(extra) = space
            .table_names()
            .find(|name| self.collection(name).is_none())
        {
            return Err(CoreError::UndeclaredTable {
                name: extra.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the declared collections, in declaration order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Finds a collection by name.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name() == name)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn declared(&self, name: &str) -> CoreResult<&Collection> {
        self.collection(name)
            .ok_or_else(|| CoreError::no_such_table(name))
    }

    /// First relation declared between two collections, looking at `a`'s
    /// declarations before `b`'s.
    pub(crate) fn relation_between(&self, a: &str, b: &str) -> Option<&Relation> {
        let forward = self
            .collection(a)
            .and_then(|c| c.relations_to(b).first().copied());
        forward.or_else(|| {
            self.collection(b)
                .and_then(|c| c.relations_to(a).first().copied())
        })
    }
}

/// Creates a schema with the default configuration.
pub fn schema(collections: impl IntoIterator<Item = Collection>) -> CoreResult<Schema> {
    Schema::new(collections)
}
