//! Relations between collections.
//!
//! Relations are declared per collection (`has_many` / `belongs_to`) and
//! resolved by scanning the related table for foreign-key equality. There
//! are no secondary indexes.

mod chain;
mod declaration;
mod query;

pub use chain::{RelationChain, RelationRecord};
pub use declaration::{Relation, RelationKind};
pub use query::RelationQuery;
