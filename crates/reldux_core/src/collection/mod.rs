//! Collection declarations.
//!
//! A collection names a record kind and carries its relation metadata.
//! Typed rows implement [`Record`] so they can be declared and stored
//! without touching `Row` directly.

mod declaration;
mod record;

pub use declaration::{collection, Collection};
pub use record::Record;
