//! Tables and the table-space.
//!
//! Both are persistent maps: cloning is O(1), and a modified clone shares
//! every untouched row and table with the value it came from. A snapshot
//! handed out is never changed afterwards.

mod table;
mod table_space;

pub use table::Table;
pub use table_space::TableSpace;
