//! Transaction sessions.
//!
//! A [`Db`] wraps one table-space snapshot and a queue of pending
//! operations. Queueing never fails and never touches the snapshot; all
//! work happens in [`Db::run`], which folds the queue in order and commits
//! the result as a whole or not at all.

mod after;
mod db;
mod operation;
mod typed;

pub use after::After;
pub use db::Db;
