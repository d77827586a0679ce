//! whatnext keeps one flat todo list in a YAML snapshot file
//!
//! - local first software guidelines: the snapshot is a plain file you can
//!   read, diff, and keep in GIT
//! - the list lives in memory behind [`store::TodoStore`]; every mutation is
//!   mirrored to a [`slot::SnapshotSlot`] before the call returns
//! - failure modes degrade quietly: missing or corrupt snapshots load as an
//!   empty list, bad input and unknown ids are no-ops
//!
pub mod render;
pub mod slot;
pub mod store;

pub use crate::slot::{FileSlot, MemorySlot, SnapshotSlot};
pub use crate::store::{Outcome, TodoId, TodoItem, TodoStore};
