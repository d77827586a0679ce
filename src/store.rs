//! The todo-list state contract:
//!
//! - one flat list of items, insertion order kept, ids unique
//! - four mutating operations (add, toggle, edit, remove), each mirrored to
//!   the persistence slot before it returns
//! - at most one item being edited at a time
//!
//! Failures degrade to safe defaults: an unreadable snapshot loads as an
//! empty list, bad input and unknown ids are quiet no-ops, and a failed
//! write leaves the in-memory list ahead of the slot rather than rolling
//! anything back.

use chrono::prelude::*;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::slot::SnapshotSlot;

pub type TodoId = i64;

/// One entry in the list. `id` never changes after creation; `text` changes
/// only through [`TodoStore::edit`] and `complete` only through
/// [`TodoStore::toggle_complete`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub complete: bool,
    pub text: String,
}

/// What a mutating operation did. The quiet-no-op behavior is part of the
/// contract; this is for callers that want to notice anyway.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Applied,
    Ignored,
}

/// Owns the list and the slot it is mirrored to.
pub struct TodoStore<S: SnapshotSlot> {
    slot: S,
    items: Vec<TodoItem>,
    editing: Option<TodoId>,
    last_id: TodoId,
}

impl<S: SnapshotSlot> TodoStore<S> {
    /// Loads the snapshot held by `slot`. A missing or unparsable snapshot
    /// becomes an empty list; this never fails.
    pub fn load(slot: S) -> TodoStore<S> {
        let items: Vec<TodoItem> = match slot.read() {
            Ok(Some(payload)) => match serde_yaml::from_str(&payload) {
                Ok(items) => items,
                Err(e) => {
                    warn!("snapshot is unparsable, starting empty: {}", e);
                    vec![]
                }
            },
            Ok(None) => vec![],
            Err(e) => {
                warn!("snapshot is unreadable, starting empty: {}", e);
                vec![]
            }
        };
        debug!("loaded {} item(s)", items.len());
        let last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        TodoStore {
            slot,
            items,
            editing: None,
            last_id,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The id currently being edited, if any.
    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Appends a new incomplete item with the trimmed text. Text that trims
    /// to nothing is rejected without touching the slot.
    pub fn add(&mut self, raw_text: &str) -> Outcome {
        let text = raw_text.trim();
        if text.is_empty() {
            return Outcome::Ignored;
        }
        let id = self.next_id();
        self.items.push(TodoItem {
            id,
            complete: false,
            text: text.to_string(),
        });
        self.persist();
        Outcome::Applied
    }

    /// Flips `complete` on the matching item. Unknown ids are ignored, but
    /// the snapshot is rewritten either way.
    pub fn toggle_complete(&mut self, id: TodoId) -> Outcome {
        let outcome = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.complete = !item.complete;
                Outcome::Applied
            }
            None => Outcome::Ignored,
        };
        self.persist();
        outcome
    }

    /// Replaces the matching item's text verbatim, no trimming and no empty
    /// check, and ends the edit session whether or not the id matched.
    pub fn edit(&mut self, id: TodoId, new_text: &str) -> Outcome {
        let outcome = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = new_text.to_string();
                Outcome::Applied
            }
            None => Outcome::Ignored,
        };
        self.editing = None;
        self.persist();
        outcome
    }

    /// Removes the matching item. Unknown ids are ignored.
    pub fn remove(&mut self, id: TodoId) -> Outcome {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let outcome = if self.items.len() < before {
            Outcome::Applied
        } else {
            Outcome::Ignored
        };
        self.persist();
        outcome
    }

    /// Marks `id` as the edit target. Does not check that the id exists and
    /// does not persist; the slot only changes on list mutations.
    pub fn begin_edit(&mut self, id: TodoId) {
        self.editing = Some(id);
    }

    /// Ends the edit session without touching the list or the slot.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Millisecond wall-clock ids, bumped past the last one handed out so
    /// two adds in the same tick (or a clock step backwards) cannot collide.
    fn next_id(&mut self) -> TodoId {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last_id {
            now
        } else {
            self.last_id + 1
        };
        self.last_id = id;
        id
    }

    fn persist(&mut self) {
        let payload = match serde_yaml::to_string(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("could not serialize snapshot, keeping in-memory state: {}", e);
                return;
            }
        };
        if let Err(e) = self.slot.write(&payload) {
            warn!("snapshot write failed, keeping in-memory state: {}", e);
        }
    }
}
