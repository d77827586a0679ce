//! Text view of the list. The store has no opinion on presentation; this is
//! one collaborator that turns the list into markdown-ish checkbox lines.

use crate::store::{TodoItem, TodoStore};
use crate::slot::SnapshotSlot;

/// One numbered line per item, completed ones checked off and struck
/// through.
pub fn render_list(items: &[TodoItem]) -> String {
    let mut out = String::from("");
    for (n, item) in items.iter().enumerate() {
        out = format!(
            "{}{:>3}. [{}] {}\n",
            out,
            n + 1,
            if item.complete { "x" } else { " " },
            if item.complete {
                format!("~~{}~~", &item.text)
            } else {
                String::from(&item.text)
            }
        );
    }
    out
}

/// The whole session: the list, or a shrug when it is empty, plus a note
/// when an edit is in flight.
pub fn render_store<S: SnapshotSlot>(store: &TodoStore<S>) -> String {
    if store.items().is_empty() {
        return String::from("(nothing yet)\n");
    }
    let mut out = render_list(store.items());
    if let Some(id) = store.editing() {
        out = format!("{}(editing item {})\n", out, id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    #[test]
    fn renders_checkboxes_and_strikethrough() {
        let items = vec![
            TodoItem {
                id: 1,
                complete: false,
                text: "buy milk".to_string(),
            },
            TodoItem {
                id: 2,
                complete: true,
                text: "water plants".to_string(),
            },
        ];
        let out = render_list(&items);
        assert_eq!(out, "  1. [ ] buy milk\n  2. [x] ~~water plants~~\n");
    }

    #[test]
    fn empty_store_renders_a_placeholder() {
        let store = TodoStore::load(MemorySlot::new());
        assert_eq!(render_store(&store), "(nothing yet)\n");
    }

    #[test]
    fn active_edit_is_noted() {
        let mut store = TodoStore::load(MemorySlot::new());
        store.add("a");
        let id = store.items()[0].id;
        store.begin_edit(id);
        let out = render_store(&store);
        assert!(out.contains("[ ] a"));
        assert!(out.ends_with(&format!("(editing item {})\n", id)));
    }
}
