//! Reordering of the item sequence.
//!
//! A drag gesture reports where an item started and where it was dropped,
//! as positions inside whatever view the user was looking at. Positions in a
//! filtered view do not line up with positions in the full sequence, so the
//! gesture is first resolved to a pair of stable identifiers and the move is
//! then applied to the full sequence by identifier.

use super::{ItemId, TodoItem};

/// Outcome of a finished drag gesture, expressed by identifier.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub active: ItemId,
    pub over: ItemId,
}

impl DragEnd {
    /// Resolve view positions to identifiers. Returns `None` when either
    /// position falls outside the view.
    ///
    pub fn from_view(view: &[&TodoItem], from: usize, to: usize) -> Option<DragEnd> {
        let active = view.get(from)?.id.clone();
        let over = view.get(to)?.id.clone();
        Some(DragEnd { active, over })
    }

    /// Whether the gesture ended where it began.
    ///
    pub fn is_in_place(&self) -> bool {
        self.active == self.over
    }
}

/// Relocate the item `source` to the position currently held by `target`,
/// shifting the items in between by one. Returns whether the sequence
/// changed.
///
pub fn move_item(items: &mut Vec<TodoItem>, source: &ItemId, target: &ItemId) -> bool {
    if source == target {
        return false;
    }
    let from = match items.iter().position(|item| &item.id == source) {
        Some(index) => index,
        None => return false,
    };
    let to = match items.iter().position(|item| &item.id == target) {
        Some(index) => index,
        None => return false,
    };
    let item = items.remove(from);
    items.insert(to, item);
    true
}
