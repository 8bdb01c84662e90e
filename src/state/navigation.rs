//! Navigation-related state types.
//!
//! This module contains the input modes and the keyboard drag gesture.

use crate::todo::{DragEnd, ItemId};

/// Specifying the different input modes.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Navigating and editing the list
    #[default]
    Normal,
    /// Typing the text of a new item
    Insert,
    /// Carrying an item to a new position
    Drag,
    /// Browsing the log panel
    Log,
}

/// An in-progress keyboard drag: the item picked up and the item it is
/// currently held over.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DragState {
    pub active: ItemId,
    pub over: ItemId,
}

impl DragState {
    pub fn new(active: ItemId) -> Self {
        DragState {
            over: active.clone(),
            active,
        }
    }

    /// Finish the gesture.
    ///
    pub fn end(self) -> DragEnd {
        DragEnd {
            active: self.active,
            over: self.over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(Mode::default(), Mode::Normal);
        assert_ne!(Mode::Insert, Mode::Drag);
    }

    #[test]
    fn test_drag_starts_in_place() {
        let drag = DragState::new(ItemId::from("a"));
        assert_eq!(drag.over, ItemId::from("a"));
        assert!(drag.end().is_in_place());
    }
}
