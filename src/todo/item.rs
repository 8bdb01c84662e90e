use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a task item. Assigned once at creation and never
/// reused.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Return a freshly generated identifier.
    ///
    pub fn generate() -> Self {
        ItemId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Defines task item data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// Build a new incomplete item from already trimmed text.
    ///
    pub fn new(text: impl Into<String>) -> Self {
        TodoItem {
            id: ItemId::generate(),
            text: text.into(),
            completed: false,
        }
    }
}
