//! Task list core.
//!
//! This module holds the ordered list state manager:
//! - `TodoItem` and `ItemId`: the task record and its identifier
//! - `ItemStore`: the authoritative sequence and its mutations
//! - `Filter`: all / active / completed projections of the sequence
//! - `reorder`: identifier-based relocation used by drag gestures

mod filter;
mod item;
pub mod reorder;
mod store;

pub use filter::Filter;
pub use item::{ItemId, TodoItem};
pub use reorder::DragEnd;
pub use store::{ItemStore, Listener};
