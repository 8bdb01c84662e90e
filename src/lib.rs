//! A terminal task list editor.
//!
//! Items are kept in an ordered store that persists itself on every change,
//! can be filtered to active or completed ones, and reordered with a keyboard
//! drag gesture.

pub mod app;
pub mod appearance;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod storage;
pub mod todo;
pub mod ui;
