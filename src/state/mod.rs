//! Application state management module.
//!
//! This module contains the state held by the terminal application:
//! - Main `State` struct owning the item store and the view state around it
//! - Navigation types (input modes, keyboard drag gesture)

mod navigation;
mod state_impl;

pub use navigation::{DragState, Mode};
pub use state_impl::State;
