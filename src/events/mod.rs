//! Event handling module.
//!
//! This module contains the terminal event handler: key input and resize
//! events are polled on a separate thread and applied to the state on the
//! main thread.

pub mod terminal;
