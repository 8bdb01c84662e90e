use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::state::{Mode, State};
use crate::todo::Filter;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Resize,
    Tick,
}

/// Specify struct for managing terminal events channel. The polling thread
/// owns the only sender, so the channel closes when that thread exits.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match poll_event(tick_rate) {
                    Ok(Some(event)) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Resize => {
                state.mark_dirty();
                Ok(true)
            }
            Event::Tick => {
                state.poll_log();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

fn poll_event(tick_rate: Duration) -> std::io::Result<Option<Event<KeyEvent>>> {
    if !event::poll(tick_rate)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        // Release and repeat events are reported on some platforms
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Input(key)),
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    })
}

/// Apply a key press to the state. Returns false when the user asked to quit.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    let mode = state.mode();
    if mode == Mode::Insert {
        handle_insert_key(key, state);
        return true;
    }

    let action = match get_action_for_event(&key, mode, state.hotkeys()) {
        Some(action) => action,
        None => return true,
    };
    trace!("Key {:?} in {:?} mode mapped to {:?}", key.code, mode, action);

    match action {
        HotkeyAction::Quit => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        HotkeyAction::NavigateNext => {
            state.next_item();
        }
        HotkeyAction::NavigatePrev => {
            state.previous_item();
        }
        HotkeyAction::AddItem => {
            state.enter_insert_mode();
        }
        HotkeyAction::ToggleItem => {
            state.toggle_selected();
        }
        HotkeyAction::DeleteItem => {
            state.delete_selected();
        }
        HotkeyAction::ClearCompleted => {
            state.clear_completed();
        }
        HotkeyAction::CycleFilter => {
            state.next_filter();
        }
        HotkeyAction::ShowAll => {
            state.set_filter(Filter::All);
        }
        HotkeyAction::ShowActive => {
            state.set_filter(Filter::Active);
        }
        HotkeyAction::ShowCompleted => {
            state.set_filter(Filter::Completed);
        }
        HotkeyAction::MoveUp => {
            state.move_selected_up();
        }
        HotkeyAction::MoveDown => {
            state.move_selected_down();
        }
        HotkeyAction::Grab => {
            state.grab_selected();
        }
        HotkeyAction::ToggleTheme => {
            state.toggle_theme();
        }
        HotkeyAction::OpenLog => {
            state.open_log();
        }
        HotkeyAction::DragNext => {
            state.drag_next();
        }
        HotkeyAction::DragPrev => {
            state.drag_previous();
        }
        HotkeyAction::Drop => {
            state.drop_grabbed();
        }
        HotkeyAction::CancelDrag => {
            state.cancel_drag();
        }
        HotkeyAction::LogNext => {
            state.next_log();
        }
        HotkeyAction::LogPrev => {
            state.previous_log();
        }
        HotkeyAction::CloseLog => {
            state.close_log();
        }
    }
    true
}

/// Insert mode takes raw text: printable characters go to the input buffer.
///
fn handle_insert_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Enter => {
            state.submit_input();
        }
        KeyCode::Esc => {
            state.cancel_input();
        }
        KeyCode::Backspace => {
            state.remove_input_char();
        }
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            state.add_input_char(c);
        }
        _ => (),
    }
}
