//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, default bindings per input mode, and user overrides from the
//! configuration file.

use crate::state::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // List actions
    NavigateNext,
    NavigatePrev,
    AddItem,
    ToggleItem,
    DeleteItem,
    ClearCompleted,
    CycleFilter,
    ShowAll,
    ShowActive,
    ShowCompleted,
    MoveUp,
    MoveDown,
    Grab,
    ToggleTheme,
    OpenLog,
    Quit,

    // Drag actions
    DragNext,
    DragPrev,
    Drop,
    CancelDrag,

    // Log panel actions
    LogNext,
    LogPrev,
    CloseLog,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Upper-case letters arrive from the terminal with the shift modifier set.
    ///
    pub fn shifted(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Delete => KeyCodeSerde::Delete,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each input mode. Insert mode
/// takes raw text and has no bindings.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeHotkeys {
    pub normal: HashMap<HotkeyAction, Hotkey>,
    pub drag: HashMap<HotkeyAction, Hotkey>,
    pub log: HashMap<HotkeyAction, Hotkey>,
}

/// Partial bindings read from the configuration file. Missing entries keep
/// their defaults.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyOverrides {
    #[serde(default)]
    pub normal: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub drag: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub log: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ModeHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ModeHotkeys {
    /// Return the defaults with `overrides` applied on top.
    ///
    pub fn with_overrides(overrides: &HotkeyOverrides) -> Self {
        let mut hotkeys = default_hotkeys();
        hotkeys.normal.extend(overrides.normal.clone());
        hotkeys.drag.extend(overrides.drag.clone());
        hotkeys.log.extend(overrides.log.clone());
        hotkeys
    }

    /// Return the bindings active in `mode`, if the mode has any.
    ///
    pub fn for_mode(&self, mode: Mode) -> Option<&HashMap<HotkeyAction, Hotkey>> {
        match mode {
            Mode::Normal => Some(&self.normal),
            Mode::Drag => Some(&self.drag),
            Mode::Log => Some(&self.log),
            Mode::Insert => None,
        }
    }
}

/// Returns default hotkey mappings for all modes.
///
pub fn default_hotkeys() -> ModeHotkeys {
    let normal = HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::NavigatePrev, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::AddItem, Hotkey::plain(KeyCode::Char('a'))),
        (HotkeyAction::ToggleItem, Hotkey::plain(KeyCode::Char(' '))),
        (HotkeyAction::DeleteItem, Hotkey::plain(KeyCode::Char('x'))),
        (HotkeyAction::ClearCompleted, Hotkey::shifted('C')),
        (HotkeyAction::CycleFilter, Hotkey::plain(KeyCode::Tab)),
        (HotkeyAction::ShowAll, Hotkey::plain(KeyCode::Char('1'))),
        (HotkeyAction::ShowActive, Hotkey::plain(KeyCode::Char('2'))),
        (HotkeyAction::ShowCompleted, Hotkey::plain(KeyCode::Char('3'))),
        (HotkeyAction::MoveUp, Hotkey::shifted('K')),
        (HotkeyAction::MoveDown, Hotkey::shifted('J')),
        (HotkeyAction::Grab, Hotkey::plain(KeyCode::Char('m'))),
        (HotkeyAction::ToggleTheme, Hotkey::plain(KeyCode::Char('t'))),
        (HotkeyAction::OpenLog, Hotkey::plain(KeyCode::Char('l'))),
        (HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q'))),
    ]);

    let drag = HashMap::from([
        (HotkeyAction::DragNext, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::DragPrev, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::Drop, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::CancelDrag, Hotkey::plain(KeyCode::Esc)),
    ]);

    let log = HashMap::from([
        (HotkeyAction::LogNext, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::LogPrev, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::CloseLog, Hotkey::plain(KeyCode::Esc)),
    ]);

    ModeHotkeys { normal, drag, log }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in a specific mode.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: Mode,
    hotkeys: &ModeHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_mode(mode)?
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        let hotkey = match hotkeys.get(action) {
            Some(hotkey) => hotkey,
            None => continue,
        };
        match paired_action.and_then(|paired| hotkeys.get(&paired)) {
            Some(paired_hotkey) => parts.push(format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            )),
            None => parts.push(format!(
                " {}: {}",
                format_hotkey_display(hotkey),
                description
            )),
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    // Shifted letters already read as upper case
    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
