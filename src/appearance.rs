//! Light/dark display mode.
//!
//! The mode is read once from the host at startup and may then be toggled
//! by the user. Toggles last for the session only; nothing here is written
//! to durable storage.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable terminals use to advertise their colours as `fg;bg`.
///
const COLOR_ENV_VAR: &str = "COLORFGBG";

/// Startup source of the display mode, as set in the configuration file.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    System,
    Dark,
    Light,
}

/// Session display mode.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    dark: bool,
}

impl ThemePreference {
    pub fn new(dark: bool) -> Self {
        ThemePreference { dark }
    }

    /// Derive the startup mode. `System` asks the host terminal.
    ///
    pub fn detect(appearance: Appearance) -> Self {
        let dark = match appearance {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_prefers_dark(),
        };
        ThemePreference { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }
}

/// Read the host colour-scheme signal. Defaults to light when unknown.
///
pub fn system_prefers_dark() -> bool {
    env::var(COLOR_ENV_VAR)
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
        .unwrap_or(false)
}

/// Interpret a `COLORFGBG` value. The last field is the background colour
/// index; the low non-white ANSI colours and bright black count as dark.
///
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}
