use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_list: ColorSpec,
    pub footer_insert: ColorSpec,
    pub footer_drag: ColorSpec,
    pub footer_log: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(161, 119, 255),       // Iris
            accent: rgb(255, 109, 146),        // Rose
            banner: rgb(255, 109, 146),        // Rose
            text: rgb(88, 82, 96),             // Text
            text_muted: rgb(152, 147, 165),    // Muted
            background: rgb(250, 244, 237),    // Base
            surface: rgb(255, 250, 243),       // Surface
            success: rgb(59, 247, 209),        // Pine
            warning: rgb(255, 210, 0),         // Gold
            error: rgb(235, 111, 146),         // Love
            border_active: rgb(161, 119, 255), // Iris
            border_normal: rgb(88, 82, 96),    // Text
            highlight_bg: rgb(61, 174, 233),   // Foam
            highlight_fg: rgb(0, 0, 0),
            footer_list: rgb(61, 174, 233),
            footer_insert: rgb(255, 210, 0),
            footer_drag: rgb(161, 119, 255),
            footer_log: rgb(59, 247, 209),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: rgb(196, 167, 231),
            accent: rgb(235, 111, 146),
            banner: rgb(235, 111, 146),
            text: rgb(224, 222, 244),
            text_muted: rgb(86, 82, 100),
            background: rgb(25, 23, 36),
            surface: rgb(31, 29, 43),
            success: rgb(49, 116, 143),
            warning: rgb(246, 193, 119),
            error: rgb(235, 111, 146),
            border_active: rgb(196, 167, 231),
            border_normal: rgb(144, 140, 170),
            highlight_bg: rgb(156, 207, 216),
            highlight_fg: rgb(25, 23, 36),
            footer_list: rgb(156, 207, 216),
            footer_insert: rgb(246, 193, 119),
            footer_drag: rgb(196, 167, 231),
            footer_log: rgb(49, 116, 143),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),
            accent: rgb(255, 121, 198),
            banner: rgb(255, 121, 198),
            text: rgb(248, 248, 242),
            text_muted: rgb(98, 114, 164),
            background: rgb(40, 42, 54),
            surface: rgb(68, 71, 90),
            success: rgb(80, 250, 123),
            warning: rgb(255, 184, 108),
            error: rgb(255, 85, 85),
            border_active: rgb(189, 147, 249),
            border_normal: rgb(98, 114, 164),
            highlight_bg: rgb(139, 233, 253),
            highlight_fg: rgb(40, 42, 54),
            footer_list: rgb(139, 233, 253),
            footer_insert: rgb(255, 184, 108),
            footer_drag: rgb(189, 147, 249),
            footer_log: rgb(80, 250, 123),
        }
    }

    /// Catppuccin Latte theme.
    ///
    pub fn catppuccin_latte() -> Self {
        Theme {
            name: "catppuccin-latte".to_string(),
            primary: rgb(136, 57, 239),
            accent: rgb(234, 118, 203),
            banner: rgb(234, 118, 203),
            text: rgb(76, 79, 105),
            text_muted: rgb(108, 111, 133),
            background: rgb(239, 241, 245),
            surface: rgb(230, 233, 239),
            success: rgb(40, 205, 130),
            warning: rgb(223, 142, 29),
            error: rgb(210, 15, 57),
            border_active: rgb(136, 57, 239),
            border_normal: rgb(108, 111, 133),
            highlight_bg: rgb(32, 159, 181),
            highlight_fg: rgb(239, 241, 245),
            footer_list: rgb(32, 159, 181),
            footer_insert: rgb(223, 142, 29),
            footer_drag: rgb(136, 57, 239),
            footer_log: rgb(40, 205, 130),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: rgb(203, 166, 247),
            accent: rgb(250, 179, 135),
            banner: rgb(245, 189, 230),
            text: rgb(205, 214, 244),
            text_muted: rgb(166, 173, 200),
            background: rgb(17, 17, 27),
            surface: rgb(24, 24, 37),
            success: rgb(166, 227, 161),
            warning: rgb(249, 226, 175),
            error: rgb(243, 139, 168),
            border_active: rgb(203, 166, 247),
            border_normal: rgb(166, 173, 200),
            highlight_bg: rgb(137, 180, 250),
            highlight_fg: rgb(17, 17, 27),
            footer_list: rgb(137, 180, 250),
            footer_insert: rgb(249, 226, 175),
            footer_drag: rgb(203, 166, 247),
            footer_log: rgb(166, 227, 161),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),
            accent: rgb(255, 159, 196),
            banner: rgb(255, 159, 196),
            text: rgb(169, 177, 214),
            text_muted: rgb(117, 121, 148),
            background: rgb(26, 27, 38),
            surface: rgb(36, 40, 59),
            success: rgb(158, 206, 106),
            warning: rgb(255, 202, 40),
            error: rgb(247, 118, 142),
            border_active: rgb(125, 207, 255),
            border_normal: rgb(117, 121, 148),
            highlight_bg: rgb(125, 207, 255),
            highlight_fg: rgb(26, 27, 38),
            footer_list: rgb(125, 207, 255),
            footer_insert: rgb(255, 202, 40),
            footer_drag: rgb(255, 159, 196),
            footer_log: rgb(158, 206, 106),
        }
    }

    /// Tokyo Night Day theme.
    ///
    pub fn tokyo_night_day() -> Self {
        Theme {
            name: "tokyo-night-day".to_string(),
            primary: rgb(38, 139, 210),
            accent: rgb(220, 50, 47),
            banner: rgb(220, 50, 47),
            text: rgb(26, 27, 38),
            text_muted: rgb(117, 121, 148),
            background: rgb(234, 238, 255),
            surface: rgb(203, 211, 255),
            success: rgb(34, 154, 83),
            warning: rgb(196, 157, 0),
            error: rgb(220, 50, 47),
            border_active: rgb(38, 139, 210),
            border_normal: rgb(117, 121, 148),
            highlight_bg: rgb(38, 139, 210),
            highlight_fg: rgb(234, 238, 255),
            footer_list: rgb(38, 139, 210),
            footer_insert: rgb(196, 157, 0),
            footer_drag: rgb(220, 50, 47),
            footer_log: rgb(34, 154, 83),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "rose-pine" => Some(Self::rose_pine()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-latte" => Some(Self::catppuccin_latte()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "tokyo-night" => Some(Self::tokyo_night()),
            "tokyo-night-day" => Some(Self::tokyo_night_day()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<&'static str> {
        vec![
            "rose-pine-dawn",
            "rose-pine",
            "dracula",
            "catppuccin-latte",
            "catppuccin-mocha",
            "tokyo-night",
            "tokyo-night-day",
        ]
    }
}

/// The pair of palettes used for light and dark mode.
///
#[derive(Clone, Debug)]
pub struct ThemePair {
    pub dark: Theme,
    pub light: Theme,
}

impl Default for ThemePair {
    fn default() -> Self {
        ThemePair {
            dark: Theme::tokyo_night(),
            light: Theme::rose_pine_dawn(),
        }
    }
}

impl ThemePair {
    /// Resolve palette names, falling back to the defaults for unknown names.
    ///
    pub fn from_names(dark: &str, light: &str) -> Self {
        let defaults = ThemePair::default();
        ThemePair {
            dark: Theme::from_name(dark).unwrap_or_else(|| {
                log::warn!("Unknown dark theme '{}', using {}", dark, defaults.dark.name);
                defaults.dark.clone()
            }),
            light: Theme::from_name(light).unwrap_or_else(|| {
                log::warn!(
                    "Unknown light theme '{}', using {}",
                    light,
                    defaults.light.name
                );
                defaults.light.clone()
            }),
        }
    }

    pub fn select(&self, dark: bool) -> &Theme {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_theme_resolves_to_itself() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn pair_falls_back_for_unknown_names() {
        let pair = ThemePair::from_names("nope", "catppuccin-latte");
        assert_eq!(pair.dark.name, "tokyo-night");
        assert_eq!(pair.light.name, "catppuccin-latte");
        assert_eq!(pair.select(true).name, "tokyo-night");
        assert_eq!(pair.select(false).name, "catppuccin-latte");
    }

    #[test]
    fn color_spec_converts_to_rgb() {
        assert_eq!(rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
