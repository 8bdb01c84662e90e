//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the startup appearance, palette names, data directory, log level,
//! and hotkey overrides.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, HotkeyOverrides, ModeHotkeys};

use crate::appearance::Appearance;
use crate::error::{AppError, AppResult};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub appearance: Appearance,
    pub dark_theme: String,
    pub light_theme: String,
    pub data_dir: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub hotkeys: HotkeyOverrides,
    file_path: Option<PathBuf>,
    created: bool,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
    #[serde(default = "default_light_theme")]
    pub light_theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub hotkeys: HotkeyOverrides,
}

fn default_dark_theme() -> String {
    "tokyo-night".to_string()
}

fn default_light_theme() -> String {
    "rose-pine-dawn".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Parse a log level name such as `debug` or `WARN`.
///
pub fn parse_log_level(name: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(name.trim()).map_err(|_| ConfigError::InvalidLogLevel(name.to_string()))
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            appearance: Appearance::default(),
            dark_theme: default_dark_theme(),
            light_theme: default_light_theme(),
            data_dir: None,
            log_level: LevelFilter::Info,
            hotkeys: HotkeyOverrides::default(),
            file_path: None,
            created: false,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// defaults so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            self.save()?;
            self.created = true;
            return Ok(());
        }
        self.created = false;

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        self.apply_yaml(&contents)
    }

    /// Overwrite fields from the YAML text of a configuration file.
    ///
    fn apply_yaml(&mut self, contents: &str) -> AppResult<()> {
        let data: FileSpec = if contents.trim().is_empty() {
            serde_yaml::from_str("{}")
        } else {
            serde_yaml::from_str(contents)
        }
        .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        self.appearance = data.appearance;
        self.dark_theme = data.dark_theme;
        self.light_theme = data.light_theme;
        self.data_dir = data.data_dir;
        self.log_level = parse_log_level(&data.log_level)?;
        self.hotkeys = data.hotkeys;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            appearance: self.appearance,
            dark_theme: self.dark_theme.clone(),
            light_theme: self.light_theme.clone(),
            data_dir: self.data_dir.clone(),
            log_level: self.log_level.to_string().to_lowercase(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Resolved hotkeys: defaults with the configured overrides applied.
    ///
    pub fn resolved_hotkeys(&self) -> ModeHotkeys {
        ModeHotkeys::with_overrides(&self.hotkeys)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Whether the last `load` found no file and wrote the defaults.
    ///
    pub fn was_created(&self) -> bool {
        self.created
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hotkeys::Hotkey;
    use crossterm::event::KeyCode;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("todo-tui-config-{}", Uuid::new_v4()))
    }

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.appearance, Appearance::System);
        assert_eq!(config.dark_theme, "tokyo-night");
        assert_eq!(config.light_theme, "rose-pine-dawn");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let mut config = Config::new();
        config.apply_yaml("").unwrap();
        assert_eq!(config.dark_theme, "tokyo-night");
        assert_eq!(config.resolved_hotkeys(), ModeHotkeys::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let yaml = "appearance: dark\nlight_theme: catppuccin-latte\nlog_level: debug\nhotkeys:\n  normal:\n    delete_item:\n      code: Delete\n";
        let mut config = Config::new();
        config.apply_yaml(yaml).unwrap();
        assert_eq!(config.appearance, Appearance::Dark);
        assert_eq!(config.light_theme, "catppuccin-latte");
        assert_eq!(config.dark_theme, "tokyo-night");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(
            config.resolved_hotkeys().normal.get(&HotkeyAction::DeleteItem),
            Some(&Hotkey::plain(KeyCode::Delete))
        );
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let mut config = Config::new();
        let result = config.apply_yaml("appearance: [not, an, enum]");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn invalid_log_level_is_an_error() {
        assert!(parse_log_level("chatty").is_err());
        assert_eq!(parse_log_level("WARN").unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn load_writes_defaults_then_reads_them_back() {
        let dir = scratch_dir();
        let dir_str = dir.to_string_lossy().to_string();

        let mut config = Config::new();
        config.load(Some(&dir_str)).unwrap();
        assert!(dir.join(FILE_NAME).exists());
        assert!(config.was_created());

        config.appearance = Appearance::Light;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(&dir_str)).unwrap();
        assert_eq!(reloaded.appearance, Appearance::Light);
        assert!(!reloaded.was_created());
        assert_eq!(reloaded.log_level, LevelFilter::Info);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
