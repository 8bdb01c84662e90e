use crate::appearance::ThemePreference;
use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crate::storage::{FileStore, ItemPersistence};
use crate::todo::ItemStore;
use crate::ui::ThemePair;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;

type Terminal = ratatui::Terminal<ratatui::backend::CrosstermBackend<Stdout>>;

/// Startup options given on the command line. They take precedence over the
/// configuration file.
///
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, options: Options) -> Result<()> {
        let log_buffer = LogBuffer::new();
        CustomLogger::new(
            options.log_level.unwrap_or(config.log_level),
            log_buffer.clone(),
        )
        .install()?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            if config.was_created() {
                info!("Wrote default configuration to {}", path.display());
            } else {
                debug!("Loaded configuration from {}", path.display());
            }
        }

        let file_store = match options.data_dir.or_else(|| config.data_dir.clone()) {
            Some(dir) => FileStore::new(dir),
            None => FileStore::at_default_path().map_err(AppError::from)?,
        };
        info!("Storing items in {}", file_store.dir().display());
        let store = ItemStore::open(ItemPersistence::new(Box::new(file_store)));

        let theme_preference = ThemePreference::detect(config.appearance);
        let themes = ThemePair::from_names(&config.dark_theme, &config.light_theme);

        let mut app = App {
            state: State::new(
                store,
                theme_preference,
                themes,
                config.resolved_hotkeys(),
                log_buffer,
            ),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error. The terminal is restored either way.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut terminal = setup_terminal()?;
        let result = self.run(&mut terminal);
        let restored = restore_terminal(&mut terminal);
        result.and(restored)
    }

    fn run(&mut self, terminal: &mut Terminal) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            if let Ok(size) = terminal.size() {
                self.state.set_terminal_size(size);
            }
            if self.state.take_redraw() {
                terminal
                    .draw(|frame| crate::ui::render(frame, &mut self.state))
                    .map_err(|e| AppError::Terminal(e.to_string()))?;
            }
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}

fn setup_terminal() -> Result<Terminal> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
