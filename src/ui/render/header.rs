use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BANNER: &str = "TODO";

/// Render the banner with the current display mode.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let banner = Paragraph::new(Line::from(Span::styled(
        BANNER,
        styling::banner_style(theme),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(banner, inner);

    let mode = if state.is_dark() { "dark" } else { "light" };
    let mut spans = vec![Span::styled(
        format!("{} mode ", mode),
        styling::normal_text_style(theme),
    )];
    if let Some(hotkey) = state.hotkeys().normal.get(&HotkeyAction::ToggleTheme) {
        spans.push(Span::styled(
            format!("({}: toggle)", format_hotkey_display(hotkey)),
            styling::muted_text_style(theme),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        inner,
    );
}
