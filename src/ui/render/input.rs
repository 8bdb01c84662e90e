use super::Frame;
use crate::state::{Mode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "New item";
const PLACEHOLDER: &str = "What needs to be done?";

/// Render the new item input box. The cursor is shown while typing.
///
pub fn input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let editing = state.mode() == Mode::Insert;

    let mut block = Block::default().borders(Borders::ALL);
    block = if editing {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(BLOCK_TITLE)
    };
    let inner = block.inner(size);

    let text = state.get_input();
    let line = if text.is_empty() && !editing {
        Line::from(Span::styled(PLACEHOLDER, styling::muted_text_style(theme)))
    } else {
        Line::from(Span::styled(text, styling::normal_text_style(theme)))
    };
    let cursor_offset = line.width() as u16;
    frame.render_widget(Paragraph::new(line).block(block), size);

    if editing {
        let x = inner.x + cursor_offset.min(inner.width.saturating_sub(1));
        frame.set_cursor(x, inner.y);
    }
}
