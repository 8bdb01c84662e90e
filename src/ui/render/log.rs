use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Log";

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));

    let error_style = Style::default().fg(theme.error.to_color());
    let warning_style = Style::default().fg(theme.warning.to_color());
    let normal_style = styling::normal_text_style(theme);
    let highlight_style = styling::highlighted_list_item_style(theme);

    let items: Vec<ListItem> = state
        .get_log_entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                error_style
            } else if entry.contains(" WARN ") {
                warning_style
            } else {
                normal_style
            };
            ListItem::new(Line::from(Span::styled(entry, style)))
        })
        .collect();

    let list = List::new(items)
        .style(normal_style)
        .highlight_style(highlight_style)
        .block(block);
    frame.render_stateful_widget(list, size, state.get_log_list_state());
}
