use super::Frame;
use crate::state::{Mode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const HIGHLIGHT_SYMBOL: &str = "> ";
const GRABBED_MARKER: &str = "= ";

/// Render the visible items according to state. During a drag the row the
/// item is held over is highlighted instead of the selection.
///
pub fn list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let normal_style = styling::normal_text_style(theme);
    let muted_style = styling::muted_text_style(theme);
    let completed_style = styling::completed_item_style(theme);
    let grabbed_style = styling::grabbed_item_style(theme);
    let highlight_style = styling::highlighted_list_item_style(theme);

    let active = state.mode() == Mode::Normal || state.mode() == Mode::Drag;
    let title = format!("Items ({})", state.get_filter().label());
    let block = Block::default().borders(Borders::ALL);
    let block = if active {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(title)
    };

    let drag = state.get_drag().cloned();
    let visible = state.visible_items();
    if visible.is_empty() {
        let message = if state.store().is_empty() {
            "Nothing to do.".to_string()
        } else {
            format!("No {} items.", state.get_filter().label().to_lowercase())
        };
        let paragraph = Paragraph::new(Span::styled(message, muted_style))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let grabbed = drag.as_ref().map_or(false, |drag| drag.active == item.id);
            let checkbox = if item.completed { "[x] " } else { "[ ] " };
            let text_style = if grabbed {
                grabbed_style
            } else if item.completed {
                completed_style
            } else {
                normal_style
            };
            let mut spans = Vec::with_capacity(3);
            if grabbed {
                spans.push(Span::styled(GRABBED_MARKER, grabbed_style));
            }
            spans.push(Span::styled(checkbox, muted_style));
            spans.push(Span::styled(item.text.clone(), text_style));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(normal_style)
        .highlight_style(highlight_style)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    if drag.is_some() {
        frame.render_stateful_widget(list, size, state.get_drag_list_state());
    } else {
        frame.render_stateful_widget(list, size, state.get_list_state());
    }
}
