use super::{footer, header, input, list, log, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const LOG_PANEL_HEIGHT: u16 = 10;
const FOOTER_HEIGHT: u16 = 1;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    frame.render_widget(
        Block::default().style(styling::background_style(state.get_theme())),
        size,
    );

    let log_open = state.is_log_open();
    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(3),
    ];
    if log_open {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, rows[0], state);
    input(frame, rows[1], state);
    list(frame, rows[2], state);
    if log_open {
        log(frame, rows[3], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
