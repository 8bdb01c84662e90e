use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Mode, State};
use crate::todo::Filter;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Build the hint text for the current input mode.
///
fn hint_text(state: &State) -> String {
    let hotkeys = state.hotkeys();
    match state.mode() {
        Mode::Normal => build_footer_text(
            &hotkeys.normal,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::AddItem, "add", None),
                (HotkeyAction::ToggleItem, "toggle", None),
                (HotkeyAction::DeleteItem, "delete", None),
                (HotkeyAction::Grab, "move", None),
                (HotkeyAction::CycleFilter, "filter", None),
                (HotkeyAction::ClearCompleted, "clear completed", None),
                (HotkeyAction::OpenLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        Mode::Insert => " Type to add, Enter: save, Esc: done".to_string(),
        Mode::Drag => build_footer_text(
            &hotkeys.drag,
            &[
                (
                    HotkeyAction::DragNext,
                    "choose position",
                    Some(HotkeyAction::DragPrev),
                ),
                (HotkeyAction::Drop, "drop", None),
                (HotkeyAction::CancelDrag, "cancel", None),
            ],
        ),
        Mode::Log => build_footer_text(
            &hotkeys.log,
            &[
                (
                    HotkeyAction::LogNext,
                    "navigate logs",
                    Some(HotkeyAction::LogPrev),
                ),
                (HotkeyAction::CloseLog, "close", None),
            ],
        ),
    }
}

/// Return the count of remaining items in words.
///
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (badge, badge_color) = match state.mode() {
        Mode::Normal => ("LIST:", theme.footer_list),
        Mode::Insert => ("INSERT:", theme.footer_insert),
        Mode::Drag => ("DRAG:", theme.footer_drag),
        Mode::Log => ("LOG:", theme.footer_log),
    };
    let controls_content = Line::from(vec![
        Span::styled(badge, styling::mode_badge_style(theme, badge_color)),
        Span::styled(hint_text(state), Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let mut spans = vec![Span::styled(
        format!("{} ", items_left_label(state.store().active_count())),
        styling::normal_text_style(theme),
    )];
    for filter in Filter::ALL {
        let style = if filter == state.get_filter() {
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            styling::muted_text_style(theme)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(filter.label(), style));
    }
    let right_content = Line::from(spans);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_left_is_singular_for_one() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(7), "7 items left");
    }

    #[test]
    fn hint_text_follows_mode() {
        let mut state = State::default();
        assert!(hint_text(&state).contains("j/k: navigate"));
        assert!(hint_text(&state).contains("Space: toggle"));

        state.enter_insert_mode();
        assert!(hint_text(&state).contains("Enter: save"));

        state.cancel_input().open_log();
        assert!(hint_text(&state).contains("Esc: close"));
    }
}
