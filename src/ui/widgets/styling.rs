use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the highlighted list row.
///
pub fn highlighted_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the item being carried during a drag.
///
pub fn grabbed_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent.to_color())
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

/// Return the style for completed items.
///
pub fn completed_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text_muted.to_color())
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the base style painted under every widget.
///
pub fn background_style(theme: &Theme) -> Style {
    Style::default().bg(theme.background.to_color())
}

/// Return the style for a footer mode badge.
///
pub fn mode_badge_style(theme: &Theme, badge: crate::ui::ColorSpec) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(badge.to_color())
        .add_modifier(Modifier::BOLD)
}
