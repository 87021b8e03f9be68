//! Header bar and degenerate-size fallback.

use crate::ui::helpers::{draw_rule, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar across the top of the screen.
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) {
    position_cursor(1, 1);

    let bg = theme
        .colors
        .header_bg
        .as_ref()
        .map(|hex| Theme::bg(hex))
        .unwrap_or_default();

    print!(
        "{}{}{}{}{}",
        Theme::fg(&theme.colors.header_fg),
        bg,
        Theme::bold(),
        header.title,
        Theme::reset()
    );

    draw_rule(2, 1, cols, theme);
}

/// Fallback for terminals too small to hold the layout.
pub fn render_too_small(theme: &Theme, rows: usize, _cols: usize) {
    position_cursor(rows / 2, 1);
    print!(
        "{}terminal too small{}",
        Theme::fg(&theme.colors.empty_state_fg),
        Theme::reset()
    );
}
