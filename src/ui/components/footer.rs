//! Footer keybinding bar.

use crate::ui::helpers::{clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints on the last row.
pub fn render_footer(footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    position_cursor(rows, 2);
    print!(
        "{}{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::dim(),
        clip(&footer.keybindings, cols.saturating_sub(2)),
        Theme::reset()
    );
}
