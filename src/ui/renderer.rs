//! Top-level rendering coordinator.
//!
//! Computes a view model from application state and delegates to the
//! component renderers. The layout is fixed: header and search bar on top, a
//! results pane on the left, a side pane (detail or watched) on the right,
//! and a footer with keybindings.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ header                                  │
//! │ search bar                              │
//! ├────────────────────┬────────────────────┤
//! │ results            │ detail / watched   │
//! ├────────────────────┴────────────────────┤
//! │ footer                                  │
//! └─────────────────────────────────────────┘
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::draw_rule;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the UI to stdout.
///
/// Prints ANSI-styled output at absolute cursor positions. Does not clear
/// the screen; the caller owns the frame lifecycle.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if rows < 10 || cols < 40 {
        components::render_too_small(theme, rows, cols);
        return;
    }

    let split = cols / 2;
    let list_top = 5;
    let list_rows = rows.saturating_sub(7);

    components::render_header(&vm.header, theme, cols);
    components::render_search_bar(&vm.search_bar, theme, split);
    draw_rule(4, 1, cols, theme);

    components::render_results(&vm.results, theme, list_top, list_rows, split.saturating_sub(2));
    components::render_side(&vm.side, theme, list_top, list_rows, split + 1, cols - split);

    draw_rule(rows - 1, 1, cols, theme);
    components::render_footer(&vm.footer, theme, rows, cols);
}
