//! Search results pane.

use crate::ui::helpers::{clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultRow, ResultsPane};

/// Renders the left pane from its view model.
///
/// Exactly one of the loading indicator, the error banner, the empty
/// message, or the list is drawn per frame.
pub fn render_results(pane: &ResultsPane, theme: &Theme, top: usize, rows: usize, width: usize) {
    match pane {
        ResultsPane::Loading => {
            position_cursor(top, 2);
            print!(
                "{}Loading...{}",
                Theme::fg(&theme.colors.loading_fg),
                Theme::reset()
            );
        }
        ResultsPane::Error { message } => {
            position_cursor(top, 2);
            print!(
                "{}{}! {}{}",
                Theme::fg(&theme.colors.error_fg),
                Theme::bold(),
                clip(message, width.saturating_sub(2)),
                Theme::reset()
            );
        }
        ResultsPane::Empty { message } => {
            position_cursor(top, 2);
            print!(
                "{}{}{}",
                Theme::fg(&theme.colors.empty_state_fg),
                clip(message, width),
                Theme::reset()
            );
        }
        ResultsPane::List { items, .. } => {
            for (i, item) in items.iter().take(rows).enumerate() {
                position_cursor(top + i, 1);
                render_row(item, theme, width);
            }
        }
    }
}

fn render_row(item: &ResultRow, theme: &Theme, width: usize) {
    let marker = if item.is_open { "▸" } else { " " };
    let year_width = item.year.chars().count();
    let title = clip(&item.title, width.saturating_sub(year_width + 5));
    let line = format!("{marker} {title}");

    if item.is_cursor {
        let pad = width.saturating_sub(line.chars().count() + year_width + 2);
        print!(
            "{}{} {}{}{}  {}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg),
            line,
            " ".repeat(pad),
            item.year,
            Theme::reset()
        );
    } else {
        print!(
            "{} {}  {}{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            line,
            Theme::fg(&theme.colors.text_dim),
            Theme::dim(),
            item.year,
            Theme::reset()
        );
    }
}
