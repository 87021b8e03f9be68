//! Watched list pane.

use crate::ui::helpers::{clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SummaryVm, WatchedRow};

/// Renders the watched summary block and list.
pub fn render_watched(
    summary: Option<&SummaryVm>,
    items: &[WatchedRow],
    theme: &Theme,
    top: usize,
    rows: usize,
    col: usize,
    width: usize,
) {
    position_cursor(top, col);
    print!(
        "{}{}MOVIES YOU WATCHED{}",
        Theme::fg(&theme.colors.header_fg),
        Theme::bold(),
        Theme::reset()
    );

    let Some(summary) = summary else {
        position_cursor(top + 2, col);
        print!(
            "{}Nothing here yet. Rate a movie and press a.{}",
            Theme::fg(&theme.colors.empty_state_fg),
            Theme::reset()
        );
        return;
    };

    position_cursor(top + 1, col);
    print!(
        "{}#{}  ★ {}  ☆ {}  ⏳ {}{}",
        Theme::fg(&theme.colors.text_dim),
        summary.count,
        summary.mean_imdb_rating,
        summary.mean_user_rating,
        summary.mean_runtime,
        Theme::reset()
    );

    let list_top = top + 3;
    let list_rows = rows.saturating_sub(3);

    for (i, item) in items.iter().take(list_rows).enumerate() {
        position_cursor(list_top + i, col);
        render_row(item, theme, width);
    }
}

fn render_row(item: &WatchedRow, theme: &Theme, width: usize) {
    let meta = format!("★{} ☆{} {}", item.imdb_rating, item.user_rating, item.runtime);
    let title = clip(&item.title, width.saturating_sub(meta.chars().count() + 3));

    if item.is_cursor {
        print!(
            "{}{} {}  {} {}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg),
            title,
            meta,
            Theme::reset()
        );
    } else {
        print!(
            "{} {}  {}{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            title,
            Theme::fg(&theme.colors.text_dim),
            Theme::dim(),
            meta,
            Theme::reset()
        );
    }
}
