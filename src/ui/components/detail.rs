//! Side pane dispatch and the movie detail view.

use crate::ui::components::watched::render_watched;
use crate::ui::helpers::{clip, position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailVm, SidePane};

/// Renders the right pane from its view model.
pub fn render_side(pane: &SidePane, theme: &Theme, top: usize, rows: usize, col: usize, width: usize) {
    match pane {
        SidePane::DetailLoading => {
            position_cursor(top, col);
            print!(
                "{}Loading...{}",
                Theme::fg(&theme.colors.loading_fg),
                Theme::reset()
            );
        }
        SidePane::DetailError { message } => {
            position_cursor(top, col);
            print!(
                "{}{}! {}{}",
                Theme::fg(&theme.colors.error_fg),
                Theme::bold(),
                clip(message, width.saturating_sub(2)),
                Theme::reset()
            );
        }
        SidePane::Detail(detail) => render_detail(detail, theme, top, rows, col, width),
        SidePane::Watched { summary, items } => {
            render_watched(summary.as_ref(), items, theme, top, rows, col, width);
        }
    }
}

fn render_detail(detail: &DetailVm, theme: &Theme, top: usize, rows: usize, col: usize, width: usize) {
    let bottom = top + rows;
    let mut row = top;

    position_cursor(row, col);
    print!(
        "{}{}{}{}",
        Theme::fg(&theme.colors.header_fg),
        Theme::bold(),
        clip(&detail.title, width),
        Theme::reset()
    );
    row += 1;

    position_cursor(row, col);
    print!(
        "{}{} · {} · {}{}",
        Theme::fg(&theme.colors.text_dim),
        detail.released,
        detail.runtime,
        detail.genre,
        Theme::reset()
    );
    row += 1;

    position_cursor(row, col);
    print!(
        "{}★ {}{}",
        Theme::fg(&theme.colors.rating_fg),
        detail.imdb_rating,
        Theme::reset()
    );
    row += 2;

    for line in wrap_text(&detail.plot, width) {
        if row >= bottom.saturating_sub(4) {
            break;
        }
        position_cursor(row, col);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            line,
            Theme::reset()
        );
        row += 1;
    }
    row += 1;

    if row < bottom.saturating_sub(2) {
        position_cursor(row, col);
        print!(
            "{}Starring {}{}",
            Theme::fg(&theme.colors.text_dim),
            clip(&detail.actors, width.saturating_sub(9)),
            Theme::reset()
        );
        row += 1;
        position_cursor(row, col);
        print!(
            "{}Directed by {}{}",
            Theme::fg(&theme.colors.text_dim),
            clip(&detail.director, width.saturating_sub(12)),
            Theme::reset()
        );
        row += 2;
    }

    position_cursor(row.min(bottom), col);
    render_rating_line(detail, theme);
}

/// The interactive rating line at the bottom of the detail view.
fn render_rating_line(detail: &DetailVm, theme: &Theme) {
    if detail.already_watched {
        print!(
            "{}already on your watched list{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
        return;
    }

    if detail.rating_draft == 0 {
        print!(
            "{}rate with 1-9, 0 for a ten{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
        return;
    }

    let stars = "★".repeat(detail.rating_draft as usize);
    print!(
        "{}{} {}{}",
        Theme::fg(&theme.colors.rating_fg),
        stars,
        detail.rating_draft,
        Theme::reset()
    );

    if detail.can_add {
        print!(
            "  {}a: add to watched{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
    }
}
