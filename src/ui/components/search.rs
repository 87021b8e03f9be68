//! Search bar component.

use crate::ui::helpers::{clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the query line, with a block cursor while typing.
pub fn render_search_bar(search: &SearchBarInfo, theme: &Theme, width: usize) {
    position_cursor(3, 1);

    let border_color = if search.typing {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    print!("{} / {}", Theme::fg(border_color), Theme::reset());

    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_normal),
        clip(&search.query, width.saturating_sub(5)),
        Theme::reset()
    );

    if search.typing {
        print!(
            "{}{}█{}",
            Theme::fg(&theme.colors.search_bar_border),
            Theme::bold(),
            Theme::reset()
        );
    } else if search.query.is_empty() {
        print!(
            "{}{}search the catalog...{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::dim(),
            Theme::reset()
        );
    }
}
