//! Shared rendering utilities.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Draws a horizontal rule of `width` cells at the given position.
pub fn draw_rule(row: usize, col: usize, width: usize, theme: &Theme) {
    position_cursor(row, col);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(width),
        Theme::reset()
    );
}

/// Clips a string to at most `max` characters, appending `...` when it had
/// to cut.
///
/// Operates on characters, not bytes, so multi-byte titles clip cleanly.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Wraps text into lines of at most `width` characters, breaking on spaces.
///
/// Words longer than the width end up on their own overlong line rather than
/// being split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_leaves_short_text_alone() {
        assert_eq!(clip("Inception", 20), "Inception");
    }

    #[test]
    fn clip_cuts_on_character_boundaries() {
        assert_eq!(clip("The Shawshank Redemption", 10), "The Sha...");
        assert_eq!(clip("日本語のタイトル", 5), "日本...");
    }

    #[test]
    fn wrap_breaks_on_spaces() {
        let lines = wrap_text("a thief who steals corporate secrets", 12);
        assert_eq!(lines, vec!["a thief who", "steals", "corporate", "secrets"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap_text("supercalifragilistic plot", 5);
        assert_eq!(lines[0], "supercalifragilistic");
    }
}
