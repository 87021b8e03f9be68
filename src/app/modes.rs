//! Input and focus modes.

/// Controls how keystrokes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys act as commands (navigate, select, rate, quit).
    Normal,
    /// The search bar is active.
    Search(SearchFocus),
}

/// Which part of the search flow owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters go into the query.
    Typing,
    /// The query is frozen and navigation keys move through results.
    Navigating,
}

/// Which pane the cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    /// The search results list on the left.
    Results,
    /// The watched list on the right.
    Watched,
}
