//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data:
//! numbers are already formatted, lists already windowed, cursor positions
//! already resolved.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Search bar content and focus.
    pub search_bar: SearchBarInfo,

    /// The left pane: search results or their loading/error/empty stand-in.
    pub results: ResultsPane,

    /// The right pane: detail view or watched summary.
    pub side: SidePane,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
    /// Whether keystrokes currently go into the query (renders a cursor).
    pub typing: bool,
}

/// Renderable state of the results pane.
///
/// Exactly one variant per frame; an error suppresses the previous list.
#[derive(Debug, Clone)]
pub enum ResultsPane {
    /// A search is in flight.
    Loading,
    /// The last search failed; the message renders as a banner.
    Error { message: String },
    /// Nothing to list, with an explanatory message.
    Empty { message: String },
    /// A windowed slice of the result list.
    List {
        items: Vec<ResultRow>,
        /// Cursor position relative to the visible window.
        cursor: usize,
    },
}

/// One row of the results list.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub title: String,
    pub year: String,
    /// Whether the navigation cursor sits on this row.
    pub is_cursor: bool,
    /// Whether this movie's detail view is open.
    pub is_open: bool,
}

/// Renderable state of the side pane.
#[derive(Debug, Clone)]
pub enum SidePane {
    /// A detail fetch is in flight.
    DetailLoading,
    /// The detail fetch failed.
    DetailError { message: String },
    /// A loaded detail record.
    Detail(Box<DetailVm>),
    /// No selection; the watched summary and list show instead.
    Watched {
        /// `None` while the list is empty.
        summary: Option<SummaryVm>,
        items: Vec<WatchedRow>,
    },
}

/// Display-ready detail record.
#[derive(Debug, Clone)]
pub struct DetailVm {
    pub title: String,
    pub year: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub imdb_rating: String,
    pub plot: String,
    pub actors: String,
    pub director: String,
    /// The rating the user has picked so far, 0 meaning none.
    pub rating_draft: u8,
    /// Whether the add-to-watched action is available.
    pub can_add: bool,
    /// Whether this movie already appears on the watched list.
    pub already_watched: bool,
}

/// Display-ready watched list statistics.
#[derive(Debug, Clone)]
pub struct SummaryVm {
    pub count: usize,
    pub mean_imdb_rating: String,
    pub mean_user_rating: String,
    pub mean_runtime: String,
}

/// One row of the watched list.
#[derive(Debug, Clone)]
pub struct WatchedRow {
    pub title: String,
    pub imdb_rating: String,
    pub user_rating: String,
    pub runtime: String,
    pub is_cursor: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
