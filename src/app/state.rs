//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the UI renders:
//! the query, the reduced state of both fetch lineages, the selection, the
//! watched list, and cursor positions. It is mutated only by the event
//! handler; view models are computed on demand from a state snapshot plus the
//! terminal dimensions.
//!
//! # Generations
//!
//! Each fetch lineage carries a monotonically increasing generation counter.
//! The handler bumps the counter whenever it issues or invalidates a request
//! and stamps the outgoing request with it; a settlement whose stamp no
//! longer matches is stale and gets dropped. Cancellation usually prevents
//! stale settlements from arriving at all, but the counter closes the race
//! where a task settles before the cancel lands.

use crate::app::modes::{InputMode, PaneFocus, SearchFocus};
use crate::app::selection::SelectionState;
use crate::domain::{MovieDetail, MovieSummary, QueryGate, RequestState, WatchedEntry};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailVm, FooterInfo, HeaderInfo, ResultRow, ResultsPane, SearchBarInfo, SidePane, SummaryVm,
    UiViewModel, WatchedRow,
};
use crate::watched::WatchedList;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The raw query as typed, including whitespace the gate will strip.
    pub query: String,

    /// Minimum-length rule applied before any search is issued.
    pub gate: QueryGate,

    /// Reduced state of the search lineage. `Success` holds the full result
    /// list; it is replaced wholesale on every settlement.
    pub search: RequestState<Vec<MovieSummary>>,

    /// Generation stamp of the most recent search intent.
    pub search_generation: u64,

    /// Reduced state of the detail lineage for the current selection.
    pub detail: RequestState<MovieDetail>,

    /// Generation stamp of the most recent detail intent.
    pub detail_generation: u64,

    /// Which movie, if any, the detail pane is showing.
    pub selection: SelectionState,

    /// The rating the user has picked for the selected movie, 0 meaning
    /// unrated. Reset whenever the selection changes.
    pub rating_draft: u8,

    /// Session-lifetime watched list.
    pub watched: WatchedList,

    /// Cursor position within the search results.
    pub results_index: usize,

    /// Cursor position within the watched list.
    pub watched_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Which pane navigation keys act on.
    pub pane_focus: PaneFocus,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh state with an empty query and nothing in flight.
    #[must_use]
    pub fn new(gate: QueryGate, theme: Theme) -> Self {
        Self {
            query: String::new(),
            gate,
            search: RequestState::Idle,
            search_generation: 0,
            detail: RequestState::Idle,
            detail_generation: 0,
            selection: SelectionState::default(),
            rating_draft: 0,
            watched: WatchedList::new(),
            results_index: 0,
            watched_index: 0,
            input_mode: InputMode::Normal,
            pane_focus: PaneFocus::Results,
            theme,
        }
    }

    /// The current search results, or an empty slice outside the success
    /// state.
    #[must_use]
    pub fn results(&self) -> &[MovieSummary] {
        self.search.success().map_or(&[], Vec::as_slice)
    }

    /// The result row under the cursor, if any.
    #[must_use]
    pub fn selected_result(&self) -> Option<&MovieSummary> {
        self.results().get(self.results_index)
    }

    /// The watched entry under the cursor, if any.
    #[must_use]
    pub fn selected_watched(&self) -> Option<&WatchedEntry> {
        self.watched.entries().get(self.watched_index)
    }

    /// Moves the cursor down in the focused pane, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        match self.pane_focus {
            PaneFocus::Results => {
                let len = self.results().len();
                if len > 0 {
                    self.results_index = (self.results_index + 1) % len;
                }
            }
            PaneFocus::Watched => {
                let len = self.watched.len();
                if len > 0 {
                    self.watched_index = (self.watched_index + 1) % len;
                }
            }
        }
    }

    /// Moves the cursor up in the focused pane, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        match self.pane_focus {
            PaneFocus::Results => {
                let len = self.results().len();
                if len > 0 {
                    self.results_index = if self.results_index == 0 {
                        len - 1
                    } else {
                        self.results_index - 1
                    };
                }
            }
            PaneFocus::Watched => {
                let len = self.watched.len();
                if len > 0 {
                    self.watched_index = if self.watched_index == 0 {
                        len - 1
                    } else {
                        self.watched_index - 1
                    };
                }
            }
        }
    }

    /// Clamps the results cursor after the result list changed.
    pub fn clamp_results_index(&mut self) {
        let len = self.results().len();
        self.results_index = if len == 0 {
            0
        } else {
            self.results_index.min(len - 1)
        };
    }

    /// Clamps the watched cursor after the watched list changed.
    pub fn clamp_watched_index(&mut self) {
        let len = self.watched.len();
        self.watched_index = if len == 0 {
            0
        } else {
            self.watched_index.min(len - 1)
        };
    }

    /// Computes a renderable view model from the current state and terminal
    /// dimensions.
    ///
    /// The results pane renders exactly one of loading, error, or list; an
    /// error banner suppresses the previous list entirely. The side pane
    /// shows the detail view while a selection exists and the watched
    /// summary otherwise.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        UiViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                typing: matches!(self.input_mode, InputMode::Search(SearchFocus::Typing)),
            },
            results: self.compute_results_pane(rows, cols),
            side: self.compute_side_pane(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " kinolog  ({} found / {} watched) ",
                self.results().len(),
                self.watched.len()
            ),
        }
    }

    fn compute_results_pane(&self, rows: usize, cols: usize) -> ResultsPane {
        match &self.search {
            RequestState::Idle => ResultsPane::Empty {
                message: "Press / and start typing to search".to_string(),
            },
            RequestState::Loading => ResultsPane::Loading,
            RequestState::Failure(message) => ResultsPane::Error {
                message: message.clone(),
            },
            RequestState::Success(results) if results.is_empty() => ResultsPane::Empty {
                message: "No results".to_string(),
            },
            RequestState::Success(results) => {
                let available = Self::available_rows(rows);
                let (start, end) = Self::visible_window(results.len(), self.results_index, available);

                let items = results[start..end]
                    .iter()
                    .enumerate()
                    .map(|(relative, movie)| {
                        let absolute = start + relative;
                        ResultRow {
                            title: Self::truncate(&movie.title, cols / 2),
                            year: movie.year.clone(),
                            is_cursor: absolute == self.results_index
                                && self.pane_focus == PaneFocus::Results,
                            is_open: self.selection.current() == Some(movie.id.as_str()),
                        }
                    })
                    .collect();

                ResultsPane::List {
                    items,
                    cursor: self.results_index.saturating_sub(start),
                }
            }
        }
    }

    fn compute_side_pane(&self) -> SidePane {
        if self.selection.current().is_some() {
            return match &self.detail {
                RequestState::Success(detail) => SidePane::Detail(Box::new(self.detail_vm(detail))),
                RequestState::Failure(message) => SidePane::DetailError {
                    message: message.clone(),
                },
                RequestState::Idle | RequestState::Loading => SidePane::DetailLoading,
            };
        }

        let summary = if self.watched.is_empty() {
            None
        } else {
            let s = self.watched.summary();
            Some(SummaryVm {
                count: s.count,
                mean_imdb_rating: format!("{:.2}", s.mean_imdb_rating),
                mean_user_rating: format!("{:.2}", s.mean_user_rating),
                mean_runtime: format!("{:.0} min", s.mean_runtime),
            })
        };

        let items = self
            .watched
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| WatchedRow {
                title: entry.title.clone(),
                imdb_rating: format!("{:.1}", entry.imdb_rating),
                user_rating: entry.user_rating.to_string(),
                runtime: format!("{} min", entry.runtime_minutes),
                is_cursor: i == self.watched_index && self.pane_focus == PaneFocus::Watched,
            })
            .collect();

        SidePane::Watched { summary, items }
    }

    fn detail_vm(&self, detail: &MovieDetail) -> DetailVm {
        let already_watched = self
            .watched
            .entries()
            .iter()
            .any(|entry| entry.id == detail.id);

        DetailVm {
            title: detail.title.clone(),
            year: detail.year.clone(),
            released: detail.released.clone(),
            runtime: format!("{} min", detail.runtime_minutes),
            genre: detail.genre.clone(),
            imdb_rating: format!("{:.1} IMDb rating", detail.imdb_rating),
            plot: detail.plot.clone(),
            actors: detail.actors.clone(),
            director: detail.director.clone(),
            rating_draft: self.rating_draft,
            can_add: self.rating_draft > 0,
            already_watched,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.pane_focus) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: stop typing  Enter: to results  Type to search".to_string()
            }
            (InputMode::Search(SearchFocus::Navigating), _) | (InputMode::Normal, PaneFocus::Results) => {
                "j/k: navigate  Enter: open/close  /: search  Tab: watched  q: quit".to_string()
            }
            (InputMode::Normal, PaneFocus::Watched) => {
                "j/k: navigate  x: delete  Tab: results  /: search  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }

    /// Rows left for the result list after header, search bar, and footer.
    const fn available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(7)
    }

    /// Centers a window of `available` rows around the cursor.
    fn visible_window(len: usize, cursor: usize, available: usize) -> (usize, usize) {
        if available == 0 || len == 0 {
            return (0, 0);
        }
        let mut start = cursor.saturating_sub(available / 2);
        let end = (start + available).min(len);
        if end - start < available && len >= available {
            start = end.saturating_sub(available);
        }
        (start, end)
    }

    fn truncate(text: &str, max: usize) -> String {
        if max >= 3 && text.chars().count() > max {
            let kept: String = text.chars().take(max - 3).collect();
            format!("{kept}...")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("movie-{id}"),
            year: "2010".to_string(),
            poster_url: "N/A".to_string(),
        }
    }

    fn state_with_results(n: usize) -> AppState {
        let mut state = AppState::new(QueryGate::default(), Theme::default());
        let results = (0..n).map(|i| summary(&format!("tt{i:07}"))).collect();
        state.search = RequestState::Success(results);
        state
    }

    #[test]
    fn cursor_wraps_in_results_pane() {
        let mut state = state_with_results(3);
        state.move_cursor_up();
        assert_eq!(state.results_index, 2);
        state.move_cursor_down();
        assert_eq!(state.results_index, 0);
    }

    #[test]
    fn cursor_is_a_noop_without_results() {
        let mut state = AppState::new(QueryGate::default(), Theme::default());
        state.move_cursor_down();
        state.move_cursor_up();
        assert_eq!(state.results_index, 0);
    }

    #[test]
    fn clamp_pulls_cursor_back_into_bounds() {
        let mut state = state_with_results(5);
        state.results_index = 4;
        state.search = RequestState::Success(vec![summary("tt0000001")]);
        state.clamp_results_index();
        assert_eq!(state.results_index, 0);
    }

    #[test]
    fn window_centers_on_cursor() {
        assert_eq!(AppState::visible_window(100, 50, 10), (45, 55));
        assert_eq!(AppState::visible_window(100, 0, 10), (0, 10));
        assert_eq!(AppState::visible_window(100, 99, 10), (90, 100));
        assert_eq!(AppState::visible_window(5, 2, 10), (0, 5));
    }

    #[test]
    fn error_banner_suppresses_result_list() {
        let mut state = state_with_results(3);
        state.search = RequestState::Failure("movies not found".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.results, ResultsPane::Error { .. }));
    }
}
