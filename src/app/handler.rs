//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch settlements, translating them into state changes and action
//! sequences. It is the only place application state is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the terminal or from fetch tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution by the runtime shim
//!
//! # Staleness
//!
//! Settlement events carry the generation they were issued under. A
//! settlement whose generation does not match the lineage's current counter
//! is dropped without touching state. Together with task cancellation this
//! guarantees the visible state always reflects the latest intent, no matter
//! in which order the network answers.

use crate::app::modes::{InputMode, PaneFocus, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{MovieDetail, MovieSummary, RequestState, WatchedEntry};

/// Events triggered by user input or settled fetches.
#[derive(Debug, Clone)]
pub enum Event {
    /// Moves the cursor down by one position (wraps to top).
    CursorDown,
    /// Moves the cursor up by one position (wraps to bottom).
    CursorUp,
    /// Enters search mode with typing focus.
    EnterSearch,
    /// Leaves typing focus for the results list.
    FocusResults,
    /// Toggles the cursor between the results and watched panes.
    SwitchPane,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Leaves typing focus, or closes the open detail view.
    Escape,
    /// Toggles the detail view for the result under the cursor.
    Select,
    /// Sets the rating draft for the open detail view, 1 through 10.
    Rate(u8),
    /// Moves the open detail record onto the watched list.
    AddWatched,
    /// Removes the watched entry under the cursor.
    DeleteWatched,
    /// Tears down the application.
    Quit,

    /// A search fetch settled.
    ///
    /// Errors arrive as display strings; the fetch layer has already
    /// collapsed transport, envelope, and parse failures into one message.
    SearchSettled {
        generation: u64,
        outcome: std::result::Result<Vec<MovieSummary>, String>,
    },

    /// A detail fetch settled.
    DetailSettled {
        generation: u64,
        outcome: std::result::Result<MovieDetail, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// A pair of (render needed, actions). The boolean is `false` for events
/// that changed nothing visible, such as a dropped stale settlement.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for fallible state
/// transitions without touching every call site.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::EnterSearch => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.pane_focus = PaneFocus::Results;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = if state.query.is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            state.pane_focus = PaneFocus::Results;
            Ok((true, vec![]))
        }
        Event::SwitchPane => {
            state.pane_focus = match state.pane_focus {
                PaneFocus::Results => PaneFocus::Watched,
                PaneFocus::Watched => PaneFocus::Results,
            };
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, reissue_search(state)))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, reissue_search(state)))
        }
        Event::Escape => {
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                // The query itself survives; only the focus changes.
                state.input_mode = if state.query.is_empty() {
                    InputMode::Normal
                } else {
                    InputMode::Search(SearchFocus::Navigating)
                };
                return Ok((true, vec![]));
            }
            if state.selection.current().is_some() {
                let actions = close_detail(state);
                return Ok((true, actions));
            }
            Ok((false, vec![]))
        }
        Event::Select => {
            let Some(movie) = state.selected_result() else {
                tracing::debug!("no result under cursor");
                return Ok((false, vec![]));
            };
            let id = movie.id.clone();

            state.detail_generation += 1;
            state.rating_draft = 0;

            if state.selection.select(&id) {
                tracing::debug!(movie_id = %id, "opening detail view");
                state.detail = RequestState::Loading;
                Ok((
                    true,
                    vec![Action::StartDetail {
                        id,
                        generation: state.detail_generation,
                    }],
                ))
            } else {
                tracing::debug!(movie_id = %id, "closing detail view");
                state.detail = RequestState::Idle;
                Ok((true, vec![Action::CancelDetail, Action::ResetDisplayTitle]))
            }
        }
        Event::Rate(rating) => {
            if state.selection.current().is_none() || state.detail.success().is_none() {
                return Ok((false, vec![]));
            }
            state.rating_draft = (*rating).min(10);
            Ok((true, vec![]))
        }
        Event::AddWatched => {
            let Some(detail) = state.detail.success() else {
                return Ok((false, vec![]));
            };
            if state.rating_draft == 0 {
                tracing::debug!("add refused, no rating picked");
                return Ok((false, vec![]));
            }

            let entry = WatchedEntry::from_detail(detail, state.rating_draft);
            state.watched.add(entry);
            state.clamp_watched_index();

            let mut actions = close_detail(state);
            actions.retain(|a| *a != Action::CancelDetail);
            Ok((true, actions))
        }
        Event::DeleteWatched => {
            if state.pane_focus != PaneFocus::Watched {
                return Ok((false, vec![]));
            }
            let Some(entry) = state.selected_watched() else {
                return Ok((false, vec![]));
            };
            let id = entry.id.clone();
            state.watched.remove_by_id(&id);
            state.clamp_watched_index();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::CloseFocus])),
        Event::SearchSettled {
            generation,
            outcome,
        } => {
            if *generation != state.search_generation {
                tracing::debug!(
                    settled = generation,
                    current = state.search_generation,
                    "dropping stale search settlement"
                );
                return Ok((false, vec![]));
            }
            match outcome {
                Ok(results) => {
                    tracing::debug!(count = results.len(), "search settled");
                    state.search = RequestState::Success(results.clone());
                    state.clamp_results_index();
                }
                Err(message) => {
                    tracing::debug!(error = %message, "search failed");
                    state.search = RequestState::Failure(message.clone());
                }
            }
            Ok((true, vec![]))
        }
        Event::DetailSettled {
            generation,
            outcome,
        } => {
            if *generation != state.detail_generation || state.selection.current().is_none() {
                tracing::debug!(
                    settled = generation,
                    current = state.detail_generation,
                    "dropping stale detail settlement"
                );
                return Ok((false, vec![]));
            }
            match outcome {
                Ok(detail) => {
                    let mut actions = vec![];
                    if !detail.title.is_empty() {
                        actions.push(Action::SetDisplayTitle(format!("Movie | {}", detail.title)));
                    }
                    state.detail = RequestState::Success(detail.clone());
                    Ok((true, actions))
                }
                Err(message) => {
                    tracing::debug!(error = %message, "detail fetch failed");
                    state.detail = RequestState::Failure(message.clone());
                    Ok((true, vec![]))
                }
            }
        }
    }
}

/// Re-evaluates the query after an edit and issues or suppresses a search.
///
/// Every edit bumps the search generation, which is what invalidates any
/// in-flight request even before the cancel reaches it. A query below the
/// gate renders as an ordinary empty result set and never touches the
/// network; an accepted query also closes any open detail view, since its
/// results are about to be replaced.
fn reissue_search(state: &mut AppState) -> Vec<Action> {
    state.search_generation += 1;
    state.results_index = 0;

    match state.gate.accept(&state.query) {
        Some(effective) => {
            state.search = RequestState::Loading;
            let mut actions = vec![Action::StartSearch {
                query: effective.to_string(),
                generation: state.search_generation,
            }];
            if state.selection.current().is_some() {
                actions.extend(close_detail(state));
            }
            actions
        }
        None => {
            state.search = RequestState::Success(vec![]);
            vec![Action::CancelSearch]
        }
    }
}

/// Closes the detail view and invalidates its lineage.
fn close_detail(state: &mut AppState) -> Vec<Action> {
    state.selection.clear();
    state.detail = RequestState::Idle;
    state.detail_generation += 1;
    state.rating_draft = 0;
    vec![Action::CancelDetail, Action::ResetDisplayTitle]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QueryGate;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new(QueryGate::default(), Theme::default())
    }

    fn type_query(state: &mut AppState, query: &str) -> Vec<Action> {
        handle_event(state, &Event::EnterSearch).unwrap();
        let mut last = vec![];
        for c in query.chars() {
            let (_, actions) = handle_event(state, &Event::Char(c)).unwrap();
            last = actions;
        }
        last
    }

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: "2010".to_string(),
            poster_url: "N/A".to_string(),
        }
    }

    fn detail(id: &str, title: &str) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: title.to_string(),
            year: "2010".to_string(),
            poster_url: "N/A".to_string(),
            runtime_minutes: 148,
            imdb_rating: 8.8,
            plot: String::new(),
            released: String::new(),
            actors: String::new(),
            director: String::new(),
            genre: String::new(),
        }
    }

    /// Drives the state to an open, loaded detail view for `id`.
    fn open_detail(state: &mut AppState, id: &str) {
        state.search = RequestState::Success(vec![summary(id, "Inception")]);
        handle_event(state, &Event::Select).unwrap();
        let generation = state.detail_generation;
        handle_event(
            state,
            &Event::DetailSettled {
                generation,
                outcome: Ok(detail(id, "Inception")),
            },
        )
        .unwrap();
    }

    #[test]
    fn short_query_never_searches() {
        let mut state = new_state();
        let actions = type_query(&mut state, "ab");
        assert_eq!(actions, vec![Action::CancelSearch]);
        assert_eq!(state.search, RequestState::Success(vec![]));
    }

    #[test]
    fn whitespace_only_query_is_gated() {
        let mut state = new_state();
        let actions = type_query(&mut state, "   ");
        assert_eq!(actions, vec![Action::CancelSearch]);
        assert_eq!(state.search, RequestState::Success(vec![]));
    }

    #[test]
    fn third_character_issues_a_trimmed_search() {
        let mut state = new_state();
        let actions = type_query(&mut state, " abc");
        assert!(state.search.is_loading());
        assert_eq!(
            actions,
            vec![Action::StartSearch {
                query: "abc".to_string(),
                generation: 4,
            }]
        );
    }

    #[test]
    fn every_edit_bumps_the_generation() {
        let mut state = new_state();
        type_query(&mut state, "abcd");
        assert_eq!(state.search_generation, 4);
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_generation, 5);
    }

    #[test]
    fn backspace_on_empty_query_changes_nothing() {
        let mut state = new_state();
        handle_event(&mut state, &Event::EnterSearch).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.search_generation, 0);
    }

    #[test]
    fn stale_search_settlement_is_ignored() {
        let mut state = new_state();
        type_query(&mut state, "incep");
        let stale_generation = state.search_generation;
        handle_event(&mut state, &Event::Char('t')).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::SearchSettled {
                generation: stale_generation,
                outcome: Ok(vec![summary("tt0000001", "wrong")]),
            },
        )
        .unwrap();

        assert!(!render);
        assert!(state.search.is_loading());
    }

    #[test]
    fn current_settlement_is_applied() {
        let mut state = new_state();
        type_query(&mut state, "inception");
        let generation = state.search_generation;

        handle_event(
            &mut state,
            &Event::SearchSettled {
                generation,
                outcome: Ok(vec![summary("tt1375666", "Inception")]),
            },
        )
        .unwrap();

        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn failure_clears_on_next_valid_query() {
        let mut state = new_state();
        type_query(&mut state, "xyz");
        let generation = state.search_generation;
        handle_event(
            &mut state,
            &Event::SearchSettled {
                generation,
                outcome: Err("movies not found".to_string()),
            },
        )
        .unwrap();
        assert_eq!(state.search.failure(), Some("movies not found"));

        handle_event(&mut state, &Event::Char('w')).unwrap();
        assert!(state.search.is_loading());
    }

    #[test]
    fn select_toggles_the_detail_view() {
        let mut state = new_state();
        state.search = RequestState::Success(vec![summary("tt1375666", "Inception")]);

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(
            actions,
            vec![Action::StartDetail {
                id: "tt1375666".to_string(),
                generation: 1,
            }]
        );
        assert!(state.detail.is_loading());

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(actions, vec![Action::CancelDetail, Action::ResetDisplayTitle]);
        assert_eq!(state.selection.current(), None);
        assert_eq!(state.detail, RequestState::Idle);
    }

    #[test]
    fn detail_success_sets_the_display_title() {
        let mut state = new_state();
        state.search = RequestState::Success(vec![summary("tt1375666", "Inception")]);
        handle_event(&mut state, &Event::Select).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::DetailSettled {
                generation: 1,
                outcome: Ok(detail("tt1375666", "Inception")),
            },
        )
        .unwrap();

        assert_eq!(
            actions,
            vec![Action::SetDisplayTitle("Movie | Inception".to_string())]
        );
    }

    #[test]
    fn detail_settlement_after_close_is_ignored() {
        let mut state = new_state();
        state.search = RequestState::Success(vec![summary("tt1375666", "Inception")]);
        handle_event(&mut state, &Event::Select).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::DetailSettled {
                generation: 1,
                outcome: Ok(detail("tt1375666", "Inception")),
            },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.detail, RequestState::Idle);
    }

    #[test]
    fn detail_failure_is_surfaced() {
        let mut state = new_state();
        state.search = RequestState::Success(vec![summary("tt1375666", "Inception")]);
        handle_event(&mut state, &Event::Select).unwrap();

        handle_event(
            &mut state,
            &Event::DetailSettled {
                generation: 1,
                outcome: Err("network error: timed out".to_string()),
            },
        )
        .unwrap();

        assert_eq!(state.detail.failure(), Some("network error: timed out"));
    }

    #[test]
    fn rating_requires_a_loaded_detail() {
        let mut state = new_state();
        state.search = RequestState::Success(vec![summary("tt1375666", "Inception")]);
        handle_event(&mut state, &Event::Select).unwrap();

        let (render, _) = handle_event(&mut state, &Event::Rate(8)).unwrap();
        assert!(!render);
        assert_eq!(state.rating_draft, 0);
    }

    #[test]
    fn add_watched_requires_a_rating() {
        let mut state = new_state();
        open_detail(&mut state, "tt1375666");

        let (render, _) = handle_event(&mut state, &Event::AddWatched).unwrap();
        assert!(!render);
        assert!(state.watched.is_empty());
    }

    #[test]
    fn add_watched_moves_the_detail_onto_the_list() {
        let mut state = new_state();
        open_detail(&mut state, "tt1375666");

        handle_event(&mut state, &Event::Rate(9)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::AddWatched).unwrap();

        assert_eq!(actions, vec![Action::ResetDisplayTitle]);
        assert_eq!(state.watched.len(), 1);
        assert_eq!(state.watched.entries()[0].user_rating, 9);
        assert_eq!(state.selection.current(), None);
    }

    #[test]
    fn new_search_closes_the_open_detail() {
        let mut state = new_state();
        open_detail(&mut state, "tt1375666");
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.query = "matri".to_string();

        let (_, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();

        assert!(actions.contains(&Action::CancelDetail));
        assert_eq!(state.selection.current(), None);
    }

    #[test]
    fn delete_watched_needs_the_watched_pane() {
        let mut state = new_state();
        open_detail(&mut state, "tt1375666");
        handle_event(&mut state, &Event::Rate(9)).unwrap();
        handle_event(&mut state, &Event::AddWatched).unwrap();

        let (render, _) = handle_event(&mut state, &Event::DeleteWatched).unwrap();
        assert!(!render);
        assert_eq!(state.watched.len(), 1);

        handle_event(&mut state, &Event::SwitchPane).unwrap();
        handle_event(&mut state, &Event::DeleteWatched).unwrap();
        assert!(state.watched.is_empty());
    }

    #[test]
    fn escape_keeps_the_query_when_leaving_typing() {
        let mut state = new_state();
        type_query(&mut state, "inception");
        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.query, "inception");
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
    }
}
