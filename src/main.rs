//! Terminal wrapper and entry point.
//!
//! This is the thin integration layer between the kinolog library and the
//! terminal: it owns the runtime, translates key presses into library
//! events, executes the actions the handler returns, and drives rendering.
//!
//! # Event Loop
//!
//! ```text
//! ┌──────────────┐  key press   ┌──────────────┐
//! │  crossterm   ├─────────────►│              │
//! │  EventStream │              │ handle_event ├──► actions ──► Fetcher /
//! └──────────────┘              │              │                terminal
//! ┌──────────────┐ FetchUpdate  │              │
//! │  Fetcher     ├─────────────►│              │
//! └──────────────┘              └──────┬───────┘
//!                                      │ render?
//!                                      ▼
//!                                  ui::render
//! ```
//!
//! # Keybindings
//!
//! While typing in the search bar:
//! - printable characters: edit the query
//! - `Enter`: move focus to the results
//! - `Esc`: stop typing (the query stays)
//!
//! Everywhere else:
//! - `j`/`k` or arrows: move the cursor
//! - `Enter`: open or close the detail view
//! - `/`: focus the search bar
//! - `Tab`: switch between results and watched panes
//! - `1`-`9`, `0`: rate the open movie (`0` means ten)
//! - `a`: add the rated movie to the watched list
//! - `x`: delete the watched entry under the cursor
//! - `q` or `Ctrl+C`: quit

use std::io::{self, Write};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use kinolog::app::modes::{InputMode, SearchFocus};
use kinolog::{handle_event, Action, AppState, Config, Event, FetchUpdate, Fetcher, OmdbClient};

const DEFAULT_TITLE: &str = "kinolog";

#[tokio::main]
async fn main() -> kinolog::Result<()> {
    let config = Config::from_env()?;
    kinolog::observability::init_tracing(&config);
    tracing::debug!(base_url = %config.base_url, "starting up");

    let mut state = kinolog::initialize(&config);

    let client = Arc::new(OmdbClient::new(&config.base_url, config.api_key.clone())?);
    let (updates_tx, mut updates_rx) = mpsc::unbounded_channel();
    let mut fetcher = Fetcher::new(client, updates_tx);

    setup_terminal()?;
    let outcome = run(&mut state, &mut fetcher, &mut updates_rx).await;
    fetcher.shutdown().await;
    restore_terminal()?;

    outcome
}

/// The main event loop. Returns when the user quits or the input stream
/// ends.
async fn run(
    state: &mut AppState,
    fetcher: &mut Fetcher,
    updates_rx: &mut mpsc::UnboundedReceiver<FetchUpdate>,
) -> kinolog::Result<()> {
    let mut terminal_events = EventStream::new();
    render(state)?;

    loop {
        let event = tokio::select! {
            term_event = terminal_events.next() => {
                match term_event {
                    Some(Ok(TermEvent::Key(key))) => match map_key_event(state, &key) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Ok(TermEvent::Resize(..))) => {
                        render(state)?;
                        continue;
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            update = updates_rx.recv() => {
                match update {
                    Some(update) => map_fetch_update(update),
                    None => return Ok(()),
                }
            }
        };

        let (should_render, actions) = handle_event(state, &event)?;
        let mut exit = false;
        for action in actions {
            exit |= execute_action(&action, fetcher)?;
        }
        if exit {
            return Ok(());
        }
        if should_render {
            render(state)?;
        }
    }
}

/// Maps a key press to a library event, depending on the current mode.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
        return Some(match key.code {
            KeyCode::Esc => Event::Escape,
            KeyCode::Enter => Event::FocusResults,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        });
    }

    Some(match key.code {
        KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Enter => Event::Select,
        KeyCode::Esc => Event::Escape,
        KeyCode::Tab => Event::SwitchPane,
        KeyCode::Char('/') => Event::EnterSearch,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Char('a') => Event::AddWatched,
        KeyCode::Char('x') => Event::DeleteWatched,
        KeyCode::Char('0') => Event::Rate(10),
        KeyCode::Char(c @ '1'..='9') => Event::Rate(c as u8 - b'0'),
        _ => return None,
    })
}

/// Collapses a fetch settlement into a library event, stringifying the
/// error for display.
fn map_fetch_update(update: FetchUpdate) -> Event {
    match update {
        FetchUpdate::SearchSettled {
            generation,
            outcome,
        } => Event::SearchSettled {
            generation,
            outcome: outcome.map_err(|e| e.to_string()),
        },
        FetchUpdate::DetailSettled {
            generation,
            outcome,
        } => Event::DetailSettled {
            generation,
            outcome: outcome.map_err(|e| e.to_string()),
        },
    }
}

/// Executes one action. Returns `true` when the application should exit.
fn execute_action(action: &Action, fetcher: &mut Fetcher) -> kinolog::Result<bool> {
    match action {
        Action::StartSearch { query, generation } => {
            fetcher.start_search(query, *generation);
        }
        Action::CancelSearch => {
            fetcher.cancel_search();
        }
        Action::StartDetail { id, generation } => {
            fetcher.start_detail(id, *generation);
        }
        Action::CancelDetail => {
            fetcher.cancel_detail();
        }
        Action::SetDisplayTitle(title) => {
            execute!(io::stdout(), SetTitle(title.as_str()))?;
        }
        Action::ResetDisplayTitle => {
            execute!(io::stdout(), SetTitle(DEFAULT_TITLE))?;
        }
        Action::CloseFocus => return Ok(true),
    }
    Ok(false)
}

/// Clears the screen and draws a full frame.
fn render(state: &AppState) -> kinolog::Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    let mut stdout = io::stdout();
    queue!(stdout, Clear(ClearType::All))?;
    stdout.flush()?;

    kinolog::ui::render(state, rows as usize, cols as usize);

    io::stdout().flush()?;
    Ok(())
}

fn setup_terminal() -> kinolog::Result<()> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        Hide,
        SetTitle(DEFAULT_TITLE)
    )?;
    Ok(())
}

fn restore_terminal() -> kinolog::Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
