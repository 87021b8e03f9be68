//! kinolog: a terminal movie catalog browser.
//!
//! Search the OMDb catalog as you type, open a detail view per movie, rate
//! what you have seen, and keep a session-lifetime watched list with
//! aggregate statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   Event    ┌──────────────┐   Action   ┌─────────────┐
//! │ terminal /  ├───────────►│ app::handler ├───────────►│ runtime shim│
//! │ fetch tasks │            │  (pure)      │            │ (main)      │
//! └─────────────┘            └──────┬───────┘            └──────┬──────┘
//!                                   │ mutates                   │ drives
//!                            ┌──────▼───────┐            ┌──────▼──────┐
//!                            │ app::state   │            │ fetch::     │
//!                            │  AppState    │            │  Fetcher    │
//!                            └──────┬───────┘            └──────┬──────┘
//!                                   │ computes                  │ calls
//!                            ┌──────▼───────┐            ┌──────▼──────┐
//!                            │ ui::viewmodel│            │ omdb::client│
//!                            │  + renderer  │            │  (HTTP)     │
//!                            └──────────────┘            └─────────────┘
//! ```
//!
//! The handler is synchronous and side-effect free; everything asynchronous
//! lives behind the [`fetch::Fetcher`], which reports back through
//! [`fetch::FetchUpdate`] messages tagged with generation counters so stale
//! settlements can never clobber newer state.

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod omdb;
pub mod ui;
pub mod watched;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{KinologError, QueryGate, Result};
pub use fetch::{FetchUpdate, Fetcher};
pub use omdb::{CatalogClient, OmdbClient};

use crate::ui::theme::Theme;

/// Runtime configuration, resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OMDb API key. The only setting without a default.
    pub api_key: String,
    /// Catalog base URL.
    pub base_url: String,
    /// Minimum effective query length before a search is issued.
    pub min_query_len: usize,
    /// Built-in theme name.
    pub theme_name: Option<String>,
    /// Path to a custom theme TOML file. Takes precedence over
    /// `theme_name`.
    pub theme_file: Option<String>,
    /// Trace filter directive (e.g. `"debug"` or `"kinolog::fetch=trace"`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.omdbapi.com/".to_string(),
            min_query_len: 3,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from environment variables.
    ///
    /// | Variable | Meaning | Default |
    /// |---|---|---|
    /// | `OMDB_API_KEY` | catalog API key | required |
    /// | `KINOLOG_BASE_URL` | catalog base URL | `https://www.omdbapi.com/` |
    /// | `KINOLOG_MIN_QUERY_LEN` | query length gate | `3` |
    /// | `KINOLOG_THEME` | built-in theme name | `catppuccin-mocha` |
    /// | `KINOLOG_THEME_FILE` | custom theme TOML path | unset |
    /// | `KINOLOG_TRACE_LEVEL` | trace filter directive | `info` |
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `OMDB_API_KEY` is missing or
    /// `KINOLOG_MIN_QUERY_LEN` is not a number.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OMDB_API_KEY")
            .map_err(|_| KinologError::Config("OMDB_API_KEY is not set".to_string()))?;

        let defaults = Self::default();

        let base_url =
            std::env::var("KINOLOG_BASE_URL").unwrap_or(defaults.base_url);

        let min_query_len = match std::env::var("KINOLOG_MIN_QUERY_LEN") {
            Ok(raw) => raw.parse().map_err(|_| {
                KinologError::Config(format!("KINOLOG_MIN_QUERY_LEN is not a number: {raw:?}"))
            })?,
            Err(_) => defaults.min_query_len,
        };

        Ok(Self {
            api_key,
            base_url,
            min_query_len,
            theme_name: std::env::var("KINOLOG_THEME").ok(),
            theme_file: std::env::var("KINOLOG_THEME_FILE").ok(),
            trace_level: std::env::var("KINOLOG_TRACE_LEVEL").ok(),
        })
    }
}

/// Builds the initial application state from a configuration.
///
/// Theme resolution order: `theme_file`, then `theme_name`, then the
/// default. A theme that fails to load falls back to the default with a
/// warning rather than aborting startup.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let theme = resolve_theme(config);
    let gate = QueryGate::new(config.min_query_len);
    AppState::new(gate, theme)
}

fn resolve_theme(config: &Config) -> Theme {
    if let Some(path) = &config.theme_file {
        match Theme::from_file(path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "custom theme failed to load");
            }
        }
    }

    if let Some(name) = &config.theme_name {
        if let Some(theme) = Theme::from_name(name) {
            return theme;
        }
        tracing::warn!(theme = %name, "unknown theme name, using default");
    }

    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_applies_the_configured_gate() {
        let config = Config {
            min_query_len: 5,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.gate, QueryGate::new(5));
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
