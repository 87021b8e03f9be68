//! Canonical movie schema.
//!
//! The remote catalog speaks loosely typed JSON with inconsistent casing and
//! stringly-typed numbers. These types are the one internal representation
//! everything downstream of the service boundary works with; the mapping and
//! validation from the wire format lives in [`crate::omdb::wire`].

use serde::{Deserialize, Serialize};

/// One row of a search result.
///
/// Search results are replaced wholesale on every successful search; an empty
/// list is a valid, non-error outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog identifier (IMDb id, e.g. `tt1375666`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Release year as reported by the catalog (kept as text; ranges like
    /// `"2019–2021"` occur for series).
    pub year: String,
    /// Poster image URL, or the catalog's `N/A` placeholder.
    pub poster_url: String,
}

/// The full record for a single movie, fetched per selection.
///
/// Details are not cached across selections: reselecting the same id fetches
/// the record again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Runtime in whole minutes, extracted from the catalog's `"148 min"`
    /// representation.
    pub runtime_minutes: u32,
    /// Source rating on the 0–10 scale, parsed from the catalog's string.
    pub imdb_rating: f64,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

/// One entry of the session-lifetime watched list.
///
/// Created only through the add-to-watched action, after the user has set a
/// non-zero rating on a loaded detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: u32,
    /// Source rating (0–10) carried over from the detail record.
    pub imdb_rating: f64,
    /// User-assigned rating, 1–10.
    pub user_rating: u8,
}

impl WatchedEntry {
    /// Builds a watched entry from a loaded detail record and the rating the
    /// user picked for it.
    #[must_use]
    pub fn from_detail(detail: &MovieDetail, user_rating: u8) -> Self {
        Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            runtime_minutes: detail.runtime_minutes,
            imdb_rating: detail.imdb_rating,
            user_rating,
        }
    }
}
