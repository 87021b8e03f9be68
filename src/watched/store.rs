//! Watched list storage and aggregate statistics.
//!
//! The store itself enforces no uniqueness: adding an id that is already
//! present creates a second entry and skews the means. That mirrors the
//! product behavior as shipped; callers that want a guard have to apply one
//! themselves.

use crate::domain::WatchedEntry;

/// Ordered collection of watched entries for the current session.
///
/// Entries are kept in insertion order. Removal uses filter semantics: every
/// entry with the given id is dropped, not just the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
}

/// Aggregate statistics over the watched list.
///
/// The means over an empty list are `NaN` rather than an error; the view is
/// responsible for rendering a placeholder in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub mean_imdb_rating: f64,
    pub mean_user_rating: f64,
    pub mean_runtime: f64,
}

impl WatchedList {
    /// Creates an empty watched list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the end of the list.
    pub fn add(&mut self, entry: WatchedEntry) {
        tracing::debug!(movie_id = %entry.id, title = %entry.title, "adding watched entry");
        self.entries.push(entry);
    }

    /// Removes every entry whose id matches.
    pub fn remove_by_id(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        tracing::debug!(
            movie_id = %id,
            removed = before - self.entries.len(),
            "removed watched entries"
        );
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    /// Number of entries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derives the aggregate statistics for the current entries.
    ///
    /// Means are computed with a running-mean reduction
    /// (`mean += (x - mean) / n`) instead of sum-then-divide, which stays
    /// stable for arbitrarily long sessions.
    #[must_use]
    pub fn summary(&self) -> WatchedSummary {
        if self.entries.is_empty() {
            return WatchedSummary {
                count: 0,
                mean_imdb_rating: f64::NAN,
                mean_user_rating: f64::NAN,
                mean_runtime: f64::NAN,
            };
        }

        let mut mean_imdb = 0.0_f64;
        let mut mean_user = 0.0_f64;
        let mut mean_runtime = 0.0_f64;

        for (i, entry) in self.entries.iter().enumerate() {
            let n = (i + 1) as f64;
            mean_imdb += (entry.imdb_rating - mean_imdb) / n;
            mean_user += (f64::from(entry.user_rating) - mean_user) / n;
            mean_runtime += (f64::from(entry.runtime_minutes) - mean_runtime) / n;
        }

        WatchedSummary {
            count: self.entries.len(),
            mean_imdb_rating: mean_imdb,
            mean_user_rating: mean_user,
            mean_runtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, imdb: f64, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            id: id.to_string(),
            title: format!("movie-{id}"),
            year: "2010".to_string(),
            poster_url: "N/A".to_string(),
            runtime_minutes: runtime,
            imdb_rating: imdb,
            user_rating: user,
        }
    }

    #[test]
    fn add_then_remove_restores_list() {
        let mut list = WatchedList::new();
        list.add(entry("tt0088763", 8.5, 9, 116));
        let snapshot = list.clone();

        list.add(entry("tt1375666", 8.8, 10, 148));
        list.remove_by_id("tt1375666");

        assert_eq!(list, snapshot);
    }

    #[test]
    fn remove_uses_filter_semantics() {
        let mut list = WatchedList::new();
        list.add(entry("tt1375666", 8.8, 10, 148));
        list.add(entry("tt0088763", 8.5, 9, 116));
        list.add(entry("tt1375666", 8.8, 7, 148));

        list.remove_by_id("tt1375666");

        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].id, "tt0088763");
    }

    #[test]
    fn summary_of_known_entries() {
        let mut list = WatchedList::new();
        list.add(entry("tt1375666", 8.8, 10, 148));
        list.add(entry("tt0088763", 8.5, 9, 116));

        let summary = list.summary();
        assert_eq!(summary.count, 2);
        assert!((summary.mean_imdb_rating - 8.65).abs() < 1e-9);
        assert!((summary.mean_user_rating - 9.5).abs() < 1e-9);
        assert!((summary.mean_runtime - 132.0).abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_list_is_nan() {
        let summary = WatchedList::new().summary();
        assert_eq!(summary.count, 0);
        assert!(summary.mean_imdb_rating.is_nan());
        assert!(summary.mean_user_rating.is_nan());
        assert!(summary.mean_runtime.is_nan());
    }

    #[test]
    fn duplicate_ids_are_not_deduplicated() {
        let mut list = WatchedList::new();
        list.add(entry("tt1375666", 8.8, 10, 148));
        list.add(entry("tt1375666", 8.8, 2, 148));

        assert_eq!(list.len(), 2);
        let summary = list.summary();
        assert!((summary.mean_user_rating - 6.0).abs() < 1e-9);
    }
}
