//! Messages flowing from fetch tasks back to the event loop.

use crate::domain::{MovieDetail, MovieSummary, Result};

/// A settled fetch, tagged with the generation it was issued under.
///
/// The receiving side compares the generation against the current one for the
/// lineage and silently drops mismatches. A cancelled task sends nothing at
/// all.
#[derive(Debug)]
pub enum FetchUpdate {
    /// A search request settled, successfully or not.
    SearchSettled {
        generation: u64,
        outcome: Result<Vec<MovieSummary>>,
    },
    /// A detail request settled, successfully or not.
    DetailSettled {
        generation: u64,
        outcome: Result<MovieDetail>,
    },
}
