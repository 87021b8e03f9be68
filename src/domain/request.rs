//! Request lifecycle reduction target.
//!
//! Both fetch lineages (search and detail) reduce their asynchronous outcome
//! into this single tagged state. Exactly one tag holds at any instant; a new
//! request for the same lineage replaces the state wholesale rather than
//! patching it.

/// The reduced state of an asynchronous request lineage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing has been requested for this lineage yet.
    Idle,
    /// A request is in flight; the view renders a loading indicator.
    Loading,
    /// The most recent request settled successfully.
    Success(T),
    /// The most recent request settled with an error; the message is
    /// rendered verbatim in the error banner.
    Failure(String),
}

impl<T> RequestState<T> {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the error message when the lineage is in the failure state.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the settled value when the lineage is in the success state.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}
