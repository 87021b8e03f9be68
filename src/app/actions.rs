//! Side-effect requests emitted by the event handler.

/// An effect for the runtime shim to execute after an event is handled.
///
/// The handler never performs effects itself; it only describes them. That
/// keeps every state transition testable without a runtime or a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a catalog search for `query`, tagged with `generation`.
    /// Implies cancellation of any search already in flight.
    StartSearch { query: String, generation: u64 },
    /// Cancel the in-flight search without starting a new one.
    CancelSearch,
    /// Start a detail fetch for `id`, tagged with `generation`.
    /// Implies cancellation of any detail fetch already in flight.
    StartDetail { id: String, generation: u64 },
    /// Cancel the in-flight detail fetch without starting a new one.
    CancelDetail,
    /// Set the terminal window title.
    SetDisplayTitle(String),
    /// Restore the default terminal window title.
    ResetDisplayTitle,
    /// Tear down and exit the application.
    CloseFocus,
}
