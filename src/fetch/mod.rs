//! Cancellable fetch orchestration.
//!
//! Network work runs on spawned tasks so the input loop never blocks. Each
//! lineage (search, detail) keeps at most one task in flight; starting a new
//! request cancels the previous one first. Settlements travel back to the
//! event loop as [`FetchUpdate`] messages carrying the generation they were
//! issued under, which is how stale results get dropped even when
//! cancellation loses the race.

pub mod fetcher;
pub mod handle;
pub mod messages;

pub use fetcher::Fetcher;
pub use handle::FetchHandle;
pub use messages::FetchUpdate;
