//! In-memory watched list.
//!
//! The watched list is the only local state in the application and lives for
//! the duration of the process; there is no persistence. The store keeps
//! insertion order (relevant for display) and derives aggregate statistics on
//! demand.

pub mod store;

pub use store::{WatchedList, WatchedSummary};
