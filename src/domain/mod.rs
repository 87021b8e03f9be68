//! Domain layer for kinolog.
//!
//! This module contains the core domain types and business rules for the
//! application, independent of the terminal, the HTTP transport, or any other
//! infrastructure concern. It follows domain-driven design principles by
//! keeping the canonical movie schema and the request-reduction vocabulary
//! isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Canonical movie schema (summaries, details, watched entries)
//! - [`query`]: Search query gating rules
//! - [`request`]: The `RequestState` reduction target for async fetches

pub mod error;
pub mod movie;
pub mod query;
pub mod request;

pub use error::{KinologError, Result};
pub use movie::{MovieDetail, MovieSummary, WatchedEntry};
pub use query::QueryGate;
pub use request::RequestState;
