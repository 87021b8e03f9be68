//! Error types for kinolog.
//!
//! This module defines the centralized error type [`KinologError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Cancellation is deliberately absent from this taxonomy: a cancelled fetch
//! never delivers a settlement at all (see [`crate::fetch`]), so there is no
//! user-visible error to represent.

use thiserror::Error;

/// The main error type for kinolog operations.
///
/// This enum consolidates all error conditions that can occur while talking
/// to the remote catalog or setting the application up. The variants that can
/// reach the error banner keep their `Display` output presentable: the view
/// renders these messages verbatim.
#[derive(Debug, Error)]
pub enum KinologError {
    /// The catalog could not be reached, or answered with a non-success
    /// HTTP status.
    ///
    /// Deliberately generic so the banner does not leak transport internals
    /// beyond a short reason.
    #[error("network error: {0}")]
    Transport(String),

    /// The catalog answered, but reported that nothing matched.
    ///
    /// Carries the exact message the view should display. For searches this
    /// is always the literal `movies not found`, matching the envelope-false
    /// policy of the search flow.
    #[error("{0}")]
    NotFound(String),

    /// A catalog record could not be mapped into the canonical schema.
    ///
    /// Raised by the wire-to-domain validation step when a record is missing
    /// required fields or carries unparseable values (for example a runtime
    /// of `"N/A"`). Malformed records are rejected at the boundary rather
    /// than propagated inward.
    #[error("malformed catalog record: {0}")]
    Parse(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values (such as the API key or the
    /// catalog base URL) are missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for kinolog operations.
///
/// This is a type alias for `std::result::Result<T, KinologError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, KinologError>;
