//! OMDb catalog integration.
//!
//! The catalog speaks a quirky JSON dialect: PascalCase keys, numbers encoded
//! as strings, and errors reported inside a `200 OK` body through a
//! `Response: "False"` envelope. This module keeps all of that at the
//! boundary; the rest of the crate only ever sees [`crate::domain`] types.

pub mod client;
pub mod wire;

pub use client::{CatalogClient, OmdbClient};
