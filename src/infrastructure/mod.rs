//! Host-environment plumbing.

pub mod paths;
