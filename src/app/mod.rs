//! Application state, event handling, and the action protocol.
//!
//! The app layer is fully synchronous and side-effect free: events go into
//! [`handler::handle_event`], state mutates, and a list of [`Action`]s comes
//! back for the runtime shim in `main` to execute. All asynchronous work
//! (network fetches, terminal title changes) happens outside this layer.

pub mod actions;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
