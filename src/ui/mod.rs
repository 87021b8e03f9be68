//! Terminal UI rendering.
//!
//! Rendering is a pure function of the view model: `AppState` computes a
//! [`viewmodel::UiViewModel`] snapshot, and the renderer walks it printing
//! ANSI-styled text at absolute cursor positions. No component reads
//! application state directly.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
