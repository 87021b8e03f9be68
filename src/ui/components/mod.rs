//! Individual UI component renderers.
//!
//! Each component renders one region of the screen from its slice of the
//! view model. Components never read application state directly.

pub mod detail;
pub mod footer;
pub mod header;
pub mod results;
pub mod search;
pub mod watched;

pub use detail::render_side;
pub use footer::render_footer;
pub use header::{render_header, render_too_small};
pub use results::render_results;
pub use search::render_search_bar;
