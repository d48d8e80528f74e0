//! Terminal UI components.
//!
//! This module contains all UI-related code:
//! - [`render`]: Full-grid rendering of the buffer and cursor
//! - [`style`]: Fixed grid styles per theme

pub mod style;

mod render;
mod status;

pub use render::render;
