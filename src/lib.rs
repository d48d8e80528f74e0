// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Hopline
//!
//! A terminal line editor with hop-to-character navigation.
//!
//! Instead of repeating arrow keys, you arm a direction with one arrow
//! press and type a character; the cursor lands on the occurrence of
//! that character closest to the midpoint of the scan window in the
//! armed direction. Vertical hops preserve the absolute screen column
//! across lines with different indentation.
//!
//! ## Architecture
//!
//! Hopline uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: The text buffer, cursor movement, and the hop engine
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persisted flag defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Cursor, Direction, EditorBuffer};
}
