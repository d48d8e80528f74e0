//! Line-based editor core.
//!
//! Provides the indent-aware line buffer with cursor management and the
//! hop-to-character navigation engine, designed for integration into the
//! TEA architecture.

mod buffer;
mod hop;

pub use buffer::{Cursor, Direction, EditorBuffer, Line, DEFAULT_LINE_WIDTH, DEFAULT_TAB_WIDTH};
