//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use crate::config::ThemeMode;
use crate::editor::{DEFAULT_LINE_WIDTH, DEFAULT_TAB_WIDTH};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    line_width: usize,
    tab_width: usize,
    theme: ThemeMode,
}

impl App {
    /// Create a new application with default widths and theme.
    pub fn new() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            tab_width: DEFAULT_TAB_WIDTH,
            theme: ThemeMode::default(),
        }
    }

    /// Set the maximum line width in cells.
    pub const fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Set the indentation step in cells.
    pub const fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    /// Set the grid color theme.
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
