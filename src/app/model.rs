use crate::config::ThemeMode;
use crate::editor::{Direction, EditorBuffer};

/// The complete editor state.
///
/// All state lives here - no global or scattered state. The armed hop
/// direction is a single optional enum, so two directions can never be
/// armed at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The text buffer, which owns the cursor.
    pub buffer: EditorBuffer,
    /// Direction armed for the next character event, if any.
    pub armed: Option<Direction>,
    /// Line index of the first visible grid row.
    pub scroll_offset: usize,
    /// Grid color theme.
    pub theme: ThemeMode,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal width in cells.
    pub term_width: u16,
    /// Terminal height in cells (grid rows plus the status bar).
    pub term_height: u16,
}

impl Model {
    /// Create a new model around a buffer.
    pub const fn new(buffer: EditorBuffer, terminal_size: (u16, u16)) -> Self {
        Self {
            buffer,
            armed: None,
            scroll_offset: 0,
            theme: ThemeMode::Light,
            should_quit: false,
            term_width: terminal_size.0,
            term_height: terminal_size.1,
        }
    }

    /// Rows available for the grid (everything above the status bar).
    pub const fn grid_height(&self) -> usize {
        self.term_height.saturating_sub(1) as usize
    }

    /// Scroll just enough to keep the cursor row on the grid.
    pub fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.buffer.cursor().y;
        let visible = self.grid_height();
        if visible == 0 {
            self.scroll_offset = cursor_line;
            return;
        }
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible {
            self.scroll_offset = cursor_line + 1 - visible;
        }
    }
}
