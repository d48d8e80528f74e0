use crate::app::Model;
use crate::editor::Direction;

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Arm a hop direction for the next character event
    Arm(Direction),
    /// A printable character or space: insert when disarmed, hop when armed
    Char(char),
    /// Delete backwards (Backspace)
    Backspace,
    /// Split the line at the cursor (Enter)
    SplitLine,
    /// Indent the current line (Tab)
    Indent,
    /// Unindent the current line (Shift+Tab)
    Unindent,
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Arm(direction) => {
            // Re-arming with another direction simply overwrites it.
            model.armed = Some(direction);
        }
        Message::Char(ch) => {
            // A single character event consumes the armed direction exactly
            // once, whether or not the hop finds a match.
            if let Some(direction) = model.armed.take() {
                model.buffer.hop(direction, ch);
            } else {
                model.buffer.insert_char(ch);
            }
        }
        Message::Backspace => {
            model.buffer.delete_back();
        }
        Message::SplitLine => model.buffer.split_line(),
        Message::Indent => {
            model.buffer.indent();
        }
        Message::Unindent => {
            model.buffer.unindent();
        }
        Message::MoveHome => model.buffer.move_home(),
        Message::MoveEnd => model.buffer.move_end(),
        Message::Resize(width, height) => {
            model.term_width = width;
            model.term_height = height;
        }
        Message::Quit => model.should_quit = true,
    }
    model.ensure_cursor_visible();
    model
}
