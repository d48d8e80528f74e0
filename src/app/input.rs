use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::Message;
use crate::editor::Direction;

/// Map a terminal event to a message, or `None` for events the editor
/// ignores.
pub(super) fn handle_event(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(key),
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

fn handle_key(key: &KeyEvent) -> Option<Message> {
    match key.code {
        // Arrow keys arm a hop direction instead of moving the cursor.
        KeyCode::Up => Some(Message::Arm(Direction::Up)),
        KeyCode::Down => Some(Message::Arm(Direction::Down)),
        KeyCode::Left => Some(Message::Arm(Direction::Left)),
        KeyCode::Right => Some(Message::Arm(Direction::Right)),

        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Enter => Some(Message::SplitLine),
        KeyCode::Tab => Some(Message::Indent),
        KeyCode::BackTab => Some(Message::Unindent),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),

        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Quit)
        }
        // Printable characters and space; control sequences are ignored.
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
                && !ch.is_control() =>
        {
            Some(Message::Char(ch))
        }
        _ => None,
    }
}
