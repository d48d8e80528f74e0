use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::editor::Direction;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let cursor = model.buffer.cursor();
    let armed_indicator = match model.armed {
        Some(Direction::Up) => "  [hop up]",
        Some(Direction::Down) => "  [hop down]",
        Some(Direction::Left) => "  [hop left]",
        Some(Direction::Right) => "  [hop right]",
        None => "",
    };

    let status = format!(
        " hopline  Ln {}, Col {}{}  Ctrl+Q:quit",
        cursor.y + 1,
        model.buffer.screen_col() + 1,
        armed_indicator
    );

    let status_bar = Paragraph::new(status).style(super::style::status_style());
    frame.render_widget(status_bar, area);
}
