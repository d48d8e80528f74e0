use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::{status, style};

/// Render the complete UI: the text grid plus the status bar.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let grid_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    render_grid(model, frame, grid_area);
    status::render_status_bar(model, frame, status_area);
}

/// Draw every visible buffer row as a full-width run of cells: indent
/// blanks, then the characters, then space fill out to the line width.
fn render_grid(model: &Model, frame: &mut Frame, area: Rect) {
    let style = style::grid_style(model.theme);
    let width = model.buffer.width();
    let start = model.scroll_offset;
    let end = (start + area.height as usize).min(model.buffer.line_count());

    let mut content: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    for idx in start..end {
        let Some(line) = model.buffer.line(idx) else {
            break;
        };
        let mut row = String::with_capacity(width);
        for _ in 0..line.indent() {
            row.push(' ');
        }
        row.extend(line.chars());
        for _ in line.indent() + line.len()..width {
            row.push(' ');
        }
        content.push(Line::styled(row, style));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);

    // The terminal cursor sits at the indent-adjusted screen column.
    let cursor = model.buffer.cursor();
    if cursor.y >= start && cursor.y < end {
        let col = u16::try_from(model.buffer.screen_col()).unwrap_or(u16::MAX);
        let row = u16::try_from(cursor.y - start).unwrap_or(u16::MAX);
        if col < area.width && row < area.height {
            frame.set_cursor_position(Position::new(area.x + col, area.y + row));
        }
    }
}
