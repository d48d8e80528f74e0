//! Hop-to-character navigation.
//!
//! A hop searches a directional window around the cursor for a target
//! character and relocates the cursor to the best-scoring occurrence. A
//! candidate at offset `d` in a window of length `L` scores `|L/2 - d|`:
//! matches near the middle of the remaining window win. Candidates are
//! scanned in window order and rejected only when they score strictly worse
//! than the best so far, so an equal score replaces the earlier candidate.

use super::buffer::{Direction, EditorBuffer};

impl EditorBuffer {
    /// Hop the cursor to the best-scoring occurrence of `target` in the
    /// given direction. Returns `true` when a match was found; on a miss
    /// the cursor does not move.
    pub fn hop(&mut self, direction: Direction, target: char) -> bool {
        match direction {
            Direction::Right => self.hop_right(target),
            Direction::Left => self.hop_left(target),
            Direction::Up => self.hop_vertical(target, true),
            Direction::Down => self.hop_vertical(target, false),
        }
    }

    /// Window: characters from the cursor to the end of the line.
    fn hop_right(&mut self, target: char) -> bool {
        let cursor = self.cursor();
        let window = &self.current_line().chars()[cursor.x..];
        let Some(d) = best_offset(window.iter().copied(), window.len(), target) else {
            return false;
        };
        self.move_to(cursor.x + d, cursor.y);
        true
    }

    /// Window: characters from the line start up to the cursor. Offsets are
    /// measured from the line start, so the winning offset is the new `x`.
    fn hop_left(&mut self, target: char) -> bool {
        let cursor = self.cursor();
        let window = &self.current_line().chars()[..cursor.x];
        let Some(d) = best_offset(window.iter().copied(), window.len(), target) else {
            return false;
        };
        self.move_to(d, cursor.y);
        true
    }

    /// Window: all lines above the cursor (scanned from the top), or the
    /// lines from the cursor row downward. A line is a candidate when the
    /// cursor column, translated for the indentation difference, lands on
    /// the target character; the translated column becomes the new `x`, so
    /// the cursor stays on the same absolute screen column.
    fn hop_vertical(&mut self, target: char, upward: bool) -> bool {
        let cursor = self.cursor();
        let indent = self.current_line().indent();
        let rows = if upward {
            0..cursor.y
        } else {
            cursor.y..self.line_count()
        };
        let window_len = rows.len();
        let half = halfway(window_len);

        let mut best = f64::INFINITY;
        let mut hit: Option<(usize, usize)> = None;
        for (d, y) in rows.enumerate() {
            let Some(line) = self.line(y) else {
                continue;
            };
            let lnx = cursor.x as isize - (line.indent() as isize - indent as isize);
            let Ok(lnx) = usize::try_from(lnx) else {
                continue;
            };
            if line.chars().get(lnx) != Some(&target) {
                continue;
            }
            let score = (half - d as f64).abs();
            if score > best {
                continue;
            }
            best = score;
            hit = Some((lnx, y));
        }
        let Some((x, y)) = hit else {
            return false;
        };
        self.move_to(x, y);
        true
    }
}

/// Scan a window for `target` and return the best-scoring offset.
fn best_offset(window: impl Iterator<Item = char>, len: usize, target: char) -> Option<usize> {
    let half = halfway(len);
    let mut best = f64::INFINITY;
    let mut hit = None;
    for (d, ch) in window.enumerate() {
        if ch != target {
            continue;
        }
        let score = (half - d as f64).abs();
        if score > best {
            continue;
        }
        best = score;
        hit = Some(d);
    }
    hit
}

const fn halfway(len: usize) -> f64 {
    len as f64 / 2.0
}
