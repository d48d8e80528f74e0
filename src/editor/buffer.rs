/// Default maximum line width in cells (indent + characters).
pub const DEFAULT_LINE_WIDTH: usize = 120;

/// Default indentation step in cells.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Cursor position in the editor buffer.
///
/// `x` is an offset into the characters of line `y`, not a screen column:
/// indentation is applied only when translating to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based offset into the current line's characters.
    pub x: usize,
    /// Zero-based line index.
    pub y: usize,
}

impl Cursor {
    /// Create a cursor at the buffer origin.
    pub const fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement and hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A single row of text: an indentation width plus its characters.
///
/// Indentation is stored as a cell count rather than literal blanks so it
/// can be adjusted without touching the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    indent: usize,
    chars: Vec<char>,
}

impl Line {
    /// Create an empty line with zero indent.
    pub const fn empty() -> Self {
        Self {
            indent: 0,
            chars: Vec::new(),
        }
    }

    /// Create a line from an indent width and its text content.
    pub fn new(indent: usize, text: &str) -> Self {
        Self {
            indent,
            chars: text.chars().collect(),
        }
    }

    /// Leading blank cells before the content.
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// The line's characters, excluding indentation.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters, excluding indentation.
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the line has no characters (it may still be indented).
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The content as a `String`, excluding indentation.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::empty()
    }
}

/// A text buffer of indent-aware lines with an owned cursor.
///
/// Every mutating operation keeps two invariants: each line satisfies
/// `indent + len <= width`, and the cursor stays inside the buffer
/// (`x <= line len`, `y < line count`). Operations that would break either
/// one are silent no-ops rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    lines: Vec<Line>,
    cursor: Cursor,
    width: usize,
    tab_width: usize,
}

impl EditorBuffer {
    /// Create an empty buffer: one empty line, cursor at the origin.
    pub fn new(width: usize, tab_width: usize) -> Self {
        Self {
            lines: vec![Line::empty()],
            cursor: Cursor::new(),
            width,
            tab_width,
        }
    }

    /// Create a buffer from a string, treating leading spaces as indentation.
    ///
    /// Content beyond the width limit is truncated so the width invariant
    /// holds from the start.
    pub fn from_text(text: &str, width: usize, tab_width: usize) -> Self {
        let mut lines: Vec<Line> = text
            .split('\n')
            .map(|raw| {
                let indent = raw.chars().take_while(|&c| c == ' ').count().min(width);
                let mut chars: Vec<char> = raw.chars().skip(indent).collect();
                chars.truncate(width - indent);
                Line { indent, chars }
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::empty());
        }
        Self {
            lines,
            cursor: Cursor::new(),
            width,
            tab_width,
        }
    }

    /// The full content, with indentation rendered as spaces.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}{}", " ".repeat(line.indent), line.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Maximum line width in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Indentation step in cells.
    pub const fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Total number of lines. Always at least one.
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index.
    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// The line under the cursor.
    pub fn current_line(&self) -> &Line {
        &self.lines[self.cursor.y]
    }

    /// The cursor's absolute screen column (`indent + x`).
    pub fn screen_col(&self) -> usize {
        self.current_line().indent + self.cursor.x
    }

    // --- Unit-step movement (silently clamped) ---

    /// Move the cursor up `n` lines; no-op if that would leave the buffer.
    /// `x` is clamped when the destination line is shorter.
    pub fn move_up(&mut self, n: usize) {
        let Some(dy) = self.cursor.y.checked_sub(n) else {
            return;
        };
        self.cursor.y = dy;
        self.cursor.x = self.cursor.x.min(self.current_line().len());
    }

    /// Move the cursor down `n` lines; no-op if that would leave the buffer.
    /// `x` is clamped when the destination line is shorter.
    pub fn move_down(&mut self, n: usize) {
        let dy = self.cursor.y + n;
        if dy >= self.lines.len() {
            return;
        }
        self.cursor.y = dy;
        self.cursor.x = self.cursor.x.min(self.current_line().len());
    }

    /// Move the cursor left `n` characters; no-op past the line start.
    pub const fn move_left(&mut self, n: usize) {
        let Some(dx) = self.cursor.x.checked_sub(n) else {
            return;
        };
        self.cursor.x = dx;
    }

    /// Move the cursor right `n` characters; no-op past the line end.
    pub fn move_right(&mut self, n: usize) {
        let dx = self.cursor.x + n;
        if dx > self.current_line().len() {
            return;
        }
        self.cursor.x = dx;
    }

    /// Move the cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cursor.x = 0;
    }

    /// Move the cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        self.cursor.x = self.current_line().len();
    }

    /// Move the cursor to a specific position, clamped to the buffer.
    pub fn move_to(&mut self, x: usize, y: usize) {
        self.cursor.y = y.min(self.lines.len() - 1);
        self.cursor.x = x.min(self.current_line().len());
    }

    // --- Edit operations ---

    /// Insert a character at the cursor.
    ///
    /// Returns `false` (leaving the buffer untouched) when the line would
    /// exceed the width limit.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let line = &self.lines[self.cursor.y];
        if line.indent + line.chars.len() + 1 > self.width {
            return false;
        }
        self.lines[self.cursor.y].chars.insert(self.cursor.x, ch);
        self.move_right(1);
        true
    }

    /// Insert a string at the cursor, rejected whole when it would exceed
    /// the width limit.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let incoming: Vec<char> = s.chars().collect();
        let line = &self.lines[self.cursor.y];
        if line.indent + line.chars.len() + incoming.len() > self.width {
            return false;
        }
        let n = incoming.len();
        self.lines[self.cursor.y]
            .chars
            .splice(self.cursor.x..self.cursor.x, incoming);
        self.move_right(n);
        true
    }

    /// Split the current line at the cursor (Enter).
    ///
    /// Characters at and after the cursor move to a new line inserted below,
    /// inheriting the current indent; the cursor lands at its start.
    pub fn split_line(&mut self) {
        let indent = self.lines[self.cursor.y].indent;
        let tail = self.lines[self.cursor.y].chars.split_off(self.cursor.x);
        self.lines
            .insert(self.cursor.y + 1, Line { indent, chars: tail });
        self.move_down(1);
        self.move_home();
    }

    /// Delete backwards from the cursor (Backspace).
    ///
    /// At `x > 0` this removes the previous character. At the line start it
    /// first consumes indentation one tab at a time, then merges the line
    /// into the one above. Returns `true` if the buffer changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor.x == 0 {
            if self.lines[self.cursor.y].indent > 0 {
                return self.unindent();
            }
            if self.cursor.y > 0 {
                return self.merge_line_up();
            }
            return false;
        }
        self.lines[self.cursor.y].chars.remove(self.cursor.x - 1);
        self.move_left(1);
        true
    }

    /// Increase the current line's indent by one tab width (Tab).
    ///
    /// Rejected when the wider line would exceed the width limit.
    pub fn indent(&mut self) -> bool {
        let line = &self.lines[self.cursor.y];
        if line.indent + line.chars.len() + self.tab_width > self.width {
            return false;
        }
        self.lines[self.cursor.y].indent += self.tab_width;
        true
    }

    /// Decrease the current line's indent by one tab width.
    ///
    /// No-op when the indent is already below one tab width.
    pub fn unindent(&mut self) -> bool {
        let line = &mut self.lines[self.cursor.y];
        if line.indent < self.tab_width {
            return false;
        }
        line.indent -= self.tab_width;
        true
    }

    /// Append the current line's characters to the previous line and remove
    /// it, placing the cursor at the join point.
    fn merge_line_up(&mut self) -> bool {
        let prev = &self.lines[self.cursor.y - 1];
        let merged = prev.indent + prev.chars.len() + self.lines[self.cursor.y].chars.len();
        if merged > self.width {
            return false;
        }
        let tail = self.lines.remove(self.cursor.y);
        self.move_up(1);
        self.move_end();
        self.lines[self.cursor.y].chars.extend(tail.chars);
        true
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH, DEFAULT_TAB_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_buffer(text: &str) -> EditorBuffer {
        EditorBuffer::from_text(text, 16, 4)
    }

    // --- Construction and basic queries ---

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buf = EditorBuffer::new(120, 4);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0), Some(&Line::empty()));
        assert_eq!(buf.cursor(), Cursor::new());
    }

    #[test]
    fn test_from_text_splits_indent_from_content() {
        let buf = EditorBuffer::from_text("hello\n    world", 120, 4);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(0), Some(&Line::new(0, "hello")));
        assert_eq!(buf.line(1), Some(&Line::new(4, "world")));
    }

    #[test]
    fn test_from_text_truncates_to_width() {
        let buf = EditorBuffer::from_text("  abcdefgh", 6, 4);
        let line = buf.line(0).unwrap();
        assert_eq!(line.indent(), 2);
        assert_eq!(line.text(), "abcd");
    }

    #[test]
    fn test_text_roundtrip_renders_indent_as_spaces() {
        let content = "top\n    nested\nbottom";
        let buf = EditorBuffer::from_text(content, 120, 4);
        assert_eq!(buf.text(), content);
    }

    // --- Unit-step movement ---

    #[test]
    fn test_move_up_past_top_is_noop() {
        let mut buf = small_buffer("a\nb");
        buf.move_up(1);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_down_past_bottom_is_noop() {
        let mut buf = small_buffer("a\nb");
        buf.move_down(5);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
        buf.move_down(1);
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_move_left_past_start_is_noop() {
        let mut buf = small_buffer("abc");
        buf.move_left(1);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_right_may_rest_after_last_char() {
        let mut buf = small_buffer("ab");
        buf.move_right(2);
        assert_eq!(buf.cursor(), Cursor::at(2, 0));
        buf.move_right(1);
        assert_eq!(buf.cursor(), Cursor::at(2, 0));
    }

    #[test]
    fn test_move_home_and_end() {
        let mut buf = small_buffer("hello");
        buf.move_end();
        assert_eq!(buf.cursor(), Cursor::at(5, 0));
        buf.move_home();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_screen_col_includes_indent() {
        let mut buf = small_buffer("    abc");
        buf.move_right(2);
        assert_eq!(buf.cursor(), Cursor::at(2, 0));
        assert_eq!(buf.screen_col(), 6);
    }

    // --- Insertion ---

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut buf = EditorBuffer::new(120, 4);
        assert!(buf.insert_char('h'));
        assert!(buf.insert_char('i'));
        assert_eq!(buf.line(0).unwrap().text(), "hi");
        assert_eq!(buf.cursor(), Cursor::at(2, 0));
    }

    #[test]
    fn test_insert_str_in_middle() {
        let mut buf = small_buffer("hd");
        buf.move_right(1);
        assert!(buf.insert_str("ello worl"));
        assert_eq!(buf.line(0).unwrap().text(), "hello world");
        assert_eq!(buf.cursor(), Cursor::at(10, 0));
    }

    #[test]
    fn test_insert_rejected_at_width_limit() {
        let mut buf = small_buffer("0123456789abcdef");
        buf.move_end();
        assert!(!buf.insert_char('x'));
        assert_eq!(buf.line(0).unwrap().text(), "0123456789abcdef");
        assert_eq!(buf.cursor(), Cursor::at(16, 0));
    }

    #[test]
    fn test_insert_rejection_counts_indent() {
        // 4 cells of indent + 12 chars fills a width-16 line completely.
        let mut buf = small_buffer("    0123456789ab");
        buf.move_end();
        assert!(!buf.insert_char('x'));
        assert_eq!(buf.line(0).unwrap().text(), "0123456789ab");
    }

    // --- Split / merge ---

    #[test]
    fn test_split_line_moves_tail_and_inherits_indent() {
        let mut buf = small_buffer("    abcdef");
        buf.move_right(3);
        buf.split_line();
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(0), Some(&Line::new(4, "abc")));
        assert_eq!(buf.line(1), Some(&Line::new(4, "def")));
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_split_at_line_end_creates_empty_line() {
        let mut buf = small_buffer("abc");
        buf.move_end();
        buf.split_line();
        assert_eq!(buf.line(1), Some(&Line::new(0, "")));
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_split_then_merge_restores_line() {
        let mut buf = small_buffer("helloworld");
        buf.move_right(5);
        buf.split_line();
        assert_eq!(buf.line_count(), 2);

        assert!(buf.delete_back());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0).unwrap().text(), "helloworld");
        assert_eq!(buf.cursor(), Cursor::at(5, 0));
    }

    #[test]
    fn test_merge_rejected_when_joined_line_too_wide() {
        let mut buf = small_buffer("0123456789\nabcdefg");
        buf.move_to(0, 1);
        assert!(!buf.delete_back());
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    // --- Backspace ---

    #[test]
    fn test_delete_back_removes_previous_char() {
        let mut buf = small_buffer("hello");
        buf.move_end();
        assert!(buf.delete_back());
        assert_eq!(buf.line(0).unwrap().text(), "hell");
        assert_eq!(buf.cursor(), Cursor::at(4, 0));
    }

    #[test]
    fn test_delete_back_at_origin_is_noop() {
        let mut buf = small_buffer("hello");
        assert!(!buf.delete_back());
        assert_eq!(buf.line(0).unwrap().text(), "hello");
    }

    #[test]
    fn test_delete_back_unindents_before_merging() {
        let mut buf = small_buffer("top\n    down");
        buf.move_to(0, 1);
        assert!(buf.delete_back());
        assert_eq!(buf.line(1), Some(&Line::new(0, "down")));
        assert_eq!(buf.cursor(), Cursor::at(0, 1));

        assert!(buf.delete_back());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0).unwrap().text(), "topdown");
        assert_eq!(buf.cursor(), Cursor::at(3, 0));
    }

    // --- Indentation ---

    #[test]
    fn test_indent_steps_by_tab_width() {
        let mut buf = small_buffer("abc");
        assert!(buf.indent());
        assert_eq!(buf.line(0).unwrap().indent(), 4);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_indent_rejected_at_width_limit() {
        let mut buf = small_buffer("0123456789abc");
        assert!(!buf.indent());
        assert_eq!(buf.line(0).unwrap().indent(), 0);
    }

    #[test]
    fn test_unindent_below_one_tab_is_noop() {
        let mut buf = EditorBuffer::from_text("  ab", 16, 4);
        assert_eq!(buf.line(0).unwrap().indent(), 2);
        assert!(!buf.unindent());
        assert_eq!(buf.line(0).unwrap().indent(), 2);
    }

    // --- Invariant properties ---

    #[derive(Debug, Clone)]
    enum Op {
        Insert(char),
        Backspace,
        Split,
        Indent,
        Unindent,
        Up(usize),
        Down(usize),
        Left(usize),
        Right(usize),
        Home,
        End,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            proptest::char::range('a', 'z').prop_map(Op::Insert),
            Just(Op::Backspace),
            Just(Op::Split),
            Just(Op::Indent),
            Just(Op::Unindent),
            (1usize..3).prop_map(Op::Up),
            (1usize..3).prop_map(Op::Down),
            (1usize..3).prop_map(Op::Left),
            (1usize..3).prop_map(Op::Right),
            Just(Op::Home),
            Just(Op::End),
        ]
    }

    fn apply(buf: &mut EditorBuffer, op: &Op) {
        match *op {
            Op::Insert(ch) => {
                buf.insert_char(ch);
            }
            Op::Backspace => {
                buf.delete_back();
            }
            Op::Split => buf.split_line(),
            Op::Indent => {
                buf.indent();
            }
            Op::Unindent => {
                buf.unindent();
            }
            Op::Up(n) => buf.move_up(n),
            Op::Down(n) => buf.move_down(n),
            Op::Left(n) => buf.move_left(n),
            Op::Right(n) => buf.move_right(n),
            Op::Home => buf.move_home(),
            Op::End => buf.move_end(),
        }
    }

    proptest! {
        #[test]
        fn prop_width_and_cursor_invariants_hold(
            ops in proptest::collection::vec(op_strategy(), 0..64),
        ) {
            let mut buf = EditorBuffer::new(12, 4);
            for op in &ops {
                apply(&mut buf, op);
                prop_assert!(buf.line_count() >= 1);
                for idx in 0..buf.line_count() {
                    let line = buf.line(idx).unwrap();
                    prop_assert!(line.indent() + line.len() <= buf.width());
                }
                let cursor = buf.cursor();
                prop_assert!(cursor.y < buf.line_count());
                prop_assert!(cursor.x <= buf.line(cursor.y).unwrap().len());
            }
        }
    }
}
