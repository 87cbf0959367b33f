//! Line and column tracking.
//!
//! Columns count encoded characters: the bytes of a multi-byte UTF-8
//! sequence share the column of their leading byte.

use mdhtml_core::{Input, Position};

/// Whether `b` continues a multi-byte UTF-8 sequence (`0x80..=0xBF`).
pub fn is_continuation_byte(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

/// Tracks the position of each consumed byte.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    /// Position of the most recent character
    last: Position,
    /// Where the next leading byte lands
    next: Position,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTracker {
    pub fn new() -> Self {
        Self {
            last: Position::default(),
            next: Position::default(),
        }
    }

    /// Record one input step and return its position.
    ///
    /// A newline reports its own (pre-newline) position and moves the next
    /// character to column 1 of the following line. The end-of-input
    /// sentinel reports the position of the last real character.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_core::{Input, Position};
    /// use mdhtml_parser::PositionTracker;
    ///
    /// let mut tracker = PositionTracker::new();
    /// assert_eq!(tracker.advance(Input::Byte(b'a')), Position::new(1, 1));
    /// assert_eq!(tracker.advance(Input::Byte(b'\n')), Position::new(1, 2));
    /// assert_eq!(tracker.advance(Input::Byte(b'b')), Position::new(2, 1));
    /// assert_eq!(tracker.advance(Input::End), Position::new(2, 1));
    /// ```
    pub fn advance(&mut self, input: Input) -> Position {
        match input {
            Input::End => self.last,
            Input::Byte(b'\n') => {
                self.last = self.next;
                self.next = Position::new(self.next.line + 1, 1);
                self.last
            }
            Input::Byte(b) if is_continuation_byte(b) => self.last,
            Input::Byte(_) => {
                self.last = self.next;
                self.next.column += 1;
                self.last
            }
        }
    }

    /// Position of the most recently consumed character.
    pub fn current(&self) -> Position {
        self.last
    }

    /// Position the next leading byte will receive.
    pub fn next_position(&self) -> Position {
        self.next
    }
}
