//! Heading recognition state machine.
//!
//! Consumes one input step at a time and decides whether it is syntax,
//! plain text, or heading text. A heading starts with one to six `#` at
//! column 1, followed by exactly one space; its text runs to the end of
//! the line and is emitted trimmed.
//!
//! A backslash outside a heading escapes the next character, which is
//! then taken literally whatever it is.

use crate::buffer::HeadingBuffer;
use mdhtml_core::{HeadingPhase, Input, SyntaxError, MAX_HEADING_LEVEL};

/// What the translator should do with the step just consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Echo the character unchanged
    Pass,
    /// Markup; nothing is written
    Syntax,
    /// The heading delimiter: write `<hN>`
    Open(u8),
    /// The character went into the heading buffer
    Buffer,
    /// The heading ended: write the text and `</hN>`, then echo the
    /// character that ended it (unless it was the end of input)
    Close { level: u8, text: Vec<u8> },
}

impl Action {
    /// Whether the character was consumed as markup.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Action::Syntax | Action::Open(_))
    }
}

/// Character-level heading recognizer.
#[derive(Debug, Clone, Default)]
pub struct HeadingStateMachine {
    phase: HeadingPhase,
    level: u8,
    /// Allocated at the delimiter space, dropped when the heading ends
    text: Option<HeadingBuffer>,
    escape_pending: bool,
}

impl HeadingStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HeadingPhase {
        self.phase
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn escape_pending(&self) -> bool {
        self.escape_pending
    }

    /// Heading text collected so far, untrimmed.
    pub fn text_len(&self) -> usize {
        self.text.as_ref().map_or(0, HeadingBuffer::len)
    }

    /// Consume one step. `column` is the character's 1-based column.
    ///
    /// On error the in-progress heading is discarded and the machine
    /// returns to `Idle`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_core::Input;
    /// use mdhtml_parser::{Action, HeadingStateMachine};
    ///
    /// let mut machine = HeadingStateMachine::new();
    /// assert_eq!(machine.step(Input::Byte(b'#'), 1), Ok(Action::Syntax));
    /// assert_eq!(machine.step(Input::Byte(b'#'), 2), Ok(Action::Syntax));
    /// assert_eq!(machine.step(Input::Byte(b' '), 3), Ok(Action::Open(2)));
    /// assert_eq!(machine.step(Input::Byte(b'A'), 4), Ok(Action::Buffer));
    /// assert_eq!(
    ///     machine.step(Input::End, 4),
    ///     Ok(Action::Close { level: 2, text: b"A".to_vec() })
    /// );
    /// ```
    pub fn step(&mut self, input: Input, column: usize) -> Result<Action, SyntaxError> {
        if self.escape_pending {
            self.escape_pending = false;
            return Ok(Action::Pass);
        }

        let result = match self.phase {
            HeadingPhase::Idle => Ok(self.step_idle(input, column)),
            HeadingPhase::CountingLevel => self.step_counting(input),
            HeadingPhase::AccumulatingText => self.step_text(input),
        };
        if result.is_err() {
            self.abandon();
        }
        result
    }

    fn step_idle(&mut self, input: Input, column: usize) -> Action {
        match input {
            Input::Byte(b'#') if column == 1 => {
                self.phase = HeadingPhase::CountingLevel;
                self.level = 1;
                Action::Syntax
            }
            Input::Byte(b'\\') => {
                self.escape_pending = true;
                Action::Syntax
            }
            _ => Action::Pass,
        }
    }

    fn step_counting(&mut self, input: Input) -> Result<Action, SyntaxError> {
        match input {
            Input::Byte(b'#') => {
                self.level += 1;
                if self.level > MAX_HEADING_LEVEL {
                    return Err(SyntaxError::HeadingLevelTooHigh {
                        max: MAX_HEADING_LEVEL,
                    });
                }
                Ok(Action::Syntax)
            }
            Input::Byte(b' ') => {
                self.phase = HeadingPhase::AccumulatingText;
                self.text = Some(HeadingBuffer::new());
                Ok(Action::Open(self.level))
            }
            _ => Err(SyntaxError::HeadingMissingSpace),
        }
    }

    fn step_text(&mut self, input: Input) -> Result<Action, SyntaxError> {
        match input {
            Input::Byte(b'\n') | Input::End => {
                let level = self.level;
                let buffer = self.text.take().unwrap_or_default();
                if !buffer.has_text() {
                    buffer.discard();
                    return Err(SyntaxError::NoHeadingText);
                }
                self.reset();
                Ok(Action::Close {
                    level,
                    text: buffer.finalize(),
                })
            }
            Input::Byte(b) => {
                self.text.get_or_insert_with(HeadingBuffer::new).append(b);
                Ok(Action::Buffer)
            }
        }
    }

    fn abandon(&mut self) {
        if let Some(buffer) = self.text.take() {
            buffer.discard();
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = HeadingPhase::Idle;
        self.level = 0;
        self.text = None;
    }
}
