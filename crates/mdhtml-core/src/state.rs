//! Parse state record for streaming translation.
//!
//! [`ParseState`] gathers everything the translator knows after consuming
//! one character: where it was, which heading phase is active, and how
//! the current whitespace run is classified. Each component owns its own
//! piece of this state; the translator assembles the record on demand.

use crate::enums::{HeadingPhase, WhitespaceRun};
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Snapshot of parser state for one translation run.
///
/// # Example
///
/// ```
/// use mdhtml_core::{HeadingPhase, ParseState};
///
/// let state = ParseState::new();
/// assert_eq!(state.line, 1);
/// assert_eq!(state.heading_phase, HeadingPhase::Idle);
/// assert!(state.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseState {
    /// Line of the last consumed character (1-based)
    pub line: usize,
    /// Column of the last consumed character (1-based)
    pub column: usize,
    /// Current phase of heading recognition
    pub heading_phase: HeadingPhase,
    /// Number of `#` seen for the current heading, 0 when idle
    pub heading_level: u8,
    /// Trailing whitespace run classification
    pub whitespace_run: WhitespaceRun,
    /// The next character is taken literally
    pub escape_pending: bool,
    /// The end-of-input sentinel has been consumed
    pub end_of_input: bool,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    /// Create the state a translation run starts in.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            heading_phase: HeadingPhase::Idle,
            heading_level: 0,
            whitespace_run: WhitespaceRun::None,
            escape_pending: false,
            end_of_input: false,
        }
    }

    /// Position of the last consumed character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Check that the heading level is zero exactly when idle.
    pub fn is_consistent(&self) -> bool {
        (self.heading_level != 0) == self.heading_phase.in_heading()
    }
}
