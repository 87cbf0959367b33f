//! Core types for mdhtml

use crate::enums::{Severity, Warning};
use crate::error::SyntaxError;
use serde::{Deserialize, Serialize};

/// Represents a position in the input stream.
///
/// Both fields are 1-based. Columns count encoded characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number
    pub line: usize,
    /// Column number
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// One step of input: a byte, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Byte(u8),
    End,
}

impl Input {
    /// Code point reported for the end-of-input sentinel.
    pub const END_CODE_POINT: i32 = -1;

    /// The byte, or `None` at end of input.
    pub fn byte(self) -> Option<u8> {
        match self {
            Input::Byte(b) => Some(b),
            Input::End => None,
        }
    }

    /// Integer code for trace output; never collides with a byte value.
    pub fn code_point(self) -> i32 {
        match self {
            Input::Byte(b) => i32::from(b),
            Input::End => Self::END_CODE_POINT,
        }
    }

    pub fn is_end(self) -> bool {
        matches!(self, Input::End)
    }
}

impl From<u8> for Input {
    fn from(b: u8) -> Self {
        Input::Byte(b)
    }
}

/// Options selecting the translator's output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Emit a JSON trace of every state transition instead of HTML
    pub trace_mode: bool,
    /// Skip the document preamble and postamble
    pub suppress_document_wrapper: bool,
}

/// A warning or error line destined for the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub position: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(position: Position, warning: Warning) -> Self {
        Self {
            severity: Severity::Warning,
            position,
            message: warning.to_string(),
        }
    }

    pub fn error(position: Position, error: SyntaxError) -> Self {
        Self {
            severity: Severity::Error,
            position,
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: line {} column {}: {}",
            self.severity, self.position.line, self.position.column, self.message
        )
    }
}
