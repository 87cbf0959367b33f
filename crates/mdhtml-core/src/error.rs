//! Error types for mdhtml

use crate::types::Position;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest heading level HTML supports (`<h6>`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Fatal syntax errors detected by the heading state machine.
///
/// Each variant carries only what its message needs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxError {
    /// More than [`MAX_HEADING_LEVEL`] consecutive `#` at the start of a line
    #[error("heading level exceeds the maximum of {max}")]
    HeadingLevelTooHigh { max: u8 },

    /// A `#` run not followed by a single space
    #[error("heading marker must be followed by a space")]
    HeadingMissingSpace,

    /// A heading whose text is entirely whitespace
    #[error("heading has no text")]
    NoHeadingText,
}

/// Main error type for mdhtml operations
#[derive(Error, Debug)]
pub enum MdhtmlError {
    /// IO error while reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Syntax error in the markdown input, aborting the run
    #[error("Syntax error at line {} column {}: {kind}", .position.line, .position.column)]
    Syntax {
        kind: SyntaxError,
        position: Position,
    },
}

impl MdhtmlError {
    /// Returns the syntax error kind, if this is a syntax error.
    pub fn syntax_kind(&self) -> Option<SyntaxError> {
        match self {
            MdhtmlError::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for mdhtml operations
pub type Result<T> = std::result::Result<T, MdhtmlError>;
