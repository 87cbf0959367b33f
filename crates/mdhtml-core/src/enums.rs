//! Core enums for mdhtml parsing state.
//!
//! These enums name the phases the heading recognizer moves through and
//! the whitespace runs the classifier tracks. Their `Debug`/serde names
//! are what trace output shows.

use serde::{Deserialize, Serialize};

/// Phase of heading recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeadingPhase {
    /// Regular text, no heading in progress
    #[default]
    Idle,
    /// Counting `#` characters at the start of a line
    CountingLevel,
    /// Collecting heading text up to the end of the line
    AccumulatingText,
}

impl HeadingPhase {
    /// Check if a heading is in progress.
    pub fn in_heading(&self) -> bool {
        !matches!(self, HeadingPhase::Idle)
    }
}

impl std::fmt::Display for HeadingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingPhase::Idle => write!(f, "idle"),
            HeadingPhase::CountingLevel => write!(f, "counting level"),
            HeadingPhase::AccumulatingText => write!(f, "accumulating text"),
        }
    }
}

/// Classification of the current trailing run of spaces or tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WhitespaceRun {
    /// Last character was neither a space nor a tab
    #[default]
    None,
    /// Exactly one space
    OneSpace,
    /// Two or more consecutive spaces
    TwoOrMoreSpaces,
    /// One or more consecutive tabs
    OneOrMoreTabs,
}

impl std::fmt::Display for WhitespaceRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WhitespaceRun::None => write!(f, "none"),
            WhitespaceRun::OneSpace => write!(f, "one space"),
            WhitespaceRun::TwoOrMoreSpaces => write!(f, "two or more spaces"),
            WhitespaceRun::OneOrMoreTabs => write!(f, "one or more tabs"),
        }
    }
}

/// Advisory conditions that never change output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warning {
    /// A second consecutive space; HTML collapses the run
    MultipleSpaces,
    /// A tab, which HTML renders as ordinary whitespace
    Tab,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MultipleSpaces => {
                write!(f, "multiple spaces collapse into one in HTML rendering")
            }
            Warning::Tab => write!(f, "tab character does not render as expected in HTML"),
        }
    }
}

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_phase_display() {
        assert_eq!(HeadingPhase::Idle.to_string(), "idle");
        assert_eq!(HeadingPhase::CountingLevel.to_string(), "counting level");
        assert_eq!(HeadingPhase::AccumulatingText.to_string(), "accumulating text");
    }

    #[test]
    fn test_heading_phase_in_heading() {
        assert!(!HeadingPhase::Idle.in_heading());
        assert!(HeadingPhase::CountingLevel.in_heading());
        assert!(HeadingPhase::AccumulatingText.in_heading());
    }

    #[test]
    fn test_whitespace_run_display() {
        assert_eq!(WhitespaceRun::None.to_string(), "none");
        assert_eq!(WhitespaceRun::OneSpace.to_string(), "one space");
        assert_eq!(WhitespaceRun::TwoOrMoreSpaces.to_string(), "two or more spaces");
        assert_eq!(WhitespaceRun::OneOrMoreTabs.to_string(), "one or more tabs");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(HeadingPhase::default(), HeadingPhase::Idle);
        assert_eq!(WhitespaceRun::default(), WhitespaceRun::None);
    }
}
