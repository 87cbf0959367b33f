//! Whitespace run classification.
//!
//! HTML collapses runs of spaces and renders tabs as plain whitespace, so
//! both are worth a warning. Each run warns at most once: a space run on
//! its second space, a tab run on its first tab.

use mdhtml_core::{Input, Warning, WhitespaceRun};

/// Tracks the current run of spaces or tabs.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceRunClassifier {
    run: WhitespaceRun,
}

impl WhitespaceRunClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current run classification.
    pub fn run(&self) -> WhitespaceRun {
        self.run
    }

    /// Consume one input step and return a warning if this character makes
    /// the current run worth reporting for the first time.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_core::{Input, Warning};
    /// use mdhtml_parser::WhitespaceRunClassifier;
    ///
    /// let mut classifier = WhitespaceRunClassifier::new();
    /// let warnings: Vec<_> = b"a   b"
    ///     .iter()
    ///     .filter_map(|b| classifier.classify(Input::Byte(*b)))
    ///     .collect();
    /// assert_eq!(warnings, vec![Warning::MultipleSpaces]);
    /// ```
    pub fn classify(&mut self, input: Input) -> Option<Warning> {
        let (run, warning) = match (self.run, input) {
            (WhitespaceRun::OneSpace, Input::Byte(b' ')) => {
                (WhitespaceRun::TwoOrMoreSpaces, Some(Warning::MultipleSpaces))
            }
            (WhitespaceRun::TwoOrMoreSpaces, Input::Byte(b' ')) => {
                (WhitespaceRun::TwoOrMoreSpaces, None)
            }
            (_, Input::Byte(b' ')) => (WhitespaceRun::OneSpace, None),
            (WhitespaceRun::OneOrMoreTabs, Input::Byte(b'\t')) => {
                (WhitespaceRun::OneOrMoreTabs, None)
            }
            (_, Input::Byte(b'\t')) => (WhitespaceRun::OneOrMoreTabs, Some(Warning::Tab)),
            _ => (WhitespaceRun::None, None),
        };
        self.run = run;
        warning
    }
}
