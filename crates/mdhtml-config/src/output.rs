//! Output mode configuration.
//!
//! This module contains the `OutputConfig` struct which selects between
//! HTML and trace output and controls the document wrapper.

use mdhtml_core::Options;
use serde::{Deserialize, Serialize};

/// Output mode configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Emit a JSON trace of parser state instead of HTML.
    /// Default: false
    #[serde(default)]
    pub trace: bool,

    /// Omit the document preamble and postamble.
    /// Default: false
    #[serde(default)]
    pub no_doc: bool,
}

impl OutputConfig {
    /// Merge another OutputConfig into this one.
    ///
    /// Flags are sticky: an override can switch a mode on but a missing
    /// key never switches it back off.
    pub fn merge(&mut self, other: &OutputConfig) {
        self.trace |= other.trace;
        self.no_doc |= other.no_doc;
    }

    /// Translator options for this configuration.
    pub fn options(&self) -> Options {
        Options {
            trace_mode: self.trace,
            suppress_document_wrapper: self.no_doc,
        }
    }
}
