//! Document wrapper configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTML preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentConfig {
    /// Value of the `lang` attribute on `<html>`.
    /// Default: "en"
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Document title; no `<title>` element is written when empty.
    /// Default: ""
    #[serde(default)]
    pub title: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            title: String::new(),
        }
    }
}

impl DocumentConfig {
    /// Merge another DocumentConfig into this one.
    ///
    /// Only values that differ from the defaults are taken from `other`.
    /// An override therefore cannot reset `Lang` to `"en"` or clear
    /// `Title`; edit the base config file for that.
    pub fn merge(&mut self, other: &DocumentConfig) {
        if other.lang != default_lang() {
            self.lang = other.lang.clone();
        }
        if !other.title.is_empty() {
            self.title = other.title.clone();
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}
