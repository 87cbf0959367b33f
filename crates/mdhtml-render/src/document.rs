//! Document wrapper.
//!
//! Fixed boilerplate written around the translated content unless the
//! wrapper is suppressed.

use mdhtml_config::DocumentConfig;

/// Closing boilerplate.
pub const POSTAMBLE: &str = "</body>\n</html>\n";

/// HTML document preamble and postamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// Contents of `<title>`, omitted when empty
    pub title: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: String::new(),
        }
    }
}

impl Document {
    /// Create from document configuration.
    pub fn from_config(config: &DocumentConfig) -> Self {
        Self {
            lang: config.lang.clone(),
            title: config.title.clone(),
        }
    }

    /// Opening boilerplate, up to and including `<body>`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_render::Document;
    ///
    /// let preamble = Document::default().preamble();
    /// assert!(preamble.starts_with("<!DOCTYPE html>\n"));
    /// assert!(preamble.ends_with("<body>\n"));
    /// ```
    pub fn preamble(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"");
        escape_html(&self.lang, &mut out);
        out.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
        if !self.title.is_empty() {
            out.push_str("<title>");
            escape_html(&self.title, &mut out);
            out.push_str("</title>\n");
        }
        out.push_str("</head>\n<body>\n");
        out
    }

    pub fn postamble(&self) -> &'static str {
        POSTAMBLE
    }
}

pub(crate) fn escape_html(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
