//! mdhtml Render
//!
//! This crate drives the read-classify-emit loop that turns a byte stream
//! of Markdown into HTML, writing diagnostics to a separate sink.
//!
//! # Features
//!
//! - **ATX headings** - `#` through `######` become `<h1>` through `<h6>`
//! - **Escapes** - a backslash makes the next character literal
//! - **Whitespace warnings** - one per run of spaces or tabs
//! - **Trace mode** - a JSON record of every state transition
//!
//! # Example
//!
//! ```
//! use mdhtml_core::Options;
//! use mdhtml_render::translate;
//!
//! let mut output = Vec::new();
//! let mut diagnostics = Vec::new();
//! let options = Options {
//!     suppress_document_wrapper: true,
//!     ..Options::default()
//! };
//!
//! translate("# Hello\nworld\n".as_bytes(), &mut output, &mut diagnostics, &options).unwrap();
//! assert_eq!(output, b"<h1>Hello</h1>\nworld\n");
//! assert!(diagnostics.is_empty());
//! ```

pub mod document;
pub mod trace;

pub use document::{Document, POSTAMBLE};
pub use trace::{TraceRecord, TraceWriter};

use log::debug;
use mdhtml_core::{
    Diagnostic, Input, MdhtmlError, Options, ParseState, Position, Result, Warning,
};
use mdhtml_parser::{Action, HeadingStateMachine, PositionTracker, WhitespaceRunClassifier};
use std::io::{BufReader, Read, Write};

/// Outcome of feeding one input step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position of the consumed character
    pub position: Position,
    /// How the character was classified
    pub action: Action,
    /// Warning raised by this character, if any
    pub warning: Option<Warning>,
}

/// Streaming Markdown to HTML translator.
///
/// Owns one instance of each parsing component for a single run.
pub struct Translator<W: Write, D: Write> {
    /// Primary output
    out: W,
    /// Diagnostic output
    diag: D,
    options: Options,
    document: Document,
    position: PositionTracker,
    whitespace: WhitespaceRunClassifier,
    heading: HeadingStateMachine,
    /// Present in trace mode
    trace: Option<TraceWriter>,
    started: bool,
    end_of_input: bool,
    /// Headings closed so far
    headings: usize,
    /// Warnings reported so far
    warnings: usize,
}

impl<W: Write, D: Write> Translator<W, D> {
    /// Create a translator with the default document wrapper.
    pub fn new(out: W, diag: D, options: Options) -> Self {
        Self {
            out,
            diag,
            options,
            document: Document::default(),
            position: PositionTracker::new(),
            whitespace: WhitespaceRunClassifier::new(),
            heading: HeadingStateMachine::new(),
            trace: options.trace_mode.then(TraceWriter::new),
            started: false,
            end_of_input: false,
            headings: 0,
            warnings: 0,
        }
    }

    /// Use a custom document wrapper.
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of headings emitted so far.
    pub fn headings(&self) -> usize {
        self.headings
    }

    /// Number of warnings reported so far.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Current parser state.
    pub fn snapshot(&self) -> ParseState {
        let position = self.position.current();
        ParseState {
            line: position.line,
            column: position.column,
            heading_phase: self.heading.phase(),
            heading_level: self.heading.level(),
            whitespace_run: self.whitespace.run(),
            escape_pending: self.heading.escape_pending(),
            end_of_input: self.end_of_input,
        }
    }

    /// Translate a whole input stream, from preamble to postamble.
    pub fn translate<R: Read>(&mut self, input: R) -> Result<()> {
        self.begin()?;
        for byte in BufReader::new(input).bytes() {
            match byte {
                Ok(b) => {
                    self.feed(Input::Byte(b))?;
                }
                Err(e) => {
                    debug!("Read failed: {}", e);
                    self.abort()?;
                    return Err(e.into());
                }
            }
        }
        self.feed(Input::End)?;
        self.finish()
    }

    /// Write the preamble (or open the trace array). Runs once.
    pub fn begin(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        debug!("Translation started: {:?}", self.options);

        if let Some(trace) = self.trace.as_mut() {
            trace.open(&mut self.out)?;
        } else if !self.options.suppress_document_wrapper {
            self.out.write_all(self.document.preamble().as_bytes())?;
        }
        Ok(())
    }

    /// Consume one input step.
    ///
    /// A syntax error is written to the diagnostic sink and returned; the
    /// heading in progress is discarded and nothing more should be fed.
    pub fn feed(&mut self, input: Input) -> Result<Step> {
        self.begin()?;

        let position = self.position.advance(input);
        let warning = self.whitespace.classify(input);
        if let Some(w) = warning {
            self.warnings += 1;
            self.report(&Diagnostic::warning(position, w))?;
        }

        let action = match self.heading.step(input, position.column) {
            Ok(action) => action,
            Err(kind) => {
                debug!("Aborting at {:?}: {}", position, kind);
                self.report(&Diagnostic::error(position, kind))?;
                self.abort()?;
                return Err(MdhtmlError::Syntax { kind, position });
            }
        };
        if input.is_end() {
            self.end_of_input = true;
        }
        debug_assert!(self.snapshot().is_consistent());
        if let Action::Close { .. } = action {
            self.headings += 1;
        }
        log::trace!("{:?} at {}:{} -> {:?}", input, position.line, position.column, action);

        if self.trace.is_some() {
            let record = TraceRecord::new(input, &self.snapshot(), action.is_syntax());
            if let Some(trace) = self.trace.as_mut() {
                trace.record(&mut self.out, &record)?;
            }
        } else {
            self.emit(input, &action)?;
        }

        Ok(Step {
            position,
            action,
            warning,
        })
    }

    /// Write the postamble (or close the trace array) and flush.
    pub fn finish(&mut self) -> Result<()> {
        self.begin()?;
        if let Some(trace) = self.trace.as_mut() {
            trace.close(&mut self.out)?;
        } else if !self.options.suppress_document_wrapper {
            self.out.write_all(self.document.postamble().as_bytes())?;
        }
        self.out.flush()?;
        self.diag.flush()?;
        debug!(
            "Translation finished: {} headings, {} warnings",
            self.headings, self.warnings
        );
        Ok(())
    }

    /// Consume the translator and return its sinks.
    pub fn into_inner(self) -> (W, D) {
        (self.out, self.diag)
    }

    /// Close any open trace array and flush after a fatal error.
    fn abort(&mut self) -> Result<()> {
        if let Some(trace) = self.trace.as_mut() {
            trace.close(&mut self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn emit(&mut self, input: Input, action: &Action) -> Result<()> {
        match action {
            Action::Pass => self.echo(input)?,
            Action::Syntax | Action::Buffer => {}
            Action::Open(level) => write!(self.out, "<h{}>", level)?,
            Action::Close { level, text } => {
                self.out.write_all(text)?;
                write!(self.out, "</h{}>", level)?;
                self.echo(input)?;
            }
        }
        Ok(())
    }

    fn echo(&mut self, input: Input) -> Result<()> {
        if let Some(b) = input.byte() {
            self.out.write_all(&[b])?;
        }
        Ok(())
    }

    fn report(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        writeln!(self.diag, "{}", diagnostic)?;
        Ok(())
    }
}

/// Translate `input` to `out`, writing diagnostics to `diag`.
pub fn translate<R: Read, W: Write, D: Write>(
    input: R,
    out: W,
    diag: D,
    options: &Options,
) -> Result<()> {
    Translator::new(out, diag, *options).translate(input)
}

/// Everything a translation produced, captured in memory.
#[derive(Debug)]
pub struct Translation {
    pub output: String,
    pub diagnostics: String,
    pub result: Result<()>,
}

/// Translate a string in memory.
///
/// # Example
///
/// ```
/// use mdhtml_core::Options;
/// use mdhtml_render::translate_str;
///
/// let options = Options { suppress_document_wrapper: true, ..Options::default() };
/// let translation = translate_str("a  b", &options);
/// assert_eq!(translation.output, "a  b");
/// assert_eq!(
///     translation.diagnostics,
///     "warning: line 1 column 3: multiple spaces collapse into one in HTML rendering\n"
/// );
/// assert!(translation.result.is_ok());
/// ```
pub fn translate_str(input: &str, options: &Options) -> Translation {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    let result = translate(input.as_bytes(), &mut output, &mut diagnostics, options);
    Translation {
        output: String::from_utf8_lossy(&output).into_owned(),
        diagnostics: String::from_utf8_lossy(&diagnostics).into_owned(),
        result,
    }
}
