//! Trace output.
//!
//! In trace mode every input step, including the end-of-input sentinel,
//! becomes one JSON object in a streamed array. Code points are written
//! as integers so control characters and partial UTF-8 sequences need no
//! escaping.

use mdhtml_core::{HeadingPhase, Input, ParseState, WhitespaceRun};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// State after consuming one input step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Byte value, or -1 for end of input
    pub code_point: i32,
    pub line: usize,
    pub column: usize,
    pub heading_phase: HeadingPhase,
    pub whitespace_run: WhitespaceRun,
    pub heading_level: u8,
    pub escape_pending: bool,
    /// The character was consumed as markup
    pub syntax: bool,
    pub end_of_input: bool,
}

impl TraceRecord {
    pub fn new(input: Input, state: &ParseState, syntax: bool) -> Self {
        Self {
            code_point: input.code_point(),
            line: state.line,
            column: state.column,
            heading_phase: state.heading_phase,
            whitespace_run: state.whitespace_run,
            heading_level: state.heading_level,
            escape_pending: state.escape_pending,
            syntax,
            end_of_input: state.end_of_input,
        }
    }
}

/// Streams [`TraceRecord`]s as a JSON array.
#[derive(Debug, Default)]
pub struct TraceWriter {
    records: usize,
    opened: bool,
    closed: bool,
}

impl TraceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Write the opening bracket.
    pub fn open<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.opened {
            out.write_all(b"[")?;
            self.opened = true;
        }
        Ok(())
    }

    /// Append one record to the array.
    pub fn record<W: Write>(&mut self, out: &mut W, record: &TraceRecord) -> io::Result<()> {
        self.open(out)?;
        let separator: &[u8] = if self.records == 0 { b"\n" } else { b",\n" };
        out.write_all(separator)?;
        serde_json::to_writer(&mut *out, record).map_err(io::Error::from)?;
        self.records += 1;
        Ok(())
    }

    /// Close the array. Later calls do nothing.
    pub fn close<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.open(out)?;
        out.write_all(b"\n]\n")?;
        self.closed = true;
        Ok(())
    }
}
