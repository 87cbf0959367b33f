//! Growable buffer for heading text.
//!
//! Heading text is collected byte by byte until the end of the line, then
//! trimmed once. Storage grows in fixed steps of [`HEADING_TEXT_BASE_SIZE`]
//! so a long heading never reallocates per character.

/// Growth step, in bytes, for heading text storage.
pub const HEADING_TEXT_BASE_SIZE: usize = 50;

/// Whitespace as the C locale defines it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Append-only text buffer with trim-on-finalize.
#[derive(Debug, Clone)]
pub struct HeadingBuffer {
    bytes: Vec<u8>,
    /// Set once any non-whitespace byte has been appended
    has_text: bool,
}

impl Default for HeadingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingBuffer {
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(HEADING_TEXT_BASE_SIZE),
            has_text: false,
        }
    }

    /// Append one byte, growing storage by a fixed step when full.
    pub fn append(&mut self, b: u8) {
        if self.bytes.len() == self.bytes.capacity() {
            self.bytes.reserve_exact(HEADING_TEXT_BASE_SIZE);
        }
        self.bytes.push(b);
        if !is_space(b) {
            self.has_text = true;
        }
    }

    /// Whether any non-whitespace byte has been appended.
    pub fn has_text(&self) -> bool {
        self.has_text
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Consume the buffer and return its contents with leading and
    /// trailing whitespace removed.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_parser::HeadingBuffer;
    ///
    /// let mut buffer = HeadingBuffer::new();
    /// for b in b"  Hello World \t" {
    ///     buffer.append(*b);
    /// }
    /// assert_eq!(buffer.finalize(), b"Hello World");
    /// ```
    pub fn finalize(self) -> Vec<u8> {
        let mut bytes = self.bytes;
        let end = bytes
            .iter()
            .rposition(|b| !is_space(*b))
            .map_or(0, |i| i + 1);
        bytes.truncate(end);
        let start = bytes
            .iter()
            .position(|b| !is_space(*b))
            .unwrap_or(bytes.len());
        bytes.drain(..start);
        bytes
    }

    /// Release the buffer without producing output.
    pub fn discard(self) {}
}
