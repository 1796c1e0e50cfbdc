//! Line buffer for console input

/// Maximum line length in bytes
pub const MAX_LINE: usize = 256;

/// Line input buffer
#[derive(Default)]
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    /// Create empty buffer
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Push a character; input past `MAX_LINE` bytes is dropped
    pub fn push(&mut self, c: char) {
        if self.buf.len() + c.len_utf8() <= MAX_LINE {
            self.buf.push(c);
        }
    }

    /// Remove last character
    pub fn backspace(&mut self) {
        self.buf.pop();
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Set buffer contents from string, truncated to `MAX_LINE` bytes
    pub fn set(&mut self, s: &str) {
        self.buf.clear();
        for c in s.chars() {
            self.push(c);
        }
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Get buffer length in bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
