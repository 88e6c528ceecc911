//! Positions within a source buffer, as carried by diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position within a single [`SourceBuffer`](crate::SourceBuffer).
///
/// `line` and `col` are 1-indexed display coordinates. `offset` is the byte
/// offset of the start of the offending lexeme within the buffer the location
/// was produced from; it anchors context extraction during rendering.
///
/// A diagnostic with no usable position carries `Option<SourceLocation>`
/// rather than a sentinel value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number (1-indexed).
    pub col: u32,
    /// Byte offset of the start of the lexeme within the owning buffer.
    pub offset: u32,
}

impl SourceLocation {
    /// Creates a new location.
    pub fn new(line: u32, col: u32, offset: u32) -> Self {
        Self { line, col, offset }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
