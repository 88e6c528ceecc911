//! Source buffers with line indexing and diagnostic context extraction.

use crate::location::SourceLocation;

/// The text of one source file loaded for a compilation run.
///
/// Owns the file name and full content, with precomputed line-start offsets
/// for fast line/column resolution. Diagnostics reference positions in the
/// buffer by byte offset; [`context_line`](Self::context_line) recovers the
/// surrounding line for rendering.
pub struct SourceBuffer {
    name: String,
    content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

/// The line of source containing a diagnostic location, plus caret alignment.
#[derive(Debug, PartialEq, Eq)]
pub struct ContextLine<'a> {
    /// Full text of the line, without the trailing newline.
    pub text: &'a str,
    /// Number of pad columns before the caret (the location's column minus one).
    pub caret_pad: usize,
}

impl SourceBuffer {
    /// Creates a buffer over the given content, precomputing line starts.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// The file name this buffer was loaded from (or a synthetic name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full text content of the buffer.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    ///
    /// Uses binary search on the precomputed line-start offsets.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Builds a [`SourceLocation`] anchored at the given byte offset.
    pub fn location_at(&self, offset: u32) -> SourceLocation {
        let (line, col) = self.line_col(offset);
        SourceLocation::new(line, col, offset)
    }

    /// Extracts the line of source containing `loc`, for caret rendering.
    ///
    /// The line start is derived from the location's column (`offset - (col - 1)`)
    /// and the line runs forward from the anchor to the next newline or the end
    /// of the buffer. Returns `None` when the anchor or derived line start does
    /// not fall inside the buffer on a character boundary, so a stale or
    /// malformed location yields no context instead of a panic.
    pub fn context_line(&self, loc: SourceLocation) -> Option<ContextLine<'_>> {
        let offset = loc.offset as usize;
        if offset > self.content.len() || loc.col == 0 {
            return None;
        }
        let caret_pad = (loc.col - 1) as usize;
        let line_start = offset.checked_sub(caret_pad)?;
        let line_end = self
            .content
            .get(offset..)?
            .find('\n')
            .map_or(self.content.len(), |i| offset + i);
        let text = self.content.get(line_start..line_end)?;
        Some(ContextLine { text, caret_pad })
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buffer(content: &str) -> SourceBuffer {
        SourceBuffer::new("test.veld", content)
    }

    #[test]
    fn line_starts_computation() {
        let b = make_buffer("abc\ndef\nghi");
        assert_eq!(b.line_col(0), (1, 1));
        assert_eq!(b.line_col(4), (2, 1));
        assert_eq!(b.line_col(5), (2, 2));
        assert_eq!(b.line_col(8), (3, 1));
    }

    #[test]
    fn location_at_matches_line_col() {
        let b = make_buffer("abc\ndef");
        let loc = b.location_at(5);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.col, 2);
        assert_eq!(loc.offset, 5);
    }

    #[test]
    fn context_line_single_line() {
        let b = make_buffer("let x = 5");
        // Anchor at column 5 (the 'x').
        let loc = SourceLocation::new(1, 5, 4);
        let ctx = b.context_line(loc).unwrap();
        assert_eq!(ctx.text, "let x = 5");
        assert_eq!(ctx.text.len(), 9);
        assert_eq!(ctx.caret_pad, 4);
    }

    #[test]
    fn context_line_stops_at_newline() {
        let b = make_buffer("first line\nsecond line\nthird");
        let loc = b.location_at(18); // the 'l' in "second line"
        let ctx = b.context_line(loc).unwrap();
        assert_eq!(ctx.text, "second line");
        assert_eq!(ctx.caret_pad, 7);
    }

    #[test]
    fn context_line_at_end_of_buffer() {
        let b = make_buffer("no trailing newline");
        let loc = b.location_at(3);
        let ctx = b.context_line(loc).unwrap();
        assert_eq!(ctx.text, "no trailing newline");
    }

    #[test]
    fn context_line_length_is_distance_to_newline() {
        let b = make_buffer("abc\ndefgh\nij");
        let loc = b.location_at(4); // start of "defgh"
        let ctx = b.context_line(loc).unwrap();
        assert_eq!(ctx.text.len(), 5);
    }

    #[test]
    fn out_of_bounds_anchor_yields_no_context() {
        let b = make_buffer("short");
        let loc = SourceLocation::new(1, 1, 99);
        assert!(b.context_line(loc).is_none());
    }

    #[test]
    fn column_past_line_start_yields_no_context() {
        let b = make_buffer("ab");
        // Column claims 10 pad columns before offset 1; the subtraction
        // underflows and no context is produced.
        let loc = SourceLocation::new(1, 11, 1);
        assert!(b.context_line(loc).is_none());
    }

    #[test]
    fn zero_column_yields_no_context() {
        let b = make_buffer("ab");
        let loc = SourceLocation::new(1, 0, 0);
        assert!(b.context_line(loc).is_none());
    }

    #[test]
    fn empty_buffer() {
        let b = make_buffer("");
        assert_eq!(b.line_col(0), (1, 1));
        let ctx = b.context_line(SourceLocation::new(1, 1, 0)).unwrap();
        assert_eq!(ctx.text, "");
        assert_eq!(ctx.caret_pad, 0);
    }
}
