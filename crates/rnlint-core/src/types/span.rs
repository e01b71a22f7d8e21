//! Source spans and human-facing locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Zero-width span at `offset`, used for insertions.
    pub fn empty(offset: u32) -> Self {
        Self { start: offset, end: offset }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two spans share at least one byte.
    pub fn overlaps(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slice `source` by this span. Out-of-range spans yield an empty string.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start as usize..self.end as usize).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column (columns count characters, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Byte offset → `Location` lookup built once per source file.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx as u32 + 1);
            }
        }
        Self { line_starts }
    }

    pub fn location(&self, source: &str, offset: u32) -> Location {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx] as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(line_start..end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        Location {
            line: line_idx as u32 + 1,
            column: column as u32 + 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_one_based() {
        let source = "ab\ncd\n\nef";
        let index = LineIndex::new(source);
        assert_eq!(index.location(source, 0), Location { line: 1, column: 1 });
        assert_eq!(index.location(source, 4), Location { line: 2, column: 2 });
        assert_eq!(index.location(source, 7), Location { line: 4, column: 1 });
        assert_eq!(index.line_count(), 4);
    }

    #[test]
    fn columns_count_chars() {
        let source = "é = 'x'";
        let index = LineIndex::new(source);
        // 'é' is two bytes
        assert_eq!(index.location(source, 2), Location { line: 1, column: 2 });
    }

    #[test]
    fn overlap_is_exclusive_at_edges() {
        assert!(!Span::new(0, 3).overlaps(Span::new(3, 5)));
        assert!(Span::new(0, 4).overlaps(Span::new(3, 5)));
        assert!(Span::empty(3).overlaps(Span::new(0, 5)));
        assert!(!Span::empty(5).overlaps(Span::new(0, 5)));
    }
}
