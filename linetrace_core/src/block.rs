//! Immutable line-range values over a revision snapshot.

use std::fmt;
use std::sync::Arc;

use crate::lines;

/// A contiguous half-open range of lines `[start, end)` within one revision
/// snapshot.
///
/// The snapshot's line sequence is shared, so cloning a block or deriving the
/// corresponding block in an older revision never copies line contents.
/// Equality and hashing are structural across the lines and both bounds, and
/// a block never mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    source: Arc<[String]>,
    start: usize,
    end: usize,
}

impl Block {
    /// Tokenize `text` and select `[start, end)` within it.
    #[must_use]
    pub fn new(text: &str, start: usize, end: usize) -> Self {
        Self::from_lines(Arc::from(lines::tokenize(text)), start, end)
    }

    /// Adopt an existing line sequence and bounds as-is.
    ///
    /// Bounds are not clamped here. The back-projector clamps every block it
    /// produces; callers supplying bounds directly own their validity.
    #[must_use]
    pub fn from_lines(source: Arc<[String]>, start: usize, end: usize) -> Self {
        Self { source, start, end }
    }

    /// The selected lines joined with `\n`, without a trailing newline.
    ///
    /// An empty range yields an empty string.
    #[must_use]
    pub fn content(&self) -> String {
        self.source[self.start..self.end].join("\n")
    }

    /// First line of the range.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Line just past the range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The full line sequence of the snapshot this block lives in.
    #[must_use]
    pub fn source(&self) -> &[String] {
        &self.source
    }
}

/// Diagnostic rendering of the whole snapshot with the selected range
/// bracketed by marker lines.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.source.iter().take(self.start) {
            writeln!(f, "{line}")?;
        }
        f.write_str("<-----------------------------\n")?;
        for line in self.source.iter().take(self.end).skip(self.start) {
            writeln!(f, "{line}")?;
        }
        f.write_str("----------------------------->\n")?;
        for line in self.source.iter().skip(self.end) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
