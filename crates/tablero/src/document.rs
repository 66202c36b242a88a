//! Target document handling: marker location and region splicing
//!
//! The target document is an ordered sequence of lines containing two
//! sentinel comments. The region strictly between them is replaced
//! wholesale on every update; the markers themselves are never touched
//! and everything outside the region is preserved.
//!
//! The document is read whole, mutated in memory, and written whole.
//! There is no locking: a concurrent writer racing an update loses,
//! which is a documented hazard of the single-operator usage pattern.

use crate::error::{TableroError, TableroResult};
use std::path::{Path, PathBuf};

/// Line that opens the generated region (matched exactly)
pub const START_MARKER: &str = "<!-- START_TABLE -->";

/// Line that closes the generated region (matched after trimming)
pub const END_MARKER: &str = "<!-- END_TABLE -->";

/// The replaceable line range between the markers.
///
/// `start` is the line index directly after the start marker; `end` is
/// the index of the end-marker line. The half-open range `start..end`
/// is what a splice replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First line index of the replaceable region
    pub start: usize,
    /// Exclusive end: index of the end-marker line
    pub end: usize,
}

/// A text file modeled as an ordered sequence of lines
#[derive(Debug, Clone)]
pub struct TargetDocument {
    path: PathBuf,
    source: String,
    lines: Vec<String>,
}

impl TargetDocument {
    /// Read a document from disk
    pub fn from_path(path: &Path) -> TableroResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| TableroError::DocumentRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_content(&content, path))
    }

    /// Build a document from text; `path` is used for errors and writes
    #[must_use]
    pub fn from_content(content: &str, path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            source: content.to_string(),
            lines: content.lines().map(String::from).collect(),
        }
    }

    /// Document lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The raw text the document was built from.
    ///
    /// Splicing mutates the line sequence, not this; comparing it with
    /// [`render`](Self::render) shows whether a write would change the
    /// bytes on disk, line-ending normalization included.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Path the document belongs to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locate the replaceable region between the markers.
    ///
    /// The start marker must match a line exactly; the end marker is
    /// matched after trimming surrounding whitespace and must appear at
    /// or after the insertion point.
    pub fn locate_region(&self) -> TableroResult<Region> {
        let start_idx = self
            .lines
            .iter()
            .position(|line| line == START_MARKER)
            .ok_or_else(|| TableroError::start_marker_missing(START_MARKER, &self.path))?;

        let start = start_idx + 1;
        let end = self.lines[start..]
            .iter()
            .position(|line| line.trim() == END_MARKER)
            .map(|offset| start + offset)
            .ok_or_else(|| TableroError::end_marker_missing(END_MARKER, &self.path))?;

        Ok(Region { start, end })
    }

    /// Replace the region between the markers with `block`.
    pub fn splice(&mut self, block: &[String]) -> TableroResult<()> {
        let region = self.locate_region()?;
        self.lines
            .splice(region.start..region.end, block.iter().cloned());
        Ok(())
    }

    /// Render the document back to text with a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Overwrite the backing file with the current line sequence.
    ///
    /// Full-file rewrite; only called once every upstream step has
    /// succeeded, so a failed run never leaves a partial document.
    pub fn write(&self) -> TableroResult<()> {
        std::fs::write(&self.path, self.render()).map_err(|source| TableroError::DocumentWrite {
            path: self.path.clone(),
            source,
        })
    }
}
