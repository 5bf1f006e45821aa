//! Cell representation for documents split into ordered units.
//!
//! A cell is one addressable element of a notebook-style document. Cells carry no
//! hierarchy of their own: nesting is inferred later from the headings found in
//! their text.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// What a cell's text is meant to be read as.
pub enum CellKind {
    /// Prose written in a markup language; the only kind that can hold headings.
    Markup,
    /// Source code for execution.
    Code,
    /// Raw text passed through untouched.
    Raw,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered, content-bearing unit of a document.
pub struct Cell {
    /// Position of the cell in the document.
    pub index: usize,
    /// Content kind deciding whether the text is scanned for headings.
    pub kind: CellKind,
    /// Raw cell text.
    pub source: String,
}

impl Cell {
    #[must_use]
    /// Creates a cell at `index`.
    pub fn new(index: usize, kind: CellKind, source: impl Into<String>) -> Self {
        Self {
            index,
            kind,
            source: source.into(),
        }
    }

    #[must_use]
    /// Whether the cell holds markup prose.
    pub fn is_markup(&self) -> bool {
        self.kind == CellKind::Markup
    }

    #[must_use]
    /// First non-blank line of the cell, used as a short label.
    pub fn summary(&self) -> &str {
        self.source
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}
