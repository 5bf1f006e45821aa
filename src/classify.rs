//! Heading detection for cell content.
//!
//! The classifier parses a cell's text with the grammar of its [`Format`] and collects
//! the declared depth of every heading in document order. Two facts are derived from
//! that list: whether the cell is a heading cell at all, and its *concluding level*,
//! the depth of the last heading. Text following the last heading does not change
//! the concluding level.

use crate::cell::Cell;
use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use std::borrow::Cow;
use streaming_iterator::StreamingIterator;
use tracing::{trace, warn};
use tree_sitter::{Parser, Query, QueryCursor};

/// Finds heading tokens in cells using a tree-sitter grammar.
///
/// Holds one parser and one compiled query so a whole document can be classified
/// without rebuilding either per cell.
pub struct HeadingClassifier<F: Format> {
    format: F,
    parser: Parser,
    query: Query,
}

impl HeadingClassifier<MarkdownFormat> {
    /// Classifier for markdown cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the markdown grammar or heading query fails to load.
    pub fn markdown() -> Result<Self> {
        Self::new(MarkdownFormat)
    }
}

impl<F: Format> HeadingClassifier<F> {
    /// Prepares a parser and heading query for `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar is incompatible with the linked tree-sitter
    /// runtime or the format's heading query does not compile.
    pub fn new(format: F) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let query = Query::new(&language, format.heading_query())?;
        Ok(Self {
            format,
            parser,
            query,
        })
    }

    /// Depths of all headings in `text`, in document order.
    ///
    /// Notebook cells usually lack a final newline. The grammar only closes a heading
    /// line at a line ending, so one is appended before parsing when missing.
    pub fn heading_levels(&mut self, text: &str) -> Vec<u8> {
        let text: Cow<'_, str> = if text.is_empty() || text.ends_with('\n') {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(format!("{text}\n"))
        };
        let Some(tree) = self.parser.parse(text.as_ref(), None) else {
            warn!("Parser returned no tree, treating content as heading-free");
            return Vec::new();
        };

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), text.as_bytes());
        let mut headings = Vec::new();
        while let Some(found) = matches.next() {
            for capture in found.captures {
                if let Some(depth) = self.format.heading_depth(capture.node) {
                    headings.push((capture.node.start_byte(), depth));
                }
            }
        }
        headings.sort_by_key(|&(start, _)| start);
        headings.dedup();
        headings.into_iter().map(|(_, depth)| depth).collect()
    }

    /// Concluding level of `cell` if it is a heading cell, `None` otherwise.
    ///
    /// Non-markup cells are never headings and are not parsed.
    pub fn classify(&mut self, cell: &Cell) -> Option<u8> {
        if !cell.is_markup() {
            return None;
        }
        let level = self.heading_levels(&cell.source).last().copied();
        if let Some(level) = level {
            trace!(cell = cell.index, level, "heading cell");
        }
        level
    }

    /// Whether `cell` contains at least one heading.
    pub fn is_heading(&mut self, cell: &Cell) -> bool {
        self.classify(cell).is_some()
    }

    /// Depth of the last heading in `cell`, or `fallback` when it has none.
    pub fn concluding_level(&mut self, cell: &Cell, fallback: u8) -> u8 {
        self.classify(cell).unwrap_or(fallback)
    }
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
