//! Format trait and implementations for the structured text held in cells.
//!
//! A `Format` tells the heading classifier which tree-sitter grammar to parse cell
//! content with, which query selects heading nodes, and how to read a heading's depth
//! off a matched node. Markdown is the only format shipped today.

pub mod markdown;

/// Structured-text collaborator used to find heading tokens in cell content.
pub trait Format {
    /// Grammar used to parse cell content.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node, whatever its style.
    fn heading_query(&self) -> &str;
    /// Declared depth of a heading node captured by [`Format::heading_query`].
    ///
    /// Returns `None` when the node carries no recognisable depth marker.
    fn heading_depth(&self, heading: tree_sitter::Node<'_>) -> Option<u8>;
}
