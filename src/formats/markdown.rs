//! Markdown format implementation using tree-sitter-md.
//!
//! Both ATX headings (`#` through `######`) and setext headings (text underlined
//! with `=` or `-`) count as heading tokens.

use crate::formats::Format;

/// Tree-sitter queries for ATX and setext markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_depth(&self, heading: tree_sitter::Node<'_>) -> Option<u8> {
        let mut cursor = heading.walk();
        let depth = heading
            .children(&mut cursor)
            .find_map(|child| marker_depth(child.kind()));
        depth
    }
}

fn marker_depth(kind: &str) -> Option<u8> {
    match kind {
        "atx_h1_marker" | "setext_h1_underline" => Some(1),
        "atx_h2_marker" | "setext_h2_underline" => Some(2),
        "atx_h3_marker" => Some(3),
        "atx_h4_marker" => Some(4),
        "atx_h5_marker" => Some(5),
        "atx_h6_marker" => Some(6),
        _ => None,
    }
}
