//! Reconstructs the heading hierarchy from a flat run of cells.
//!
//! A heading cell owns every following cell up to the next heading whose concluding
//! level is the same or shallower. Non-heading cells are always leaves. The parse is a
//! recursive descent that hands back the position where the caller should resume;
//! nesting depth is bounded by the number of distinct heading levels, not by document
//! length.

use crate::cell::Cell;
use crate::classify::HeadingClassifier;
use crate::error::Result;
use crate::formats::Format;
use crate::tree::{CellTree, NodeId};
use tracing::debug;

/// Builds the tree for `cells`, classifying each one with `classifier`.
pub fn build<F: Format>(cells: &[Cell], classifier: &mut HeadingClassifier<F>) -> CellTree {
    let levels: Vec<(usize, Option<u8>)> = cells
        .iter()
        .map(|cell| (cell.index, classifier.classify(cell)))
        .collect();
    from_levels(&levels)
}

/// Builds the tree for markdown `cells`.
///
/// # Errors
///
/// Returns an error if the markdown grammar cannot be loaded.
pub fn build_markdown(cells: &[Cell]) -> Result<CellTree> {
    let mut classifier = HeadingClassifier::markdown()?;
    Ok(build(cells, &mut classifier))
}

/// Builds the tree from already classified cells: `(cell index, concluding level)`
/// pairs in document order, `None` marking a non-heading cell.
#[must_use]
pub fn from_levels(levels: &[(usize, Option<u8>)]) -> CellTree {
    let mut tree = CellTree::default();
    let mut cursor = 0;
    while cursor < levels.len() {
        let (_, next) = parse_subtree(&mut tree, levels, cursor, NodeId::ROOT);
        cursor = next;
    }
    debug!(
        cells = levels.len(),
        headings = levels.iter().filter(|(_, level)| level.is_some()).count(),
        top_level = tree.node(NodeId::ROOT).map_or(0, |root| root.children.len()),
        "built cell tree"
    );
    tree
}

/// Parses the subtree starting at `start` under `parent`, returning its node and the
/// position just past the cells it consumed.
fn parse_subtree(
    tree: &mut CellTree,
    levels: &[(usize, Option<u8>)],
    start: usize,
    parent: NodeId,
) -> (NodeId, usize) {
    let (cell, level) = levels[start];
    let node = tree.push_branch(parent, cell, level);
    let Some(level) = level else {
        return (node, start + 1);
    };

    let mut next = start + 1;
    while let Some(&(_, candidate)) = levels.get(next) {
        if candidate.is_some_and(|child_level| child_level <= level) {
            break;
        }
        let (_, resume) = parse_subtree(tree, levels, next, node);
        next = resume;
    }
    (node, next)
}

#[cfg(test)]
#[path = "tests/hierarchy.rs"]
mod tests;
