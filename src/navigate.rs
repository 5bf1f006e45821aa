//! Navigation queries answered in terms of cell indices.
//!
//! Each query locates the cell's branch in a freshly built [`CellTree`] and reads the
//! answer off the tree or off one of the traversal orders. Cell ranges are half-open,
//! ready to become a selection in whatever editor is driving the navigation.

use crate::error::Result;
use crate::sequence::{narrow_sequence, nth, require};
use crate::traversal::{depth_first_down, walk, Hierarchy, Order};
use crate::tree::{CellTree, NodeId};
use std::ops::Range;

/// Branch for `cell`, failing when the tree has no such cell.
///
/// # Errors
///
/// Returns a precondition error if `cell` is not part of the tree.
pub fn locate(tree: &CellTree, cell: usize) -> Result<NodeId> {
    require(tree.node_for_cell(cell), &format!("cell {cell} in the document"))
}

/// Heading cell containing `cell`; `None` at the top level.
///
/// # Errors
///
/// Returns a precondition error if `cell` is not part of the tree.
pub fn parent_cell(tree: &CellTree, cell: usize) -> Result<Option<usize>> {
    let node = locate(tree, cell)?;
    Ok(tree.parent(node).and_then(|parent| tree.cell(parent)))
}

/// Cells covered by the subtree of `cell`, the cell itself included.
///
/// # Errors
///
/// Returns a precondition error if `cell` is not part of the tree.
pub fn subtree_range(tree: &CellTree, cell: usize) -> Result<Range<usize>> {
    let node = locate(tree, cell)?;
    let covered = tree.cells_in(node);
    Ok(match (covered.first(), covered.last()) {
        (Some(&first), Some(&last)) => first..last + 1,
        _ => cell..cell + 1,
    })
}

/// Cells covered by `cell` and all of its siblings' subtrees.
///
/// At the top level the siblings are every top-level branch, so the range spans the
/// whole document.
///
/// # Errors
///
/// Returns a precondition error if `cell` is not part of the tree.
pub fn siblings_range(tree: &CellTree, cell: usize) -> Result<Range<usize>> {
    let node = locate(tree, cell)?;
    let siblings = tree
        .siblings(node)
        .iter()
        .flat_map(|&sibling| depth_first_down(tree, sibling));
    Ok(span(tree, siblings).unwrap_or(cell..cell + 1))
}

/// The `n`-th cell of `order` started at `cell`, where `n = 0` is `cell` itself.
///
/// The root is skipped: it is not a cell.
///
/// # Errors
///
/// Returns a precondition error if `cell` is not part of the tree.
pub fn step(tree: &CellTree, cell: usize, order: Order, n: usize) -> Result<Option<usize>> {
    Ok(nth(cells(tree, cell, order)?, n))
}

/// Every cell of `order` started at `cell`, lazily.
///
/// # Errors
///
/// Returns a precondition error if `cell` is not part of the tree.
pub fn cells(
    tree: &CellTree,
    cell: usize,
    order: Order,
) -> Result<impl Iterator<Item = usize> + '_> {
    let node = locate(tree, cell)?;
    Ok(narrow_sequence(walk(tree, order, node), move |id| tree.cell(id)))
}

fn span(tree: &CellTree, nodes: impl IntoIterator<Item = NodeId>) -> Option<Range<usize>> {
    let mut cells = narrow_sequence(nodes, |id| tree.cell(id));
    let first = cells.next()?;
    let last = cells.last().unwrap_or(first);
    Some(first..last + 1)
}

#[cfg(test)]
#[path = "tests/navigate.rs"]
mod tests;
