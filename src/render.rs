//! Renders a cell tree for people (box-drawing outline) and for programs (JSON).

use crate::cell::{Cell, CellKind};
use crate::traversal::Hierarchy;
use crate::tree::{CellTree, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

#[derive(Serialize, Debug, PartialEq, Eq)]
/// Nested, serialisable view of one branch and everything under it.
pub struct Outline {
    /// Cell index.
    pub cell: usize,
    /// Concluding heading level, absent for non-heading cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// First non-blank line of the cell.
    pub summary: String,
    /// Nested branches.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Outline>,
}

/// Nested outline of every top-level branch.
#[must_use]
pub fn outline(tree: &CellTree, cells: &[Cell]) -> Vec<Outline> {
    let by_index = index_cells(cells);
    tree.children(tree.root())
        .iter()
        .filter_map(|&node| outline_node(tree, &by_index, node))
        .collect()
}

fn outline_node(tree: &CellTree, cells: &HashMap<usize, &Cell>, node: NodeId) -> Option<Outline> {
    let cell = tree.cell(node)?;
    Some(Outline {
        cell,
        level: tree.level(node),
        summary: cells.get(&cell).map_or_else(String::new, |c| c.summary().to_string()),
        children: tree
            .children(node)
            .iter()
            .filter_map(|&child| outline_node(tree, cells, child))
            .collect(),
    })
}

/// Box-drawing prefix for a node, given which of its ancestors still have siblings
/// coming (outermost first).
fn tree_prefix(open_ancestors: &[bool], is_last: bool, indent_width: usize) -> String {
    let width = indent_width.max(2);
    let mut prefix = String::new();

    for &open in open_ancestors {
        if open {
            prefix.push('│');
            prefix.push_str(&" ".repeat(width - 1));
        } else {
            prefix.push_str(&" ".repeat(width));
        }
    }

    prefix.push(if is_last { '└' } else { '├' });
    prefix.push_str(&"─".repeat(width - 2));
    prefix.push(' ');
    prefix
}

/// Renders the tree as an indented outline, one line per cell.
#[must_use]
pub fn render_tree(tree: &CellTree, cells: &[Cell], indent_width: usize) -> String {
    let by_index = index_cells(cells);
    let mut out = String::new();
    let mut open = Vec::new();
    render_children(tree, &by_index, tree.root(), indent_width, &mut open, &mut out);
    out
}

fn render_children(
    tree: &CellTree,
    cells: &HashMap<usize, &Cell>,
    node: NodeId,
    indent_width: usize,
    open: &mut Vec<bool>,
    out: &mut String,
) {
    let children = tree.children(node);
    for (i, &child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let Some(cell) = tree.cell(child) else {
            continue;
        };
        let label = match tree.level(child) {
            Some(level) => format!("H{level}"),
            None => cells
                .get(&cell)
                .map_or("cell", |c| kind_label(c))
                .to_string(),
        };
        let summary = cells.get(&cell).map_or("", |c| c.summary());
        let line = format!(
            "{}[{cell}] {label} {summary}",
            tree_prefix(open, is_last, indent_width)
        );
        let _ = writeln!(out, "{}", line.trim_end());

        open.push(!is_last);
        render_children(tree, cells, child, indent_width, open, out);
        open.pop();
    }
}

fn kind_label(cell: &Cell) -> &'static str {
    match cell.kind {
        CellKind::Markup => "text",
        CellKind::Code => "code",
        CellKind::Raw => "raw",
    }
}

fn index_cells(cells: &[Cell]) -> HashMap<usize, &Cell> {
    cells.iter().map(|cell| (cell.index, cell)).collect()
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
