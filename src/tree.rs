//! Arena-backed tree of cells.
//!
//! All nodes of one build live in a single `Vec`, addressed by [`NodeId`]. Parents and
//! children are stored as ids, so node identity is plain index equality and no node
//! needs a back-reference patched in after construction. Node 0 is always the root;
//! branches follow in pre-order, one per cell.

use crate::sequence::narrow_sequence;
use crate::traversal::{depth_first_down, Hierarchy};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// Handle to a node of one particular [`CellTree`].
///
/// Ids are only meaningful for the tree that produced them.
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    #[must_use]
    /// Position of the node in its tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether a node stands for the whole document or for one cell.
pub enum NodeKind {
    /// The document itself; owns the top-level branches.
    Root,
    /// One cell of the document.
    Branch {
        /// Index of the cell.
        cell: usize,
        /// Concluding heading level, `None` for non-heading cells.
        level: Option<u8>,
    },
}

#[derive(Clone, Debug)]
/// One node in the arena.
pub struct TreeNode {
    /// Root or branch payload.
    pub kind: NodeKind,
    /// Containing node; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Directly nested nodes, in document order.
    pub children: Vec<NodeId>,
}

/// Hierarchy of cells inferred from their headings.
///
/// Built fresh for every query by [`crate::hierarchy`]; never updated in place.
#[derive(Clone, Debug)]
pub struct CellTree {
    nodes: Vec<TreeNode>,
    by_cell: HashMap<usize, NodeId>,
}

impl Default for CellTree {
    fn default() -> Self {
        Self {
            nodes: vec![TreeNode {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
            by_cell: HashMap::new(),
        }
    }
}

impl CellTree {
    /// Appends a branch for `cell` as the last child of `parent`.
    pub(crate) fn push_branch(&mut self, parent: NodeId, cell: usize, level: Option<u8>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            kind: NodeKind::Branch { cell, level },
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        self.by_cell.insert(cell, id);
        id
    }

    #[must_use]
    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[must_use]
    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Whether the tree holds no cells.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    #[must_use]
    /// Node stored under `id`.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    /// Cell index held by `id`, `None` for the root.
    pub fn cell(&self, id: NodeId) -> Option<usize> {
        match self.node(id)?.kind {
            NodeKind::Root => None,
            NodeKind::Branch { cell, .. } => Some(cell),
        }
    }

    #[must_use]
    /// Concluding heading level of `id`, `None` for the root and non-heading cells.
    pub fn level(&self, id: NodeId) -> Option<u8> {
        match self.node(id)?.kind {
            NodeKind::Root => None,
            NodeKind::Branch { level, .. } => level,
        }
    }

    #[must_use]
    /// Whether `id` is a heading branch.
    pub fn is_heading(&self, id: NodeId) -> bool {
        self.level(id).is_some()
    }

    #[must_use]
    /// Branch holding the cell with the given index.
    pub fn node_for_cell(&self, cell: usize) -> Option<NodeId> {
        self.by_cell.get(&cell).copied()
    }

    #[must_use]
    /// Cells in the subtree under `id`, in document order (`id` itself first).
    pub fn cells_in(&self, id: NodeId) -> Vec<usize> {
        narrow_sequence(depth_first_down(self, id), |node| self.cell(node)).collect()
    }

    /// All branches in document order.
    pub fn branches(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(NodeId)
    }
}

impl Hierarchy for CellTree {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map_or(&[], |n| n.children.as_slice())
    }
}
