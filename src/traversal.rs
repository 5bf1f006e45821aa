//! Lazy traversal orders over any tree exposing parent and children accessors.
//!
//! Every order is an iterator struct that carries its own resumption state, so callers
//! can stop after the element they need (`nth`, `find`, `take`) without the rest of the
//! order ever being computed. Nothing here knows about cells: the engine only sees the
//! [`Hierarchy`] trait, which `CellTree` implements and [`Accessors`] builds from a pair
//! of closures.

use clap::ValueEnum;
use serde::Serialize;
use std::collections::VecDeque;
use std::marker::PhantomData;

/// Parent and children accessors a tree must provide to be traversed.
pub trait Hierarchy {
    /// Handle identifying one node. Handles are compared by equality.
    type Node: Copy + Eq;

    /// Parent of `node`, `None` for the top of the tree.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Ordered children of `node`.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Children of the parent of `node` (including `node`), empty at the top.
    fn siblings(&self, node: Self::Node) -> &[Self::Node] {
        match self.parent(node) {
            Some(parent) => self.children(parent),
            None => &[],
        }
    }

    /// Sibling immediately after `node`.
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node> {
        let siblings = self.siblings(node);
        let position = siblings.iter().position(|&n| n == node)?;
        siblings.get(position + 1).copied()
    }

    /// Sibling immediately before `node`.
    fn prev_sibling(&self, node: Self::Node) -> Option<Self::Node> {
        let siblings = self.siblings(node);
        let position = siblings.iter().position(|&n| n == node)?;
        position
            .checked_sub(1)
            .and_then(|i| siblings.get(i))
            .copied()
    }
}

/// A [`Hierarchy`] assembled from two caller-provided closures.
///
/// Lets the traversal orders run over trees that do not implement the trait
/// themselves, e.g. a plain parent table next to a children table.
pub struct Accessors<'t, N, P, C> {
    parent: P,
    children: C,
    _node: PhantomData<&'t [N]>,
}

impl<'t, N, P, C> Accessors<'t, N, P, C>
where
    N: Copy + Eq,
    P: Fn(N) -> Option<N>,
    C: Fn(N) -> &'t [N],
{
    #[must_use]
    /// Wraps a parent accessor and a children accessor.
    pub fn new(parent: P, children: C) -> Self {
        Self {
            parent,
            children,
            _node: PhantomData,
        }
    }
}

impl<'t, N, P, C> Hierarchy for Accessors<'t, N, P, C>
where
    N: Copy + Eq,
    P: Fn(N) -> Option<N>,
    C: Fn(N) -> &'t [N],
{
    type Node = N;

    fn parent(&self, node: N) -> Option<N> {
        (self.parent)(node)
    }

    fn children(&self, node: N) -> &[N] {
        (self.children)(node)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Names of the traversal orders, for choosing one at runtime.
pub enum Order {
    /// Pre-order over the anchor's subtree.
    DepthFirstDown,
    /// Whole-tree pre-order continued from the anchor.
    DepthFirst,
    /// Level order over the anchor's subtree.
    BreadthFirst,
    /// Later siblings, then the parent, climbing to the top.
    ForwardAndUp,
    /// Earlier siblings in reverse, then the parent, climbing to the top.
    BackwardAndUp,
    /// Later siblings at every level, never the ancestors themselves.
    ForwardAndOver,
    /// Descend when possible, otherwise step forward and up.
    SlideDown,
}

impl Order {
    /// Every order, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::DepthFirstDown,
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::ForwardAndUp,
        Self::BackwardAndUp,
        Self::ForwardAndOver,
        Self::SlideDown,
    ];
}

/// Starts the traversal named by `order` at `anchor`.
#[must_use]
pub fn walk<'h, H: Hierarchy>(
    hierarchy: &'h H,
    order: Order,
    anchor: H::Node,
) -> Box<dyn Iterator<Item = H::Node> + 'h> {
    match order {
        Order::DepthFirstDown => Box::new(depth_first_down(hierarchy, anchor)),
        Order::DepthFirst => Box::new(depth_first(hierarchy, anchor)),
        Order::BreadthFirst => Box::new(breadth_first(hierarchy, anchor)),
        Order::ForwardAndUp => Box::new(forward_and_up(hierarchy, anchor)),
        Order::BackwardAndUp => Box::new(backward_and_up(hierarchy, anchor)),
        Order::ForwardAndOver => Box::new(forward_and_over(hierarchy, anchor)),
        Order::SlideDown => Box::new(slide_down(hierarchy, anchor)),
    }
}

/// Pre-order over the subtree rooted at `anchor`.
#[must_use]
pub fn depth_first_down<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> DepthFirstDown<'_, H> {
    DepthFirstDown {
        hierarchy,
        stack: vec![anchor],
    }
}

/// Iterator returned by [`depth_first_down`].
pub struct DepthFirstDown<'h, H: Hierarchy> {
    hierarchy: &'h H,
    stack: Vec<H::Node>,
}

impl<H: Hierarchy> Iterator for DepthFirstDown<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.hierarchy.children(node).iter().rev().copied());
        Some(node)
    }
}

/// Whole-tree pre-order starting at `anchor`.
///
/// After the anchor's own subtree, climbs through each ancestor and descends into the
/// siblings that follow it. Ancestors themselves come before the anchor in pre-order and
/// are not yielded.
#[must_use]
pub fn depth_first<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> DepthFirst<'_, H> {
    DepthFirst {
        hierarchy,
        stack: vec![anchor],
        climb: anchor,
    }
}

/// Iterator returned by [`depth_first`].
pub struct DepthFirst<'h, H: Hierarchy> {
    hierarchy: &'h H,
    stack: Vec<H::Node>,
    climb: H::Node,
}

impl<H: Hierarchy> Iterator for DepthFirst<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        loop {
            if let Some(node) = self.stack.pop() {
                self.stack
                    .extend(self.hierarchy.children(node).iter().rev().copied());
                return Some(node);
            }
            let parent = self.hierarchy.parent(self.climb)?;
            let siblings = self.hierarchy.children(parent);
            if let Some(position) = siblings.iter().position(|&n| n == self.climb) {
                self.stack
                    .extend(siblings[position + 1..].iter().rev().copied());
            }
            self.climb = parent;
        }
    }
}

/// Level order over the subtree rooted at `anchor`.
#[must_use]
pub fn breadth_first<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> BreadthFirst<'_, H> {
    BreadthFirst {
        hierarchy,
        queue: VecDeque::from([anchor]),
    }
}

/// Iterator returned by [`breadth_first`].
pub struct BreadthFirst<'h, H: Hierarchy> {
    hierarchy: &'h H,
    queue: VecDeque<H::Node>,
}

impl<H: Hierarchy> Iterator for BreadthFirst<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let node = self.queue.pop_front()?;
        self.queue.extend(self.hierarchy.children(node).iter().copied());
        Some(node)
    }
}

/// The anchor, its later siblings, then its parent and the parent's later siblings,
/// and so on up to the top. Never descends.
#[must_use]
pub fn forward_and_up<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> ForwardAndUp<'_, H> {
    ForwardAndUp {
        hierarchy,
        next: Some(anchor),
    }
}

/// Iterator returned by [`forward_and_up`].
pub struct ForwardAndUp<'h, H: Hierarchy> {
    hierarchy: &'h H,
    next: Option<H::Node>,
}

impl<H: Hierarchy> Iterator for ForwardAndUp<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let node = self.next.take()?;
        self.next = self
            .hierarchy
            .next_sibling(node)
            .or_else(|| self.hierarchy.parent(node));
        Some(node)
    }
}

/// Mirror of [`forward_and_up`]: earlier siblings in reverse, then the parent.
#[must_use]
pub fn backward_and_up<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> BackwardAndUp<'_, H> {
    BackwardAndUp {
        hierarchy,
        next: Some(anchor),
    }
}

/// Iterator returned by [`backward_and_up`].
pub struct BackwardAndUp<'h, H: Hierarchy> {
    hierarchy: &'h H,
    next: Option<H::Node>,
}

impl<H: Hierarchy> Iterator for BackwardAndUp<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let node = self.next.take()?;
        self.next = self
            .hierarchy
            .prev_sibling(node)
            .or_else(|| self.hierarchy.parent(node));
        Some(node)
    }
}

/// The anchor and its later siblings, then the later siblings of each ancestor in
/// turn. Ancestors are stepped over, never yielded.
#[must_use]
pub fn forward_and_over<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> ForwardAndOver<'_, H> {
    ForwardAndOver {
        hierarchy,
        anchor: Some(anchor),
        cursor: Some(anchor),
    }
}

/// Iterator returned by [`forward_and_over`].
pub struct ForwardAndOver<'h, H: Hierarchy> {
    hierarchy: &'h H,
    anchor: Option<H::Node>,
    cursor: Option<H::Node>,
}

impl<H: Hierarchy> Iterator for ForwardAndOver<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        if let Some(anchor) = self.anchor.take() {
            return Some(anchor);
        }
        loop {
            let current = self.cursor?;
            if let Some(sibling) = self.hierarchy.next_sibling(current) {
                self.cursor = Some(sibling);
                return Some(sibling);
            }
            self.cursor = self.hierarchy.parent(current);
        }
    }
}

/// Steps forward preferring to descend: the first child when there is one, otherwise
/// the next sibling, otherwise up to the nearest ancestor with a next sibling.
///
/// Ancestors of the anchor are yielded as they are climbed out of, as in
/// [`forward_and_up`]. Nodes entered while descending are not yielded again on the way
/// back up.
#[must_use]
pub fn slide_down<H: Hierarchy>(hierarchy: &H, anchor: H::Node) -> SlideDown<'_, H> {
    SlideDown {
        hierarchy,
        next: Some(anchor),
        ascended: false,
        pending_ancestor: hierarchy.parent(anchor),
    }
}

/// Iterator returned by [`slide_down`].
pub struct SlideDown<'h, H: Hierarchy> {
    hierarchy: &'h H,
    next: Option<H::Node>,
    // The last node yielded was reached by climbing, so its children are behind us.
    ascended: bool,
    pending_ancestor: Option<H::Node>,
}

impl<H: Hierarchy> SlideDown<'_, H> {
    fn successor(&mut self, node: H::Node) -> Option<H::Node> {
        if !self.ascended {
            if let Some(&first) = self.hierarchy.children(node).first() {
                return Some(first);
            }
        }
        let mut current = node;
        loop {
            if let Some(sibling) = self.hierarchy.next_sibling(current) {
                self.ascended = false;
                return Some(sibling);
            }
            let parent = self.hierarchy.parent(current)?;
            if self.pending_ancestor == Some(parent) {
                self.pending_ancestor = self.hierarchy.parent(parent);
                self.ascended = true;
                return Some(parent);
            }
            current = parent;
        }
    }
}

impl<H: Hierarchy> Iterator for SlideDown<'_, H> {
    type Item = H::Node;

    fn next(&mut self) -> Option<H::Node> {
        let node = self.next.take()?;
        self.next = self.successor(node);
        Some(node)
    }
}

#[cfg(test)]
#[path = "tests/traversal.rs"]
mod tests;
