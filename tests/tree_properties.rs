//! Property-based tests for the cell tree and its traversal orders.
//!
//! Documents are generated as runs of heading levels (`None` for prose or code cells),
//! which is all the hierarchy builder looks at once cells are classified.

use cellnav::hierarchy::from_levels;
use cellnav::traversal::{backward_and_up, depth_first, depth_first_down, forward_and_up};
use cellnav::{CellTree, Hierarchy, NodeId};
use proptest::prelude::*;
use std::collections::HashSet;

fn documents() -> impl Strategy<Value = Vec<(usize, Option<u8>)>> {
    prop::collection::vec(prop::option::of(1u8..=6), 0..48)
        .prop_map(|levels| levels.into_iter().enumerate().collect())
}

fn flatten(tree: &CellTree) -> Vec<usize> {
    tree.children(tree.root())
        .iter()
        .flat_map(|&top| depth_first_down(tree, top))
        .filter_map(|node| tree.cell(node))
        .collect()
}

proptest! {
    #[test]
    fn flattening_reproduces_document_order(levels in documents()) {
        let tree = from_levels(&levels);
        let expected: Vec<usize> = (0..levels.len()).collect();
        prop_assert_eq!(flatten(&tree), expected);
        prop_assert_eq!(tree.len(), levels.len() + 1);
    }

    #[test]
    fn heading_children_are_strictly_deeper(levels in documents()) {
        let tree = from_levels(&levels);
        for node in tree.branches() {
            let Some(parent_level) = tree.level(node) else {
                prop_assert!(tree.children(node).is_empty());
                continue;
            };
            for &child in tree.children(node) {
                if let Some(child_level) = tree.level(child) {
                    prop_assert!(child_level > parent_level);
                }
            }
        }
    }

    #[test]
    fn documents_without_headings_stay_flat(count in 0usize..32) {
        let levels: Vec<(usize, Option<u8>)> = (0..count).map(|i| (i, None)).collect();
        let tree = from_levels(&levels);
        let top: Vec<usize> = tree
            .children(tree.root())
            .iter()
            .filter_map(|&node| tree.cell(node))
            .collect();
        prop_assert_eq!(top, (0..count).collect::<Vec<_>>());
        prop_assert!(tree.branches().all(|node| tree.children(node).is_empty()));
    }

    #[test]
    fn forward_and_up_terminates_without_revisits(levels in documents()) {
        let tree = from_levels(&levels);
        for anchor in tree.branches() {
            let visited: Vec<NodeId> = forward_and_up(&tree, anchor).collect();
            let unique: HashSet<NodeId> = visited.iter().copied().collect();
            prop_assert_eq!(unique.len(), visited.len());
            prop_assert_eq!(visited.last().copied(), Some(tree.root()));

            let mut ancestors = Vec::new();
            let mut current = tree.parent(anchor);
            while let Some(parent) = current {
                ancestors.push(parent);
                current = tree.parent(parent);
            }
            let climbed: Vec<NodeId> = visited
                .iter()
                .copied()
                .filter(|node| ancestors.contains(node))
                .collect();
            prop_assert_eq!(climbed, ancestors);
        }
    }

    #[test]
    fn backward_and_up_mirrors_forward_and_up(levels in documents()) {
        let tree = from_levels(&levels);
        for node in tree.branches().chain([tree.root()]) {
            let siblings = tree.children(node);
            let (Some(&first), Some(&last)) = (siblings.first(), siblings.last()) else {
                continue;
            };
            let forward: Vec<NodeId> = forward_and_up(&tree, first).take(siblings.len()).collect();
            let mut backward: Vec<NodeId> =
                backward_and_up(&tree, last).take(siblings.len()).collect();
            backward.reverse();
            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(forward.as_slice(), siblings);
        }
    }

    #[test]
    fn depth_first_from_a_cell_is_the_rest_of_the_document(levels in documents()) {
        let tree = from_levels(&levels);
        for anchor in tree.branches() {
            let cell = tree.cell(anchor).unwrap();
            let rest: Vec<usize> = depth_first(&tree, anchor)
                .filter_map(|node| tree.cell(node))
                .collect();
            prop_assert_eq!(rest, (cell..levels.len()).collect::<Vec<_>>());
        }
    }
}
