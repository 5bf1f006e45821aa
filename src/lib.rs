//! Heading hierarchy navigation for cell-based documents.
//!
//! cellnav infers a tree from the headings found in an ordered run of cells (as in a
//! Jupyter notebook) and offers lazy traversal orders over it, so that "go to parent",
//! "select this section" or "next heading at this level" become a choice of anchor and
//! order. The traversal engine works on any tree implementing [`traversal::Hierarchy`].
#![allow(clippy::multiple_crate_versions)]

pub mod cell;
pub mod classify;
pub mod config;
pub mod error;
pub mod formats;
pub mod hierarchy;
pub mod navigate;
pub mod notebook;
pub mod render;
pub mod sequence;
pub mod traversal;
pub mod tree;

pub use cell::{Cell, CellKind};
pub use error::{Error, Result};
pub use traversal::{Hierarchy, Order};
pub use tree::{CellTree, NodeId};
