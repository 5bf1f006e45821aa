//! End-to-end navigation over a notebook read from disk.

use cellnav::{hierarchy, navigate, notebook, render, Order};
use std::io::Write;
use tempfile::NamedTempFile;

const NOTEBOOK: &str = r###"{
  "cells": [
    {"cell_type": "markdown", "metadata": {}, "source": ["# Analysis\n", "\n", "Overview."]},
    {"cell_type": "code", "metadata": {}, "outputs": [], "source": ["import pandas as pd\n"]},
    {"cell_type": "markdown", "metadata": {}, "source": "## Loading"},
    {"cell_type": "code", "metadata": {}, "outputs": [], "source": "df = pd.read_csv('x.csv')"},
    {"cell_type": "markdown", "metadata": {}, "source": "Cleaning\n--------\n"},
    {"cell_type": "code", "metadata": {}, "outputs": [], "source": "df = df.dropna()"},
    {"cell_type": "markdown", "metadata": {}, "source": "# Appendix"}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"###;

fn notebook_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{NOTEBOOK}").unwrap();
    file
}

#[test]
fn test_navigate_loaded_notebook() {
    let file = notebook_file();
    let cells = notebook::load(file.path()).unwrap();
    let tree = hierarchy::build_markdown(&cells).unwrap();

    assert_eq!(navigate::parent_cell(&tree, 3).unwrap(), Some(2));
    assert_eq!(navigate::parent_cell(&tree, 5).unwrap(), Some(4));
    assert_eq!(navigate::parent_cell(&tree, 4).unwrap(), Some(0));
    assert_eq!(navigate::parent_cell(&tree, 6).unwrap(), None);

    assert_eq!(navigate::subtree_range(&tree, 0).unwrap(), 0..6);
    assert_eq!(navigate::subtree_range(&tree, 2).unwrap(), 2..4);
    assert_eq!(navigate::siblings_range(&tree, 2).unwrap(), 1..6);

    // Next heading at the same level.
    assert_eq!(navigate::step(&tree, 2, Order::ForwardAndOver, 1).unwrap(), Some(4));
    assert_eq!(navigate::step(&tree, 2, Order::ForwardAndOver, 2).unwrap(), Some(6));
    assert_eq!(navigate::step(&tree, 0, Order::ForwardAndOver, 1).unwrap(), Some(6));
}

#[test]
fn test_rendered_outline_of_loaded_notebook() {
    let file = notebook_file();
    let cells = notebook::load(file.path()).unwrap();
    let tree = hierarchy::build_markdown(&cells).unwrap();

    let rendered = render::render_tree(&tree, &cells, 4);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), cells.len());
    assert_eq!(lines[0], "├── [0] H1 # Analysis");
    assert_eq!(lines[4], "│   └── [4] H2 Cleaning");
    assert_eq!(lines[6], "└── [6] H1 # Appendix");
}

#[test]
fn test_unknown_cell_is_a_precondition_failure() {
    let file = notebook_file();
    let cells = notebook::load(file.path()).unwrap();
    let tree = hierarchy::build_markdown(&cells).unwrap();

    let err = navigate::subtree_range(&tree, 99).unwrap_err();
    assert!(matches!(err, cellnav::Error::Precondition(_)));
}
