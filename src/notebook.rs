//! Loading cells from Jupyter notebooks.
//!
//! Only the parts of nbformat 4 that matter for navigation are read: each cell's type
//! and source. Outputs, metadata and execution counts are ignored.

use crate::cell::{Cell, CellKind};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
struct RawNotebook {
    #[serde(default)]
    cells: Option<Vec<RawCell>>,
    #[serde(default)]
    nbformat: Option<u32>,
}

#[derive(Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: RawSource,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for RawSource {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawSource {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.concat(),
        }
    }
}

fn cell_kind(cell_type: &str) -> CellKind {
    match cell_type {
        "markdown" => CellKind::Markup,
        "code" => CellKind::Code,
        _ => CellKind::Raw,
    }
}

/// Parses notebook JSON into cells numbered by position.
///
/// # Errors
///
/// Returns an error if `json` is not valid JSON or has no cell list.
pub fn parse(json: &str) -> Result<Vec<Cell>> {
    let notebook: RawNotebook = serde_json::from_str(json)?;
    let Some(raw_cells) = notebook.cells else {
        return Err(match notebook.nbformat {
            Some(version) if version < 4 => {
                Error::notebook(format!("nbformat {version} notebooks are not supported"))
            }
            _ => Error::notebook("notebook has no cell list"),
        });
    };

    let cells: Vec<Cell> = raw_cells
        .into_iter()
        .enumerate()
        .map(|(index, raw)| Cell::new(index, cell_kind(&raw.cell_type), raw.source.into_text()))
        .collect();
    debug!(cells = cells.len(), "parsed notebook");
    Ok(cells)
}

/// Reads and parses the notebook at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a notebook.
pub fn load(path: &Path) -> Result<Vec<Cell>> {
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading notebook");
    parse(&contents)
}

#[cfg(test)]
#[path = "tests/notebook.rs"]
mod tests;
