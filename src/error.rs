//! Error types shared by the hierarchy builder, the notebook loader and the CLI.
//!
//! Most "not found" outcomes are expressed as `Option::None` rather than errors. The
//! variants here cover caller misuse and failures of the outside world (files, JSON,
//! tree-sitter setup).

use thiserror::Error;

/// Errors produced by cellnav.
#[derive(Debug, Error)]
pub enum Error {
    /// A required value was absent, signalling caller misuse.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("Language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The heading query did not compile against the grammar.
    #[error("Query error: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// The notebook JSON was well-formed but not shaped like a notebook.
    #[error("Notebook error: {0}")]
    Notebook(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Creates a notebook structure error.
    pub fn notebook(message: impl Into<String>) -> Self {
        Self::Notebook(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
