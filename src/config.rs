//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a cellnav.toml, and if present we load settings from there.
//! This provides outline indentation, the default log filter and the default traversal order.

use crate::traversal::Order;
use clap::ValueEnum;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "cellnav.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from cellnav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 4)]
    /// Columns per nesting level in the rendered outline.
    pub indent_width: usize,
    #[facet(default = "warn".to_string())]
    /// Tracing filter used when neither `RUST_LOG` nor `--verbose` is given.
    pub log_level: String,
    #[facet(default = "depth-first".to_string())]
    /// Traversal order used by `walk` and `step` when `--order` is omitted.
    pub default_order: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: 4,
            log_level: "warn".to_string(),
            default_order: "depth-first".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from cellnav.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            warn!(path = %path.display(), "ignoring unparsable configuration");
            Self::default()
        })
    }

    #[must_use]
    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// The configured default traversal order, if it names one.
    pub fn order(&self) -> Option<Order> {
        Order::from_str(&self.default_order, true).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
