//! The router table together with its per-category profession tables.
//!
//! Table files are JSON:
//!
//! ```text
//! {
//!   "die": "d100",
//!   "router": [{ "min": 1, "max": 50, "text": "Craft" }, ...],
//!   "categories": {
//!     "Craft": [{ "min": 1, "max": 100, "text": "Smith" }, ...]
//!   }
//! }
//! ```
//!
//! `die` is an optional tag such as "d100", "d20" or "d12" and defaults to a
//! percentile die.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::dice::Die;
use crate::error::{TableError, TableResult};
use crate::table::{RangeEntry, Table};

/// Name used for the router table in errors and listings.
pub const ROUTER_TABLE: &str = "router";

#[derive(Deserialize)]
struct RawTableSet {
    #[serde(default)]
    die: Die,
    router: Vec<RangeEntry>,
    #[serde(default)]
    categories: BTreeMap<String, Vec<RangeEntry>>,
}

impl From<RawTableSet> for TableSet {
    fn from(raw: RawTableSet) -> Self {
        let categories = raw
            .categories
            .into_iter()
            .map(|(name, entries)| {
                let table = Table::new(name.clone(), entries);
                (name, table)
            })
            .collect();
        Self {
            die: raw.die,
            router: Table::new(ROUTER_TABLE, raw.router),
            categories,
        }
    }
}

/// Router and category tables, read-only once loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawTableSet")]
pub struct TableSet {
    die: Die,
    router: Table,
    categories: BTreeMap<String, Table>,
}

impl TableSet {
    /// Create a table set with a percentile die and no categories yet.
    pub fn new(router: Vec<RangeEntry>) -> Self {
        Self {
            die: Die::D100,
            router: Table::new(ROUTER_TABLE, router),
            categories: BTreeMap::new(),
        }
    }

    /// Roll both tables with a different die.
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = die;
        self
    }

    /// Add or replace the profession table for a category.
    pub fn with_category(mut self, name: impl Into<String>, entries: Vec<RangeEntry>) -> Self {
        let name = name.into();
        self.categories
            .insert(name.clone(), Table::new(name, entries));
        self
    }

    /// Parse a table set from JSON text.
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table set from a JSON file.
    pub fn from_path(path: &Path) -> TableResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// The die both tables are rolled with.
    pub fn die(&self) -> Die {
        self.die
    }

    /// The router table (roll to category name).
    pub fn router(&self) -> &Table {
        &self.router
    }

    /// The profession table for a category, if any.
    pub fn category(&self, name: &str) -> Option<&Table> {
        self.categories.get(name)
    }

    /// The profession table for a category, or [`TableError::MissingCategory`].
    pub fn require_category(&self, name: &str) -> TableResult<&Table> {
        self.category(name)
            .ok_or_else(|| TableError::MissingCategory(name.to_string()))
    }

    /// All category tables, sorted by name.
    pub fn categories(&self) -> impl Iterator<Item = &Table> {
        self.categories.values()
    }

    /// Category names, sorted.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of category tables.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
