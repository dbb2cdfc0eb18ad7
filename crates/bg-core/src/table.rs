//! Range entries and ordered lookup tables.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// One row of a table: an inclusive roll range and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    /// Lowest roll covered (inclusive).
    pub min: u32,
    /// Highest roll covered (inclusive).
    pub max: u32,
    /// Category name or profession description.
    pub text: String,
}

impl RangeEntry {
    /// Create an entry covering `min..=max`.
    pub fn new(min: u32, max: u32, text: impl Into<String>) -> Self {
        Self {
            min,
            max,
            text: text.into(),
        }
    }

    /// Whether `roll` falls inside this entry's range.
    pub fn contains(&self, roll: u32) -> bool {
        (self.min..=self.max).contains(&roll)
    }
}

impl std::fmt::Display for RangeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{:>2}      {}", self.min, self.text)
        } else {
            write!(f, "{:>2}-{:<3}  {}", self.min, self.max, self.text)
        }
    }
}

/// A named, ordered sequence of range entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    entries: Vec<RangeEntry>,
}

impl Table {
    /// Create a table from entries in lookup order.
    pub fn new(name: impl Into<String>, entries: Vec<RangeEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// The table's name (category name, or the router).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in lookup order.
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry, in table order, whose range contains `roll`.
    pub fn find(&self, roll: u32) -> Option<&RangeEntry> {
        self.entries.iter().find(|e| e.contains(roll))
    }

    /// Resolve `roll` to the text of the first matching entry.
    ///
    /// A roll no entry covers is a defect in the table, reported as
    /// [`TableError::NoMatchingEntry`].
    pub fn lookup(&self, roll: u32) -> TableResult<&str> {
        self.find(roll)
            .map(|e| e.text.as_str())
            .ok_or_else(|| TableError::NoMatchingEntry {
                table: self.name.clone(),
                roll,
            })
    }
}
