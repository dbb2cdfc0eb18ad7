//! Consistency checks for a table set.
//!
//! Checks that every table covers the die's range exactly once, that every
//! category the router can produce has a profession table, and flags
//! category tables the router never reaches.

use crate::dice::Die;
use crate::table::Table;
use crate::table_set::TableSet;

/// A warning or error found during table validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The table where the issue was found.
    pub table: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(table: &str, message: String) -> Self {
        Self {
            table: table.to_string(),
            message,
            is_error: true,
        }
    }

    fn warning(table: &str, message: String) -> Self {
        Self {
            table: table.to_string(),
            message,
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.table, self.message)
    }
}

/// Returns true if any issue is an error.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.is_error)
}

/// Validate the router and all category tables.
///
/// Returns every issue found, errors and warnings mixed, in table order
/// (router first, then categories by name).
pub fn validate_table_set(set: &TableSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let die = set.die();

    if die.sides() < 2 {
        issues.push(ValidationIssue::error(
            "tables",
            format!("die {die} has fewer than 2 sides"),
        ));
        return issues;
    }

    validate_table(set.router(), die, &mut issues);

    let mut routed: Vec<&str> = Vec::new();
    for entry in set.router().entries() {
        if routed.contains(&entry.text.as_str()) {
            continue;
        }
        routed.push(&entry.text);
        if set.category(&entry.text).is_none() {
            issues.push(ValidationIssue::error(
                set.router().name(),
                format!("category '{}' has no profession table", entry.text),
            ));
        }
    }

    for table in set.categories() {
        validate_table(table, die, &mut issues);
        if !routed.contains(&table.name()) {
            issues.push(ValidationIssue::warning(
                table.name(),
                "never selected by the router".to_string(),
            ));
        }
    }

    issues
}

/// Check one table's ranges against the die.
fn validate_table(table: &Table, die: Die, issues: &mut Vec<ValidationIssue>) {
    let name = table.name();
    if table.is_empty() {
        issues.push(ValidationIssue::error(name, "table is empty".to_string()));
        return;
    }

    let sides = die.sides();
    for entry in table.entries() {
        if entry.min > entry.max {
            issues.push(ValidationIssue::error(
                name,
                format!("range {}-{} is inverted", entry.min, entry.max),
            ));
        } else if entry.min < 1 || entry.max > sides {
            issues.push(ValidationIssue::error(
                name,
                format!(
                    "range {}-{} falls outside {die} (1-{sides})",
                    entry.min, entry.max
                ),
            ));
        }
        if entry.text.trim().is_empty() {
            issues.push(ValidationIssue::warning(
                name,
                format!("range {}-{} has empty text", entry.min, entry.max),
            ));
        }
    }

    let segments = coverage(table, sides);

    let gaps = runs(&segments, |n| n == 0);
    if !gaps.is_empty() {
        issues.push(ValidationIssue::error(
            name,
            format!("no entry for rolls {}", gaps.join(", ")),
        ));
    }

    let overlaps = runs(&segments, |n| n > 1);
    if !overlaps.is_empty() {
        issues.push(ValidationIssue::error(
            name,
            format!("rolls {} match more than one entry", overlaps.join(", ")),
        ));
    }
}

/// A stretch of consecutive rolls covered by the same number of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    first: u64,
    last: u64,
    hits: usize,
}

/// Split `1..=sides` into segments of equal coverage.
///
/// Works from the entries' endpoints, so the cost depends on the number of
/// entries and not on the size of the die. Ranges are clipped to the die;
/// inverted ranges cover nothing.
fn coverage(table: &Table, sides: u32) -> Vec<Segment> {
    let sides = u64::from(sides);

    // (position, opens): an entry opens at `min` and closes after `max`.
    let mut bounds: Vec<(u64, bool)> = Vec::with_capacity(table.len() * 2);
    for entry in table.entries() {
        let first = u64::from(entry.min.max(1));
        let last = u64::from(entry.max).min(sides);
        if first <= last {
            bounds.push((first, true));
            bounds.push((last + 1, false));
        }
    }
    // Closes sort before opens at the same position.
    bounds.sort_unstable();

    let mut segments = Vec::new();
    let mut hits = 0usize;
    let mut at = 1u64;
    for (pos, opens) in bounds {
        if pos > at {
            segments.push(Segment {
                first: at,
                last: pos - 1,
                hits,
            });
            at = pos;
        }
        if opens {
            hits += 1;
        } else {
            hits = hits.saturating_sub(1);
        }
    }
    if at <= sides {
        segments.push(Segment {
            first: at,
            last: sides,
            hits,
        });
    }
    segments
}

/// Merge adjacent segments whose hit count satisfies `pred` into "a-b" runs.
fn runs(segments: &[Segment], pred: impl Fn(usize) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    let mut open: Option<(u64, u64)> = None;
    for seg in segments {
        if pred(seg.hits) {
            open = Some(match open {
                Some((first, _)) => (first, seg.last),
                None => (seg.first, seg.last),
            });
        } else if let Some((first, last)) = open.take() {
            out.push(format_run(first, last));
        }
    }
    if let Some((first, last)) = open {
        out.push(format_run(first, last));
    }
    out
}

fn format_run(start: u64, end: u64) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}
