//! Range tables and dice for the background generator.
//!
//! A [`TableSet`] pairs a router table (roll to category name) with one
//! profession table per category. Lookups scan a [`Table`] in order and
//! return the first [`RangeEntry`] whose inclusive range holds the roll.
//! Rolls come from any [`DieRoller`]: seeded for play, scripted for tests
//! and forced replays.

pub mod dice;
pub mod error;
pub mod table;
pub mod table_set;
pub mod validate;

pub use dice::{Die, DieRoller, ScriptedDice, SeededDice};
pub use error::{TableError, TableResult};
pub use table::{RangeEntry, Table};
pub use table_set::{ROUTER_TABLE, TableSet};
pub use validate::{ValidationIssue, has_errors, validate_table_set};
