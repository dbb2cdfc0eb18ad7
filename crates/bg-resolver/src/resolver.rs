//! Two-stage table resolution.
//!
//! The primary stage rolls the router for a category and checks straight
//! away that the category has a table. The secondary stage rolls that table
//! for a profession and applies the special-case policy:
//!
//! - `Normal`: the result stands.
//! - `SpecialBranch`: the result stands and a second, independent router +
//!   category roll is attached as the apprenticeship.
//! - `SpecialDiscard`: the result is dropped and the table rolled again,
//!   up to the policy's attempt cap.

use bg_core::{DieRoller, Table, TableError, TableSet};
use tracing::{debug, trace, warn};

use crate::error::{ResolveError, ResolveResult};
use crate::policy::{Classification, SpecialCasePolicy};
use crate::resolution::{Apprenticeship, Primary, Resolution};

/// Resolves backgrounds from a table set under one special-case policy.
#[derive(Debug, Clone)]
pub struct TableResolver {
    tables: TableSet,
    policy: SpecialCasePolicy,
}

impl TableResolver {
    /// Create a resolver. The tables are only ever read.
    pub fn new(tables: TableSet, policy: SpecialCasePolicy) -> Self {
        Self { tables, policy }
    }

    /// The tables being rolled on.
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// The special-case policy in effect.
    pub fn policy(&self) -> &SpecialCasePolicy {
        &self.policy
    }

    /// Roll the router and return the selected category.
    ///
    /// Fails if the roll is not covered or the category has no table.
    pub fn resolve_primary(&self, dice: &mut dyn DieRoller) -> ResolveResult<Primary> {
        let roll = dice.roll(self.tables.die());
        let category = self.tables.router().lookup(roll)?;
        self.tables.require_category(category)?;
        debug!(roll, category, "primary resolved");
        Ok(Primary {
            roll,
            category: category.to_string(),
        })
    }

    /// Roll a profession for an already-resolved primary.
    pub fn resolve_secondary(
        &self,
        primary: &Primary,
        dice: &mut dyn DieRoller,
    ) -> ResolveResult<Resolution> {
        let table = self.profession_table(&primary.category)?;
        let max_attempts = self.policy.max_attempts();

        for attempt in 1..=max_attempts {
            let roll = dice.roll(self.tables.die());
            let profession = table.lookup(roll)?;

            let apprenticeship = match self.policy.classify(profession) {
                Classification::Normal => None,
                Classification::SpecialBranch => {
                    debug!(roll, profession, "apprenticeship result, rolling extra pair");
                    Some(self.resolve_apprenticeship(dice)?)
                }
                Classification::SpecialDiscard => {
                    trace!(attempt, roll, profession, "discarding disallowed result");
                    continue;
                }
            };

            debug!(
                category = %primary.category,
                roll,
                profession,
                attempt,
                "secondary resolved"
            );
            return Ok(Resolution {
                primary_roll: primary.roll,
                category: primary.category.clone(),
                secondary_roll: roll,
                profession: profession.to_string(),
                apprenticeship,
            });
        }

        warn!(
            category = %primary.category,
            attempts = max_attempts,
            "reroll limit reached"
        );
        Err(ResolveError::RerollExhausted {
            category: primary.category.clone(),
            attempts: max_attempts,
        })
    }

    /// Roll primary and secondary in one go.
    pub fn resolve(&self, dice: &mut dyn DieRoller) -> ResolveResult<Resolution> {
        let primary = self.resolve_primary(dice)?;
        self.resolve_secondary(&primary, dice)
    }

    /// Fresh router roll, fresh category roll. Not reclassified.
    fn resolve_apprenticeship(&self, dice: &mut dyn DieRoller) -> ResolveResult<Apprenticeship> {
        let primary = self.resolve_primary(dice)?;
        let table = self.profession_table(&primary.category)?;
        let category_roll = dice.roll(self.tables.die());
        let profession_text = table.lookup(category_roll)?;
        Ok(Apprenticeship {
            router_roll: primary.roll,
            category_name: primary.category,
            category_roll,
            profession_text: profession_text.to_string(),
        })
    }

    fn profession_table(&self, category: &str) -> ResolveResult<&Table> {
        let table = self.tables.require_category(category)?;
        if table.is_empty() {
            return Err(TableError::EmptyTable(category.to_string()).into());
        }
        Ok(table)
    }
}
