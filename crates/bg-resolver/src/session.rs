//! The current-result holder behind the three UI triggers.
//!
//! States move `Empty -> PrimarySet -> Resolved`. A fresh primary roll
//! always drops the old profession and apprenticeship. A failed action
//! leaves the previous state exactly as it was.

use bg_core::{DieRoller, TableSet};
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::ResolveResult;
use crate::resolution::{Primary, Resolution};
use crate::resolver::TableResolver;

/// Where a session is in the generate cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing rolled yet.
    #[default]
    Empty,
    /// A category has been rolled but no profession.
    PrimarySet(Primary),
    /// A full result is available.
    Resolved(Resolution),
}

/// A resolver, its dice, and the latest result.
pub struct Session {
    resolver: TableResolver,
    dice: Box<dyn DieRoller>,
    state: SessionState,
}

impl Session {
    /// Create a session from tables and a configuration.
    pub fn new(tables: TableSet, config: &ResolverConfig) -> ResolveResult<Self> {
        let resolver = TableResolver::new(tables, config.build_policy()?);
        Ok(Self::with_dice(resolver, config.dice()))
    }

    /// Create a session around an existing resolver and dice.
    pub fn with_dice(resolver: TableResolver, dice: impl DieRoller + 'static) -> Self {
        Self {
            resolver,
            dice: Box::new(dice),
            state: SessionState::Empty,
        }
    }

    /// The resolver in use.
    pub fn resolver(&self) -> &TableResolver {
        &self.resolver
    }

    /// The current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The latest full result, if any.
    pub fn current(&self) -> Option<&Resolution> {
        match &self.state {
            SessionState::Resolved(r) => Some(r),
            _ => None,
        }
    }

    /// Roll a new category, discarding any profession.
    pub fn generate_primary(&mut self) -> ResolveResult<Primary> {
        let primary = self.resolver.resolve_primary(self.dice.as_mut())?;
        self.state = SessionState::PrimarySet(primary.clone());
        Ok(primary)
    }

    /// Roll a new profession for the current category.
    ///
    /// Rolls a category first if there is none. The category is kept
    /// as-is otherwise.
    pub fn generate_secondary(&mut self) -> ResolveResult<Resolution> {
        let primary = match &self.state {
            SessionState::Empty => self.resolver.resolve_primary(self.dice.as_mut())?,
            SessionState::PrimarySet(p) => p.clone(),
            SessionState::Resolved(r) => r.primary(),
        };
        let resolution = self
            .resolver
            .resolve_secondary(&primary, self.dice.as_mut())?;
        self.state = SessionState::Resolved(resolution.clone());
        Ok(resolution)
    }

    /// The `generate` trigger: new category and new profession.
    pub fn generate(&mut self) -> ResolveResult<Resolution> {
        debug!("generate");
        self.roll_both()
    }

    /// The `reroll-primary` trigger: new category and new profession.
    pub fn reroll_primary(&mut self) -> ResolveResult<Resolution> {
        debug!("reroll primary");
        self.roll_both()
    }

    /// The `reroll-secondary` trigger: same category, new profession.
    pub fn reroll_secondary(&mut self) -> ResolveResult<Resolution> {
        debug!("reroll secondary");
        self.generate_secondary()
    }

    fn roll_both(&mut self) -> ResolveResult<Resolution> {
        let resolution = self.resolver.resolve(self.dice.as_mut())?;
        self.state = SessionState::Resolved(resolution.clone());
        Ok(resolution)
    }
}
