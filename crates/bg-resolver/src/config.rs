//! Configuration for a resolver session.

use bg_core::SeededDice;

use crate::error::ResolveResult;
use crate::policy::{DEFAULT_MAX_ATTEMPTS, SpecialCasePolicy};

/// Which special-case handling to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// Disallowed results (apprentice, student, teacher) are rerolled.
    #[default]
    Reroll,
    /// Apprenticeship results are kept and get an extra roll pair.
    Branch,
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reroll => write!(f, "reroll"),
            Self::Branch => write!(f, "branch"),
        }
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reroll" | "discard" => Ok(Self::Reroll),
            "branch" | "apprentice" => Ok(Self::Branch),
            other => Err(format!(
                "unknown policy '{other}' (expected 'reroll' or 'branch')"
            )),
        }
    }
}

/// Configuration for a resolver session.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Special-case handling.
    pub policy: PolicyKind,
    /// Roll cap for the reroll policy (at least 1).
    pub max_attempts: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            policy: PolicyKind::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ResolverConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the special-case policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Set the reroll cap (raised to 1 if zero).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Build the configured special-case policy.
    pub fn build_policy(&self) -> ResolveResult<SpecialCasePolicy> {
        match self.policy {
            PolicyKind::Reroll => SpecialCasePolicy::reroll(self.max_attempts),
            PolicyKind::Branch => SpecialCasePolicy::branch(),
        }
    }

    /// Dice seeded per this configuration.
    pub fn dice(&self) -> SeededDice {
        SeededDice::new(self.seed)
    }
}
