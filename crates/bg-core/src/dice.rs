//! Dice types and rollers.
//!
//! Every roll in the generator goes through a [`DieRoller`]. [`SeededDice`]
//! wraps a `StdRng`; [`ScriptedDice`] replays forced values first and falls
//! back to a seeded generator once the script runs out.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// A polyhedral die type.
///
/// Table files name the die by tag ("d100", "D20", "d%", "d12").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Die {
    /// Six-sided die.
    D6,
    /// Ten-sided die.
    D10,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    #[default]
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D10 => 10,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "d6" => Some(Self::D6),
            "d10" => Some(Self::D10),
            "d20" => Some(Self::D20),
            "d100" | "d%" => Some(Self::D100),
            other => {
                let num = other.strip_prefix('d')?.parse::<u32>().ok()?;
                if num >= 2 {
                    Some(Self::Custom(num))
                } else {
                    None
                }
            }
        }
    }
}

impl TryFrom<String> for Die {
    type Error = String;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::from_str_tag(&tag)
            .ok_or_else(|| format!("unknown die '{tag}' (expected a tag like 'd100')"))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A source of die rolls.
///
/// Implementations return a value in `1..=die.sides()`, independent of
/// earlier calls.
pub trait DieRoller {
    /// Roll one die.
    fn roll(&mut self, die: Die) -> u32;
}

/// Uniform rolls from a standard RNG.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Reproducible dice from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded dice when a seed is given, OS-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_os(),
        }
    }
}

impl DieRoller for SeededDice {
    fn roll(&mut self, die: Die) -> u32 {
        self.rng.random_range(1..=die.sides().max(1))
    }
}

/// Dice that replay a fixed sequence of values.
///
/// Forced values are clamped into the die's range. Once the script is
/// used up, rolls come from the fallback generator.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
    fallback: SeededDice,
}

impl ScriptedDice {
    /// Replay `values`, then roll from a generator seeded with 0.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: SeededDice::from_seed(0),
        }
    }

    /// Replace the generator used after the script runs out.
    pub fn with_fallback(mut self, fallback: SeededDice) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of forced values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DieRoller for ScriptedDice {
    fn roll(&mut self, die: Die) -> u32 {
        match self.script.pop_front() {
            Some(value) => value.clamp(1, die.sides().max(1)),
            None => self.fallback.roll(die),
        }
    }
}
