//! Error types for table resolution.

use bg_core::TableError;
use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can stop a generate or reroll action.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The tables are inconsistent with the die or with each other.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Every reroll attempt landed on a disallowed entry.
    #[error(
        "exceeded reroll limit ({attempts} attempts) avoiding disallowed results in '{category}'; \
         the table is dominated by disallowed entries or its ranges are wrong"
    )]
    RerollExhausted {
        /// The category whose table could not produce an allowed result.
        category: String,
        /// How many rolls were made before giving up.
        attempts: u32,
    },

    /// A special-case rule could not be compiled.
    #[error("invalid special-case rule: {0}")]
    InvalidRule(#[from] regex::Error),
}
