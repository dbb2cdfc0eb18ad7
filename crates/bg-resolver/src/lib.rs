//! Background generation over a router table and category tables.
//!
//! A [`TableResolver`] rolls the router for a category, then rolls that
//! category's table for a profession. Profession texts are run through a
//! [`SpecialCasePolicy`]: apprenticeship entries branch into an extra
//! independent roll pair, disallowed entries are rerolled up to a cap.
//! A [`Session`] holds the current [`Resolution`] and exposes the three
//! triggers: generate, reroll-primary, and reroll-secondary.

pub mod config;
pub mod error;
pub mod policy;
pub mod resolution;
pub mod resolver;
pub mod session;

pub use config::{PolicyKind, ResolverConfig};
pub use error::{ResolveError, ResolveResult};
pub use policy::{Classification, SpecialAction, SpecialCasePolicy, SpecialRule};
pub use resolution::{Apprenticeship, Primary, Resolution};
pub use resolver::TableResolver;
pub use session::{Session, SessionState};
