pub mod check;
pub mod generate;
pub mod session;
pub mod show;

use std::path::Path;

use bg_core::{ScriptedDice, TableSet};
use bg_resolver::{ResolverConfig, Session, TableResolver};

use crate::RollOpts;

/// Tables used when no `--tables` file is given.
const BUILTIN_TABLES: &str = include_str!("../../data/backgrounds.json");

/// Load tables from a file, or the built-in set.
fn load_tables(path: Option<&Path>) -> Result<TableSet, String> {
    let tables = match path {
        Some(path) => TableSet::from_path(path),
        None => TableSet::from_json_str(BUILTIN_TABLES),
    };
    tables.map_err(|e| e.to_string())
}

/// Parse a `--rolls` list such as "30, 77,12".
fn parse_rolls(list: &str) -> Result<Vec<u32>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| format!("invalid roll '{s}' in --rolls"))
        })
        .collect()
}

/// Build a session from the shared roll options.
fn build_session(opts: &RollOpts) -> Result<Session, String> {
    let tables = load_tables(opts.tables.as_deref())?;

    let mut config = ResolverConfig::default()
        .with_policy(opts.policy)
        .with_max_attempts(opts.max_attempts);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }

    match &opts.rolls {
        Some(list) => {
            let rolls = parse_rolls(list)?;
            let policy = config.build_policy().map_err(|e| e.to_string())?;
            let dice = ScriptedDice::new(rolls).with_fallback(config.dice());
            Ok(Session::with_dice(TableResolver::new(tables, policy), dice))
        }
        None => Session::new(tables, &config).map_err(|e| e.to_string()),
    }
}
