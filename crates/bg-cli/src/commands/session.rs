use std::io::{self, BufRead, Write};

use colored::Colorize;

use bg_resolver::{ResolveResult, Resolution, Session, SessionState};

use crate::RollOpts;
use crate::render;

const HELP: &str = "\
  generate (g)           roll a category and a profession
  reroll-primary (rp)    roll a new category and profession
  reroll-secondary (rs)  keep the category, roll a new profession
  show                   print the current result
  debug                  print the current result as JSON
  help                   show this list
  quit (q)               leave the session";

pub fn run(opts: &RollOpts) -> Result<(), String> {
    let mut session = super::build_session(opts)?;

    println!("  {} background session", "Starting".bold());
    println!("  Policy: {} | Tables: {}", opts.policy, tables_label(opts));
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match process(&mut session, input) {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

fn tables_label(opts: &RollOpts) -> String {
    opts.tables
        .as_ref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
}

/// Run one session command and render its output.
///
/// A failed trigger leaves the previous result in place.
fn process(session: &mut Session, input: &str) -> Result<String, String> {
    let die = session.resolver().tables().die();
    let rendered = |r: ResolveResult<Resolution>| -> Result<String, String> {
        let r = r.map_err(|e| e.to_string())?;
        Ok(render::indent(&render::resolution(&r, die)))
    };

    match input.to_lowercase().as_str() {
        "generate" | "g" => rendered(session.generate()),
        "reroll-primary" | "rp" => rendered(session.reroll_primary()),
        "reroll-secondary" | "rs" => rendered(session.reroll_secondary()),
        "show" => Ok(match session.state() {
            SessionState::Resolved(r) => render::indent(&render::resolution(r, die)),
            SessionState::PrimarySet(p) => {
                format!("  Primary category ({die}) {} → {}", p.roll, p.category)
            }
            SessionState::Empty => "  Nothing rolled yet. Type 'generate'.".to_string(),
        }),
        "debug" => match session.current() {
            Some(r) => r
                .to_debug_json()
                .map(|json| render::indent(&json))
                .map_err(|e| e.to_string()),
            None => Ok("  Nothing rolled yet. Type 'generate'.".to_string()),
        },
        "help" => Ok(HELP.to_string()),
        other => Err(format!("unknown command: {other} (type 'help')")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bg_core::{RangeEntry, ScriptedDice, TableSet};
    use bg_resolver::{SpecialCasePolicy, TableResolver};

    fn session(rolls: &[u32]) -> Session {
        let tables = TableSet::new(vec![
            RangeEntry::new(1, 50, "Craft"),
            RangeEntry::new(51, 100, "Lore"),
        ])
        .with_category("Craft", vec![RangeEntry::new(1, 100, "Smith")])
        .with_category("Lore", vec![RangeEntry::new(1, 100, "Scribe")]);
        let resolver = TableResolver::new(tables, SpecialCasePolicy::reroll(100).unwrap());
        Session::with_dice(resolver, ScriptedDice::new(rolls.to_vec()))
    }

    #[test]
    fn show_before_generate() {
        let mut s = session(&[]);
        assert!(process(&mut s, "show").unwrap().contains("Nothing rolled yet"));
        assert!(process(&mut s, "debug").unwrap().contains("Nothing rolled yet"));
    }

    #[test]
    fn generate_then_reroll_secondary() {
        let mut s = session(&[30, 10, 44]);
        let out = process(&mut s, "generate").unwrap();
        assert!(out.contains("30 → Craft"));
        assert!(out.contains("10 → Smith"));
        let out = process(&mut s, "RS").unwrap();
        assert!(out.contains("30 → Craft"));
        assert!(out.contains("44 → Smith"));
    }

    #[test]
    fn debug_prints_json() {
        let mut s = session(&[60, 5]);
        process(&mut s, "g").unwrap();
        let out = process(&mut s, "debug").unwrap();
        assert!(out.contains("\"primaryRoll\": 60"));
        assert!(out.contains("\"category\": \"Lore\""));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut s = session(&[]);
        assert!(process(&mut s, "dance").unwrap_err().contains("unknown command"));
    }
}
