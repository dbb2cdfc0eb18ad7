//! One-shot background generation.

use colored::Colorize;

use crate::RollOpts;
use crate::render;

pub fn run(opts: &RollOpts, count: u32, json: bool, debug: bool) -> Result<(), String> {
    let mut session = super::build_session(opts)?;
    let die = session.resolver().tables().die();

    let mut results = Vec::new();
    for _ in 0..count.max(1) {
        results.push(session.generate().map_err(|e| e.to_string())?);
    }

    if json {
        let out = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])
        } else {
            serde_json::to_string_pretty(&results)
        };
        println!("{}", out.map_err(|e| e.to_string())?);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("  {}", "Result".bold());
        println!("{}", render::indent(&render::resolution(result, die)));

        if debug {
            let dump = result.to_debug_json().map_err(|e| e.to_string())?;
            println!();
            println!("  {}", "Debug".dimmed());
            println!("{}", render::indent(&dump));
        }
    }

    Ok(())
}
