use std::path::Path;

use colored::Colorize;

use bg_core::{has_errors, validate_table_set};

pub fn run(tables: Option<&Path>) -> Result<(), String> {
    let set = super::load_tables(tables)?;
    let issues = validate_table_set(&set);

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    if has_errors(&issues) {
        let errors = issues.iter().filter(|i| i.is_error).count();
        return Err(format!(
            "table validation failed with {} error{}",
            errors,
            if errors == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} router entries, {} category tables, {}",
        set.router().len(),
        set.category_count(),
        set.die()
    );

    Ok(())
}
