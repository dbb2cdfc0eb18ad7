use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(tables: Option<&Path>, category: Option<&str>) -> Result<(), String> {
    let set = super::load_tables(tables)?;

    let table = match category {
        None => set.router(),
        Some(name) => set
            .categories()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known: Vec<&str> = set.category_names().collect();
                format!(
                    "category not found: \"{name}\" (known: {})",
                    known.join(", ")
                )
            })?,
    };

    println!("  {} [{}]", table.name().bold(), set.die().to_string().dimmed());

    if table.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Roll", "Result"]);
    for entry in table.entries() {
        let range = if entry.min == entry.max {
            entry.min.to_string()
        } else {
            format!("{}-{}", entry.min, entry.max)
        };
        out.add_row(vec![range, entry.text.clone()]);
    }

    println!("{out}");
    println!();
    println!("  {} entries", table.len());

    Ok(())
}
