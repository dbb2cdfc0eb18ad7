//! Plain-text rendering of resolutions.

use bg_core::Die;
use bg_resolver::Resolution;

const LABEL_WIDTH: usize = 29;

fn line(out: &mut String, label: &str, roll: u32, text: &str) {
    out.push_str(&format!("{label:<LABEL_WIDTH$}{roll} → {text}\n"));
}

/// Render a resolution as aligned label/roll/text lines.
pub fn resolution(r: &Resolution, die: Die) -> String {
    let mut out = String::new();
    line(&mut out, &format!("Primary category ({die})"), r.primary_roll, &r.category);
    line(
        &mut out,
        &format!("Secondary profession ({die})"),
        r.secondary_roll,
        &r.profession,
    );

    if let Some(extra) = &r.apprenticeship {
        out.push('\n');
        out.push_str("Apprenticeship (extra roll)\n");
        line(
            &mut out,
            &format!("Router roll ({die})"),
            extra.router_roll,
            &extra.category_name,
        );
        line(
            &mut out,
            &format!("Profession roll ({die})"),
            extra.category_roll,
            &extra.profession_text,
        );
    }
    out
}

/// Indent every non-empty line by two spaces.
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("  {l}") })
        .collect::<Vec<_>>()
        .join("\n")
}
