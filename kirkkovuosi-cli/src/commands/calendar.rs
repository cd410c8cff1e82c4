use anyhow::Result;
use kirkkovuosi_core::{DateResolver, EntryType, ReferenceData};
use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::render::Render;

/// The generated calendar needs no reference data.
pub fn run(start_year: i32, entry_type: Option<EntryType>, json: bool) -> Result<()> {
    let resolver = DateResolver::new(ReferenceData::default());
    let mut calendar = resolver.get_church_year_calendar(start_year);

    if let Some(entry_type) = entry_type {
        calendar.entries.retain(|e| e.entry_type == entry_type);
    }

    if json {
        return print_json(&calendar);
    }

    println!(
        "{}",
        format!(
            "Kirkkovuosi {} (vuosikerta {})",
            calendar.church_year.label, calendar.church_year.year_cycle
        )
        .bold()
    );

    if calendar.entries.is_empty() {
        println!("{}", "No entries".dimmed());
        return Ok(());
    }

    for entry in &calendar.entries {
        println!("  {}", entry.render());
    }

    Ok(())
}
