use anyhow::Result;
use kirkkovuosi_core::{DataProvider, DateResolver};
use owo_colors::OwoColorize;

pub fn run<P: DataProvider>(resolver: &DateResolver<P>) -> Result<()> {
    let days = resolver.get_all_days();

    if days.is_empty() {
        println!("{}", "No holy days in the reference data".dimmed());
        return Ok(());
    }

    let width = days.iter().map(|d| d.slug.len()).max().unwrap_or(0);
    for day in days {
        println!("{:<width$}  {}", day.slug.dimmed(), day.name, width = width);
    }

    Ok(())
}
