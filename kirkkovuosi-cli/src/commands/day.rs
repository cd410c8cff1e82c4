use anyhow::Result;
use chrono::NaiveDate;
use kirkkovuosi_core::{DataProvider, DateResolver};

use crate::commands::print_json;
use crate::render::Render;

pub fn run<P: DataProvider>(resolver: &DateResolver<P>, date: NaiveDate, json: bool) -> Result<()> {
    let day = resolver.resolve_date(date);

    if json {
        return print_json(&day);
    }

    println!("{}", day.render());
    Ok(())
}
