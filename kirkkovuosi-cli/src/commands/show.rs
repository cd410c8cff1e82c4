use anyhow::Result;
use kirkkovuosi_core::{DataProvider, DateResolver};

use crate::commands::print_json;
use crate::render::Render;

pub fn run<P: DataProvider>(resolver: &DateResolver<P>, slug: &str, json: bool) -> Result<()> {
    let Some(day) = resolver.get_day_data(slug) else {
        anyhow::bail!(
            "Holy day '{}' not found. List the known days with:\n  kirkkovuosi days",
            slug
        );
    };

    if json {
        return print_json(day);
    }

    println!("{}", day.render());
    Ok(())
}
