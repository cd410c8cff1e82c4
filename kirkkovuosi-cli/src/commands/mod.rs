pub mod calendar;
pub mod day;
pub mod days;
pub mod easter;
pub mod show;

use anyhow::Result;
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
