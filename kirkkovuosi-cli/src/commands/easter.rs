use anyhow::Result;
use kirkkovuosi_core::computus::{
    add_days, easter_sunday, first_advent_sunday, weekday_name_fi, year_cycle,
};
use owo_colors::OwoColorize;

/// Moveable feasts as offsets from Easter Sunday
const MOVEABLE_FEASTS: &[(&str, i64)] = &[
    ("Laskiaissunnuntai", -49),
    ("Tuhkakeskiviikko", -46),
    ("Palmusunnuntai", -7),
    ("Pitkäperjantai", -2),
    ("Pääsiäispäivä", 0),
    ("Helatorstai", 39),
    ("Helluntaipäivä", 49),
    ("Pyhän Kolminaisuuden päivä", 56),
];

pub fn run(year: i32) -> Result<()> {
    let easter = easter_sunday(year);
    println!("{}", format!("Pääsiäinen {}: {}", year, easter.format("%-d.%-m.%Y")).bold());
    println!();

    for (name, offset) in MOVEABLE_FEASTS {
        let date = add_days(easter, *offset);
        println!(
            "  {:<28} {} {}",
            name,
            date.format("%Y-%m-%d"),
            weekday_name_fi(date).dimmed()
        );
    }

    let advent = first_advent_sunday(year);
    println!(
        "  {:<28} {} {}",
        "1. adventtisunnuntai",
        advent.format("%Y-%m-%d"),
        format!("(vuosikerta {})", year_cycle(year)).dimmed()
    );

    Ok(())
}
