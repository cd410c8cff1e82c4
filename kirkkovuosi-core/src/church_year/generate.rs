//! Church year generation.
//!
//! Every observance of one church year is derived from two anchors: the
//! first Sunday of Advent that opens the year and Easter Sunday of the
//! following calendar year. Each season is generated by its own function,
//! then the whole list is stably sorted by date so that observances sharing
//! a date keep the order in which they were generated.

use chrono::NaiveDate;
use tracing::warn;

use super::slugs::*;
use super::{CalendarEntry, EntryType};
use crate::computus::{
    add_days, easter_sunday, first_advent_sunday, saturday_on_or_before, sunday_on_or_after, ymd,
};

/// Maximum number of Sundays after Epiphany.
const MAX_EPIPHANY_SUNDAYS: u32 = 6;

/// Days before Easter of the first pre-Lent Sunday (Septuagesima).
const SEPTUAGESIMA_OFFSET: i64 = -63;

/// Pentecost-season Sundays whose running index carries a fixed feast.
const INDEXED_FEASTS: [(u32, &str, &str); 3] = [
    (6, APOSTLES_DAY, "Apostolien päivä"),
    (8, TRANSFIGURATION, "Kirkastussunnuntai"),
    (22, REFORMATION_DAY, "Uskonpuhdistuksen muistopäivä"),
];

/// Accumulates entries in generation order.
#[derive(Default)]
struct YearBuilder {
    entries: Vec<CalendarEntry>,
}

impl YearBuilder {
    fn push(
        &mut self,
        date: NaiveDate,
        slug: impl Into<String>,
        name: impl Into<String>,
        entry_type: EntryType,
    ) {
        self.entries.push(CalendarEntry::new(date, slug, name, entry_type));
    }

    /// Entry dated `offset` days from `anchor`.
    fn push_offset(
        &mut self,
        anchor: NaiveDate,
        offset: i64,
        slug: &str,
        name: &str,
        entry_type: EntryType,
    ) {
        self.push(add_days(anchor, offset), slug, name, entry_type);
    }

    fn finish(mut self) -> Vec<CalendarEntry> {
        // sort_by_key is stable: same-date entries keep generation order
        self.entries.sort_by_key(|e| e.date);
        self.entries
    }
}

/// Generate every dated observance of the church year that begins on the
/// first Sunday of Advent of `start_year`.
pub fn generate_church_year(start_year: i32) -> Vec<CalendarEntry> {
    let next_year = start_year + 1;
    let easter = easter_sunday(next_year);
    let advent = first_advent_sunday(start_year);
    let next_advent = first_advent_sunday(next_year);

    let mut year = YearBuilder::default();

    advent_season(&mut year, advent, start_year);
    christmas_season(&mut year, start_year);
    epiphany_season(&mut year, next_year, easter);
    lent(&mut year, easter);
    holy_week_and_easter(&mut year, easter);
    easter_season(&mut year, easter);
    pentecost_season(&mut year, easter, next_advent);
    fixed_feasts(&mut year, start_year, easter);

    year.finish()
}

fn advent_season(year: &mut YearBuilder, advent: NaiveDate, start_year: i32) {
    let christmas_eve = ymd(start_year, 12, 24);

    for week in 1..=4 {
        let sunday = add_days(advent, 7 * (week - 1));
        year.push(
            sunday,
            format!("{week}-adventtisunnuntai"),
            format!("{week}. adventtisunnuntai"),
            EntryType::Sunday,
        );

        for day in 1..=6 {
            let date = add_days(sunday, day);
            if date >= christmas_eve {
                break;
            }
            year.push(
                date,
                format!("{week}-adventtiviikko"),
                format!("{week}. adventtiviikon arkipäivä"),
                EntryType::Weekday,
            );
        }
    }
}

fn christmas_season(year: &mut YearBuilder, start_year: i32) {
    let next_year = start_year + 1;

    year.push(ymd(start_year, 12, 24), CHRISTMAS_EVE, "Jouluaatto", EntryType::Special);
    year.push(ymd(start_year, 12, 25), CHRISTMAS_DAY, "Joulupäivä", EntryType::Feast);
    year.push(ymd(start_year, 12, 26), ST_STEPHEN, "Tapaninpäivä", EntryType::Feast);
    let st_john = "Apostoli Johanneksen päivä";
    let innocents = "Viattomien lasten päivä";
    year.push(ymd(start_year, 12, 27), ST_JOHN, st_john, EntryType::Special);
    year.push(ymd(start_year, 12, 28), HOLY_INNOCENTS, innocents, EntryType::Special);

    // Each Christmas Sunday exists only when a Sunday falls inside its window
    let first = sunday_on_or_after(ymd(start_year, 12, 27));
    let first = (first <= ymd(next_year, 1, 2)).then_some(first);
    if let Some(date) = first {
        year.push(date, FIRST_SUNDAY_OF_CHRISTMAS, "1. sunnuntai joulusta", EntryType::Sunday);
    }

    let second = sunday_on_or_after(ymd(next_year, 1, 2));
    if Some(second) != first && second <= ymd(next_year, 1, 5) {
        year.push(second, SECOND_SUNDAY_OF_CHRISTMAS, "2. sunnuntai joulusta", EntryType::Sunday);
    }

    year.push(ymd(next_year, 1, 1), NEW_YEAR, "Uudenvuodenpäivä", EntryType::Feast);
}

fn epiphany_season(year: &mut YearBuilder, next_year: i32, easter: NaiveDate) {
    year.push(ymd(next_year, 1, 6), EPIPHANY, "Loppiainen", EntryType::Feast);

    let pre_lent = add_days(easter, SEPTUAGESIMA_OFFSET);
    let mut sunday = sunday_on_or_after(ymd(next_year, 1, 7));
    let mut count = 1;

    while sunday < pre_lent && count <= MAX_EPIPHANY_SUNDAYS {
        year.push(
            sunday,
            format!("{count}-sunnuntai-loppiaisesta"),
            format!("{count}. sunnuntai loppiaisesta"),
            EntryType::Sunday,
        );
        sunday = add_days(sunday, 7);
        count += 1;
    }
}

fn lent(year: &mut YearBuilder, easter: NaiveDate) {
    let septuagesima = "3. sunnuntai ennen paastonaikaa";
    let sexagesima = "2. sunnuntai ennen paastonaikaa";
    year.push_offset(easter, -63, SEPTUAGESIMA, septuagesima, EntryType::Sunday);
    year.push_offset(easter, -56, SEXAGESIMA, sexagesima, EntryType::Sunday);
    year.push_offset(easter, -49, QUINQUAGESIMA, "Laskiaissunnuntai", EntryType::Sunday);
    year.push_offset(easter, -46, ASH_WEDNESDAY, "Tuhkakeskiviikko", EntryType::Special);

    for week in 1..=5 {
        year.push(
            add_days(easter, -49 + 7 * week),
            format!("{week}-paastonajan-sunnuntai"),
            format!("{week}. paastonajan sunnuntai"),
            EntryType::Sunday,
        );
    }
}

fn holy_week_and_easter(year: &mut YearBuilder, easter: NaiveDate) {
    year.push_offset(easter, -7, PALM_SUNDAY, "Palmusunnuntai", EntryType::Sunday);
    let holy_week = [
        (-6, HOLY_MONDAY, "Hiljaisen viikon maanantai"),
        (-5, HOLY_TUESDAY, "Hiljaisen viikon tiistai"),
        (-4, HOLY_WEDNESDAY, "Hiljaisen viikon keskiviikko"),
    ];
    for (offset, slug, name) in holy_week {
        year.push_offset(easter, offset, slug, name, EntryType::Weekday);
    }
    year.push_offset(easter, -3, MAUNDY_THURSDAY, "Kiirastorstai", EntryType::Special);

    year.push_offset(easter, -2, GOOD_FRIDAY, "Pitkäperjantai", EntryType::Feast);
    year.push_offset(
        easter,
        -2,
        GOOD_FRIDAY_HOUR_OF_DEATH,
        "Kristuksen kuolinhetken rukoushetki",
        EntryType::Service,
    );
    year.push_offset(
        easter,
        -2,
        GOOD_FRIDAY_EVENING,
        "Pitkäperjantain iltajumalanpalvelus",
        EntryType::Service,
    );

    year.push_offset(easter, -1, HOLY_SATURDAY, "Hiljainen lauantai", EntryType::Weekday);
    year.push_offset(easter, -1, EASTER_VIGIL, "Pääsiäisyö", EntryType::Service);

    year.push_offset(easter, 0, EASTER_DAY, "Pääsiäispäivä", EntryType::Feast);
    year.push_offset(easter, 1, EASTER_MONDAY, "2. pääsiäispäivä", EntryType::Feast);

    let easter_week = [
        (2, "paasiaisviikon-tiistai", "Pääsiäisviikon tiistai"),
        (3, "paasiaisviikon-keskiviikko", "Pääsiäisviikon keskiviikko"),
        (4, "paasiaisviikon-torstai", "Pääsiäisviikon torstai"),
        (5, "paasiaisviikon-perjantai", "Pääsiäisviikon perjantai"),
        (6, "paasiaisviikon-lauantai", "Pääsiäisviikon lauantai"),
    ];
    for (offset, slug, name) in easter_week {
        year.push_offset(easter, offset, slug, name, EntryType::Weekday);
    }
}

fn easter_season(year: &mut YearBuilder, easter: NaiveDate) {
    for week in 1..=6 {
        year.push(
            add_days(easter, 7 * week),
            format!("{week}-sunnuntai-paasiaisesta"),
            format!("{week}. sunnuntai pääsiäisestä"),
            EntryType::Sunday,
        );
    }

    year.push_offset(easter, 39, ASCENSION, "Helatorstai", EntryType::Feast);
    year.push_offset(easter, 48, PENTECOST_EVE, "Helluntaiaatto", EntryType::Service);
    year.push_offset(easter, 49, PENTECOST, "Helluntaipäivä", EntryType::Feast);

    for offset in 50..=55 {
        let name = "Helluntaiviikon arkipäivä";
        year.push_offset(easter, offset, PENTECOST_WEEK, name, EntryType::Weekday);
    }

    year.push_offset(easter, 56, TRINITY, "Pyhän Kolminaisuuden päivä", EntryType::Feast);
}

/// Sundays from two weeks after Pentecost up to the last Sunday before the
/// next Advent.
///
/// The last two slots always become Valvomisen sunnuntai and
/// Tuomiosunnuntai, even when they carry one of the indexed feasts.
fn pentecost_season(year: &mut YearBuilder, easter: NaiveDate, next_advent: NaiveDate) {
    let pentecost = add_days(easter, 49);
    let judgement_sunday = add_days(next_advent, -7);

    let mut sundays = Vec::new();
    let mut date = add_days(pentecost, 14);
    let mut index: u32 = 2;
    while date <= judgement_sunday {
        sundays.push((date, index));
        date = add_days(date, 7);
        index += 1;
    }

    let last = sundays.len().saturating_sub(1);
    for (position, (date, index)) in sundays.into_iter().enumerate() {
        if position == last {
            year.push(date, JUDGEMENT_SUNDAY, "Tuomiosunnuntai", EntryType::Sunday);
        } else if position + 1 == last {
            year.push(date, WATCHFULNESS_SUNDAY, "Valvomisen sunnuntai", EntryType::Sunday);
        } else if let Some((_, slug, name)) = INDEXED_FEASTS.iter().find(|(i, _, _)| *i == index) {
            year.push(date, *slug, *name, EntryType::Feast);
        } else {
            year.push(
                date,
                format!("{index}-sunnuntai-helluntaista"),
                format!("{index}. sunnuntai helluntaista"),
                EntryType::Sunday,
            );
        }
    }
}

/// Fixed and semi-fixed feasts. Everything except Independence Day falls in
/// the second calendar year of the church year.
fn fixed_feasts(year: &mut YearBuilder, start_year: i32, easter: NaiveDate) {
    let next_year = start_year + 1;

    year.push(ymd(start_year, 12, 6), INDEPENDENCE_DAY, "Itsenäisyyspäivä", EntryType::Special);
    year.push(ymd(next_year, 1, 19), ST_HENRIK, "Piispa Henrikin muistopäivä", EntryType::Special);
    year.push(ymd(next_year, 2, 2), CANDLEMAS, "Kynttilänpäivä", EntryType::Feast);

    let annunciation = ymd(next_year, 3, 25);
    if annunciation >= add_days(easter, -6) && annunciation <= add_days(easter, 7) {
        // Holy Week and Easter week take the day; move to the first free day after them
        let moved = add_days(easter, 8);
        warn!(
            "Annunciation {} falls within Holy Week or Easter week, moved to {}",
            annunciation, moved
        );
        year.push(moved, ANNUNCIATION, "Marian ilmestyspäivä", EntryType::Feast);
    } else {
        year.push(annunciation, ANNUNCIATION, "Marian ilmestyspäivä", EntryType::Feast);
    }

    let midsummer = saturday_on_or_before(ymd(next_year, 6, 26));
    if midsummer >= ymd(next_year, 6, 20) {
        year.push(midsummer, MIDSUMMER, "Juhannuspäivä", EntryType::Feast);
    }

    let michaelmas = sunday_on_or_after(ymd(next_year, 9, 29));
    if michaelmas <= ymd(next_year, 10, 5) {
        year.push(michaelmas, MICHAELMAS, "Mikkelinpäivä", EntryType::Feast);
    }

    let all_saints = saturday_on_or_before(ymd(next_year, 11, 6));
    if all_saints >= ymd(next_year, 10, 31) {
        year.push(all_saints, ALL_SAINTS, "Pyhäinpäivä", EntryType::Feast);
    }
}
