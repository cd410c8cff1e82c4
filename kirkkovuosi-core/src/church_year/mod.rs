//! Church year types and generation.

mod generate;
pub mod slugs;

pub use generate::generate_church_year;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::computus::{church_year_label, year_cycle};

/// One liturgical year, from the first Sunday of Advent up to the Saturday
/// before the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchYear {
    pub start_year: i32,
    pub label: String,
    pub year_cycle: u8,
}

impl ChurchYear {
    pub fn new(start_year: i32) -> Self {
        ChurchYear {
            start_year,
            label: church_year_label(start_year),
            year_cycle: year_cycle(start_year),
        }
    }
}

/// Kind of observance. Declaration order is precedence order: when several
/// entries share a date, the one with the lowest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Feast,
    Special,
    Sunday,
    Weekday,
    Service,
}

impl EntryType {
    /// Precedence rank, 1 (feast) is strongest.
    pub fn priority(self) -> u8 {
        match self {
            EntryType::Feast => 1,
            EntryType::Special => 2,
            EntryType::Sunday => 3,
            EntryType::Weekday => 4,
            EntryType::Service => 5,
        }
    }

    /// Sundays and feasts anchor the week that follows them.
    pub fn anchors_week(self) -> bool {
        matches!(self, EntryType::Sunday | EntryType::Feast)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Feast => "feast",
            EntryType::Special => "special",
            EntryType::Sunday => "sunday",
            EntryType::Weekday => "weekday",
            EntryType::Service => "service",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feast" => Ok(EntryType::Feast),
            "special" => Ok(EntryType::Special),
            "sunday" => Ok(EntryType::Sunday),
            "weekday" => Ok(EntryType::Weekday),
            "service" => Ok(EntryType::Service),
            other => Err(format!(
                "Unknown entry type '{}'. \
                 Expected one of: feast, special, sunday, weekday, service",
                other
            )),
        }
    }
}

/// A dated observance in a generated church year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl CalendarEntry {
    pub fn new(
        date: NaiveDate,
        slug: impl Into<String>,
        name: impl Into<String>,
        entry_type: EntryType,
    ) -> Self {
        CalendarEntry {
            date,
            slug: slug.into(),
            name: name.into(),
            entry_type,
        }
    }
}

impl fmt::Display for CalendarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}

/// A generated church year as exposed to callers: the header plus the
/// ordered entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchYearCalendar {
    pub church_year: ChurchYear,
    pub entries: Vec<CalendarEntry>,
}
