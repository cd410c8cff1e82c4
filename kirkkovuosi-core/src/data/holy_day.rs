//! Holy-day reference records.
//!
//! The source JSON comes in three shapes: Sundays and feasts carry one set of
//! readings per year cycle, weekdays carry flat Old/New Testament lists, and
//! the rest carry a plain reading list. The shape is decided once when the
//! record is loaded and kept as a `Lectionary` variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A Bible reading reference, optionally with its text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    #[serde(default)]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_intro: Option<String>,
    /// Set when the text was borrowed from another year cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
}

impl Reading {
    /// A reading that only points elsewhere ("ks. ...") and has no text of its own.
    pub fn is_cross_reference(&self) -> bool {
        self.reference.contains("ks.") && self.text.is_none()
    }
}

/// Readings of one Sunday or feast for one year cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReadings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_reading: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_reading: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gospel: Option<Reading>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_sermon_texts: Vec<Reading>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayReadings {
    #[serde(default)]
    pub ot_readings: Vec<Reading>,
    #[serde(default)]
    pub nt_readings: Vec<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gospel: Option<Reading>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReadings {
    #[serde(default)]
    pub readings: Vec<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gospel: Option<Reading>,
}

/// Readings of a holy day, in whichever shape the day carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Lectionary {
    Sunday { cycles: BTreeMap<u8, CycleReadings> },
    Weekday(WeekdayReadings),
    Simple(SimpleReadings),
    Empty,
}

impl Lectionary {
    pub fn cycle(&self, year_cycle: u8) -> Option<&CycleReadings> {
        match self {
            Lectionary::Sunday { cycles } => cycles.get(&year_cycle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prayer {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub text: String,
}

/// Reference data for one holy day, keyed by slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawHolyDay")]
pub struct HolyDayRecord {
    pub slug: String,
    pub name: String,
    pub season: Option<String>,
    pub period: Option<String>,
    pub latin_name: Option<String>,
    pub liturgical_color: Option<String>,
    pub description: Option<String>,
    pub lectionary: Lectionary,
    pub psalm: Option<Reading>,
    pub psalm_verse: Vec<String>,
    pub hallelujah: Option<String>,
    pub prayers: Vec<Prayer>,
    pub hymns: Vec<String>,
}

/// Holy-day record as it appears in the reference JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawHolyDay {
    slug: String,
    name: String,
    season: Option<String>,
    period: Option<String>,
    latin_name: Option<String>,
    liturgical_color: Option<String>,
    description: Option<String>,
    year_cycles: Option<BTreeMap<String, CycleReadings>>,
    weekday_texts: Option<WeekdayReadings>,
    readings: Option<Vec<Reading>>,
    gospel: Option<Reading>,
    /// Already-converted records serialize their readings here.
    lectionary: Option<Lectionary>,
    psalm: Option<Reading>,
    psalm_verse: Vec<String>,
    hallelujah: Option<String>,
    prayers: Vec<Prayer>,
    hymns: Vec<String>,
}

impl RawHolyDay {
    pub(crate) fn with_slug_fallback(mut self, key: &str) -> Self {
        if self.slug.is_empty() {
            self.slug = key.to_string();
        }
        self
    }

    fn lectionary(&mut self) -> Lectionary {
        if let Some(lectionary) = self.lectionary.take() {
            return lectionary;
        }

        if let Some(raw_cycles) = self.year_cycles.take().filter(|c| !c.is_empty()) {
            let mut cycles = BTreeMap::new();
            for (key, readings) in raw_cycles {
                match key.trim().parse::<u8>() {
                    Ok(cycle @ 1..=3) => {
                        cycles.insert(cycle, readings);
                    }
                    _ => warn!("Ignoring year cycle '{}' of '{}'", key, self.slug),
                }
            }
            return Lectionary::Sunday { cycles };
        }

        if let Some(weekday) = self.weekday_texts.take() {
            return Lectionary::Weekday(weekday);
        }

        let readings = self.readings.take().unwrap_or_default();
        let gospel = self.gospel.take();
        if readings.is_empty() && gospel.is_none() {
            Lectionary::Empty
        } else {
            Lectionary::Simple(SimpleReadings { readings, gospel })
        }
    }
}

impl From<RawHolyDay> for HolyDayRecord {
    fn from(mut raw: RawHolyDay) -> Self {
        let lectionary = raw.lectionary();
        let slug = &raw.slug;
        raw.prayers.retain(|p| {
            let usable = !p.text.trim().is_empty();
            if !usable {
                warn!("Skipping prayer {} of '{}': it has no text", p.number, slug);
            }
            usable
        });
        HolyDayRecord {
            slug: raw.slug,
            name: raw.name,
            season: raw.season,
            period: raw.period,
            latin_name: raw.latin_name,
            liturgical_color: raw.liturgical_color,
            description: raw.description,
            lectionary,
            psalm: raw.psalm,
            psalm_verse: raw.psalm_verse,
            hallelujah: raw.hallelujah,
            prayers: raw.prayers,
            hymns: raw.hymns,
        }
    }
}
