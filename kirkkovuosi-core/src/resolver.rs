//! Date resolution: which observance governs a date, with its readings and
//! propers.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar_cache::CalendarCache;
use crate::church_year::{CalendarEntry, ChurchYear, ChurchYearCalendar, EntryType};
use crate::computus::{church_year_start, weekday_name_fi};
use crate::data::{
    CycleReadings, DataProvider, HolyDayRecord, Lectionary, Prayer, Reading, SimpleReadings,
    WeekdayReadings,
};
use crate::propers::{PropersResolver, PropersResult};
use crate::season::season_label;

/// Readings of the day in the shape its record carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayTexts {
    Cycle(CycleReadings),
    Weekday(WeekdayReadings),
    Simple(SimpleReadings),
}

/// A calendar entry merged with its reference record and propers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDay {
    pub date: NaiveDate,
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub season: Option<String>,
    pub period: Option<String>,
    pub latin_name: Option<String>,
    pub liturgical_color: Option<String>,
    pub description: Option<String>,
    pub texts: Option<DayTexts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_year_cycles: Option<BTreeMap<u8, CycleReadings>>,
    pub psalm: Option<Reading>,
    #[serde(default)]
    pub psalm_verse: Vec<String>,
    pub hallelujah: Option<String>,
    #[serde(default)]
    pub prayers: Vec<Prayer>,
    #[serde(default)]
    pub hymns: Vec<String>,
    pub propers: PropersResult,
}

/// Everything known about one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDay {
    pub date: NaiveDate,
    pub church_year: ChurchYear,
    /// Governing observance, `None` when nothing falls on the date.
    pub holy_day: Option<EnrichedDay>,
    /// Latest Sunday or feast before the date, set only when `holy_day` is `None`.
    pub preceding_sunday: Option<EnrichedDay>,
    pub additional_services: Vec<EnrichedDay>,
    pub day_of_week: String,
    pub season: Option<String>,
}

/// Resolves dates against generated church years and a reference data provider.
pub struct DateResolver<P> {
    data: P,
    cache: CalendarCache,
}

impl<P: DataProvider> DateResolver<P> {
    pub fn new(data: P) -> Self {
        Self::with_cache(data, CalendarCache::new())
    }

    pub fn with_cache(data: P, cache: CalendarCache) -> Self {
        DateResolver { data, cache }
    }

    /// Resolve a point in time by its UTC calendar date.
    pub fn resolve_datetime(&self, instant: DateTime<Utc>) -> ResolvedDay {
        self.resolve_date(instant.date_naive())
    }

    pub fn resolve_date(&self, date: NaiveDate) -> ResolvedDay {
        let start_year = church_year_start(date);
        let church_year = ChurchYear::new(start_year);
        let calendar = self.cache.get(start_year);

        let mut matches: Vec<&CalendarEntry> = calendar.iter().filter(|e| e.date == date).collect();
        // Stable: same-priority entries keep generation order
        matches.sort_by_key(|e| e.entry_type.priority());

        debug!(
            "Resolving {}: {} matching entries in church year {}",
            date,
            matches.len(),
            start_year
        );

        let cycle = church_year.year_cycle;
        let (holy_day, preceding_sunday, additional_services) = match matches.split_first() {
            Some((first, rest)) => {
                let rest = rest.iter().map(|e| self.enrich(e, cycle)).collect();
                (Some(self.enrich(first, cycle)), None, rest)
            }
            None => {
                let preceding = preceding_anchor(&calendar, date).map(|e| self.enrich(e, cycle));
                (None, preceding, Vec::new())
            }
        };

        let season = holy_day
            .as_ref()
            .or(preceding_sunday.as_ref())
            .and_then(|d| d.season.clone());

        ResolvedDay {
            date,
            church_year,
            holy_day,
            preceding_sunday,
            additional_services,
            day_of_week: weekday_name_fi(date).to_string(),
            season,
        }
    }

    pub fn get_church_year_calendar(&self, start_year: i32) -> ChurchYearCalendar {
        ChurchYearCalendar {
            church_year: ChurchYear::new(start_year),
            entries: self.cache.get(start_year).to_vec(),
        }
    }

    pub fn get_day_data(&self, slug: &str) -> Option<&HolyDayRecord> {
        self.data.holy_day(slug)
    }

    pub fn get_all_days(&self) -> Vec<&HolyDayRecord> {
        self.data.all_days()
    }

    pub fn get_propers(&self, slug: &str, day: Option<&HolyDayRecord>) -> PropersResult {
        PropersResolver::new(self.data.propers()).get_propers(slug, day)
    }

    fn enrich(&self, entry: &CalendarEntry, year_cycle: u8) -> EnrichedDay {
        let record = self.data.holy_day(&entry.slug);
        if record.is_none() {
            debug!("No reference record for '{}'", entry.slug);
        }

        let (texts, all_year_cycles) = match record.map(|r| &r.lectionary) {
            Some(Lectionary::Sunday { cycles }) => {
                let texts = cycles.get(&year_cycle).map(|active| {
                    DayTexts::Cycle(resolve_cross_references(&entry.slug, active, cycles))
                });
                (texts, Some(cycles.clone()))
            }
            Some(Lectionary::Weekday(weekday)) => (Some(DayTexts::Weekday(weekday.clone())), None),
            Some(Lectionary::Simple(simple)) => (Some(DayTexts::Simple(simple.clone())), None),
            Some(Lectionary::Empty) | None => (None, None),
        };

        EnrichedDay {
            date: entry.date,
            slug: entry.slug.clone(),
            name: entry.name.clone(),
            entry_type: entry.entry_type,
            season: season_label(&entry.slug, record),
            period: record.and_then(|r| r.period.clone()),
            latin_name: record.and_then(|r| r.latin_name.clone()),
            liturgical_color: record.and_then(|r| r.liturgical_color.clone()),
            description: record.and_then(|r| r.description.clone()),
            texts,
            all_year_cycles,
            psalm: record.and_then(|r| r.psalm.clone()),
            psalm_verse: record.map(|r| r.psalm_verse.clone()).unwrap_or_default(),
            hallelujah: record.and_then(|r| r.hallelujah.clone()),
            prayers: record.map(|r| r.prayers.clone()).unwrap_or_default(),
            hymns: record.map(|r| r.hymns.clone()).unwrap_or_default(),
            propers: self.get_propers(&entry.slug, record),
        }
    }
}

/// Latest Sunday or feast on or before `date`. When several share that
/// date, the strongest by precedence wins.
fn preceding_anchor(calendar: &[CalendarEntry], date: NaiveDate) -> Option<&CalendarEntry> {
    let anchors = calendar.iter().filter(|e| e.entry_type.anchors_week() && e.date <= date);
    let latest = anchors.clone().map(|e| e.date).max()?;
    anchors
        .filter(|e| e.date == latest)
        .min_by_key(|e| e.entry_type.priority())
}

/// Replace "ks." pointers in the active cycle with the text of year cycle 1.
fn resolve_cross_references(
    slug: &str,
    active: &CycleReadings,
    cycles: &BTreeMap<u8, CycleReadings>,
) -> CycleReadings {
    let mut readings = active.clone();
    let base = cycles.get(&1);

    let pairs = [
        (&mut readings.first_reading, base.and_then(|b| b.first_reading.as_ref())),
        (&mut readings.second_reading, base.and_then(|b| b.second_reading.as_ref())),
        (&mut readings.gospel, base.and_then(|b| b.gospel.as_ref())),
    ];
    for (reading, source) in pairs {
        if let Some(reading) = reading.as_mut() {
            borrow_text(slug, reading, source);
        }
    }

    for (index, reading) in readings.alternative_sermon_texts.iter_mut().enumerate() {
        let source = base.and_then(|b| b.alternative_sermon_texts.get(index));
        borrow_text(slug, reading, source);
    }

    readings
}

fn borrow_text(slug: &str, reading: &mut Reading, source: Option<&Reading>) {
    if !reading.is_cross_reference() {
        return;
    }

    match source.filter(|s| s.text.is_some()) {
        Some(source) => {
            reading.text = source.text.clone();
            reading.book_intro = source.book_intro.clone();
            reading.cross_reference = Some(format!("Teksti vuosikerrasta 1: {}", source.reference));
        }
        None => warn!(
            "Cross-reference '{}' of '{}' has no text in year cycle 1",
            reading.reference, slug
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::church_year::slugs::*;
    use crate::computus::ymd;
    use crate::data::ReferenceData;

    fn reading(reference: &str, text: Option<&str>) -> Reading {
        Reading {
            reference: reference.into(),
            text: text.map(String::from),
            book_intro: None,
            cross_reference: None,
        }
    }

    #[test]
    fn test_preceding_anchor_prefers_feast_on_same_date() {
        let sunday = ymd(2026, 10, 4);
        let calendar = vec![
            CalendarEntry::new(
                sunday,
                "19-sunnuntai-helluntaista",
                "19. sunnuntai helluntaista",
                EntryType::Sunday,
            ),
            CalendarEntry::new(sunday, MICHAELMAS, "Mikkelinpäivä", EntryType::Feast),
        ];
        let found = preceding_anchor(&calendar, ymd(2026, 10, 6)).expect("Should find anchor");
        assert_eq!(found.slug, MICHAELMAS);
        assert!(preceding_anchor(&calendar, ymd(2026, 10, 3)).is_none());
    }

    #[test]
    fn test_cross_reference_borrows_cycle_one_text() {
        let mut cycles = BTreeMap::new();
        cycles.insert(
            1,
            CycleReadings {
                gospel: Some(Reading {
                    reference: "Matt. 21:1-9".into(),
                    text: Some("Kun he lähestyivät Jerusalemia".into()),
                    book_intro: Some("Matteuksen evankeliumi".into()),
                    cross_reference: None,
                }),
                ..Default::default()
            },
        );
        cycles.insert(
            2,
            CycleReadings {
                gospel: Some(reading("ks. 1. vuosikerta", None)),
                first_reading: Some(reading("ks. 1. vuosikerta", None)),
                second_reading: Some(reading("Room. 13:11-14", Some("Te tiedätte..."))),
                ..Default::default()
            },
        );

        let resolved = resolve_cross_references(FIRST_ADVENT, &cycles[&2], &cycles);
        let gospel = resolved.gospel.expect("gospel");
        assert_eq!(gospel.text.as_deref(), Some("Kun he lähestyivät Jerusalemia"));
        assert_eq!(gospel.book_intro.as_deref(), Some("Matteuksen evankeliumi"));
        assert!(gospel.cross_reference.is_some_and(|n| n.contains("Matt. 21:1-9")));

        // No cycle-1 text to borrow: left as is
        let first = resolved.first_reading.expect("first reading");
        assert!(first.text.is_none());
        assert!(first.cross_reference.is_none());

        let second = resolved.second_reading.expect("second reading");
        assert_eq!(second.text.as_deref(), Some("Te tiedätte..."));
        assert!(second.cross_reference.is_none());
    }

    #[test]
    fn test_resolves_without_reference_data() {
        let resolver = DateResolver::new(ReferenceData::default());
        let day = resolver.resolve_date(ymd(2025, 12, 25));
        let holy_day = day.holy_day.expect("Christmas Day");
        assert_eq!(holy_day.slug, CHRISTMAS_DAY);
        assert!(holy_day.texts.is_none());
        assert_eq!(holy_day.season.as_deref(), Some("Joulukausi"));
        assert_eq!(day.season.as_deref(), Some("Joulukausi"));
        assert_eq!(holy_day.propers, PropersResult::default());
    }

    #[test]
    fn test_resolve_datetime_uses_utc_date() {
        let resolver = DateResolver::new(ReferenceData::default());
        let instant = ymd(2026, 4, 5).and_hms_opt(23, 30, 0).expect("valid time").and_utc();
        let day = resolver.resolve_datetime(instant);
        assert_eq!(day.date, ymd(2026, 4, 5));
        assert_eq!(day.holy_day.map(|d| d.slug), Some(EASTER_DAY.to_string()));
    }

    #[test]
    fn test_church_year_calendar_projection() {
        let resolver = DateResolver::new(ReferenceData::default());
        let calendar = resolver.get_church_year_calendar(2025);
        assert_eq!(calendar.church_year.year_cycle, 1);
        assert_eq!(calendar.entries.first().map(|e| e.slug.as_str()), Some(FIRST_ADVENT));
        assert_eq!(calendar.entries.len(), crate::church_year::generate_church_year(2025).len());
    }
}
