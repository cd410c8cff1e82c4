//! Read-only access to the reference datasets.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde_json::Value;
use tracing::info;

use super::holy_day::{HolyDayRecord, RawHolyDay};
use super::propers::PropersRecord;
use crate::error::{KirkkovuosiError, KirkkovuosiResult};

/// Source of holy-day and propers reference data.
///
/// Implementations hold fully loaded, immutable data: lookups never fail and
/// never perform I/O.
pub trait DataProvider {
    fn holy_day(&self, slug: &str) -> Option<&HolyDayRecord>;

    /// Every holy-day record, sorted by slug.
    fn all_days(&self) -> Vec<&HolyDayRecord>;

    fn propers(&self) -> &PropersRecord;
}

/// Reference data loaded from JSON files.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    holy_days: HashMap<String, HolyDayRecord>,
    propers: PropersRecord,
}

impl ReferenceData {
    pub fn new(holy_days: impl IntoIterator<Item = HolyDayRecord>, propers: PropersRecord) -> Self {
        let holy_days = holy_days.into_iter().map(|d| (d.slug.clone(), d)).collect();
        ReferenceData { holy_days, propers }
    }

    /// Load both datasets. Any unreadable or malformed file is an error;
    /// callers are expected to treat it as fatal at startup.
    pub fn load(holy_days_path: &Path, propers_path: &Path) -> KirkkovuosiResult<Self> {
        let holy_days = parse_holy_days(&read(holy_days_path)?)
            .map_err(|message| KirkkovuosiError::DataLoad {
                path: holy_days_path.to_path_buf(),
                message,
            })?;

        let mut propers: PropersRecord = serde_json::from_str(&read(propers_path)?)
            .map_err(|e| KirkkovuosiError::DataLoad {
                path: propers_path.to_path_buf(),
                message: e.to_string(),
            })?;
        propers.discard_unusable();

        let mut seen = HashSet::new();
        if let Some(duplicate) = holy_days.iter().find(|d| !seen.insert(d.slug.as_str())) {
            return Err(KirkkovuosiError::DataIntegrity(format!(
                "holy day '{}' appears more than once in {}",
                duplicate.slug,
                holy_days_path.display()
            )));
        }

        let data = Self::new(holy_days, propers);
        info!(
            "Loaded {} holy days, {} prefaces, {} litanies, {} refrains",
            data.holy_days.len(),
            data.propers.prefaces.len(),
            data.propers.kyrie_litanies.len(),
            data.propers.psalm_refrains.len()
        );
        Ok(data)
    }

    pub fn is_empty(&self) -> bool {
        self.holy_days.is_empty()
    }
}

fn read(path: &Path) -> KirkkovuosiResult<String> {
    std::fs::read_to_string(path).map_err(|e| KirkkovuosiError::DataLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The holy-day file is either a list of records or an object keyed by slug.
fn parse_holy_days(content: &str) -> Result<Vec<HolyDayRecord>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let raw: Vec<RawHolyDay> = match value {
        Value::Array(_) => serde_json::from_value(value).map_err(|e| e.to_string())?,
        Value::Object(_) => {
            let by_slug: BTreeMap<String, RawHolyDay> =
                serde_json::from_value(value).map_err(|e| e.to_string())?;
            by_slug
                .into_iter()
                .map(|(key, raw)| raw.with_slug_fallback(&key))
                .collect()
        }
        _ => return Err("expected a list of holy days or an object keyed by slug".to_string()),
    };

    let records: Vec<HolyDayRecord> = raw.into_iter().map(HolyDayRecord::from).collect();
    if let Some(unnamed) = records.iter().position(|r| r.slug.is_empty()) {
        return Err(format!("holy day record #{} has no slug", unnamed + 1));
    }
    Ok(records)
}

impl DataProvider for ReferenceData {
    fn holy_day(&self, slug: &str) -> Option<&HolyDayRecord> {
        self.holy_days.get(slug)
    }

    fn all_days(&self) -> Vec<&HolyDayRecord> {
        let mut days: Vec<&HolyDayRecord> = self.holy_days.values().collect();
        days.sort_by(|a, b| a.slug.cmp(&b.slug));
        days
    }

    fn propers(&self) -> &PropersRecord {
        &self.propers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PROPERS: &str = r#"{ "prefaatiot": [], "kyrieLitaniat": [], "kertosaakeet": [] }"#;

    #[test]
    fn test_load_list_of_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let holy = dir.path().join("pyhapaivat.json");
        let propers = dir.path().join("propersit.json");
        fs::write(
            &holy,
            r#"[{ "slug": "paasiaispaiva", "name": "Pääsiäispäivä" },
                { "slug": "joulupaiva", "name": "Joulupäivä" }]"#,
        )
        .expect("write");
        fs::write(&propers, PROPERS).expect("write");

        let data = ReferenceData::load(&holy, &propers).expect("Should load");
        assert_eq!(data.holy_day("joulupaiva").map(|d| d.name.as_str()), Some("Joulupäivä"));
        let slugs: Vec<&str> = data.all_days().iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["joulupaiva", "paasiaispaiva"]);
    }

    #[test]
    fn test_load_records_keyed_by_slug() {
        let dir = tempfile::tempdir().expect("tempdir");
        let holy = dir.path().join("pyhapaivat.json");
        let propers = dir.path().join("propersit.json");
        fs::write(&holy, r#"{ "loppiainen": { "name": "Loppiainen" } }"#).expect("write");
        fs::write(&propers, PROPERS).expect("write");

        let data = ReferenceData::load(&holy, &propers).expect("Should load");
        assert_eq!(data.holy_day("loppiainen").map(|d| d.slug.as_str()), Some("loppiainen"));
        assert!(data.holy_day("missing").is_none());
    }

    #[test]
    fn test_malformed_data_fails_to_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let holy = dir.path().join("pyhapaivat.json");
        let propers = dir.path().join("propersit.json");
        fs::write(&holy, "[{ \"slug\": ").expect("write");
        fs::write(&propers, PROPERS).expect("write");

        let err = ReferenceData::load(&holy, &propers).expect_err("Should fail");
        assert!(matches!(err, KirkkovuosiError::DataLoad { .. }));

        let missing =
            ReferenceData::load(&dir.path().join("nope.json"), &propers).expect_err("Should fail");
        assert!(matches!(missing, KirkkovuosiError::DataLoad { .. }));
    }

    #[test]
    fn test_incomplete_items_degrade_instead_of_failing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let holy = dir.path().join("pyhapaivat.json");
        let propers = dir.path().join("propersit.json");
        fs::write(
            &holy,
            r#"[{ "slug": "1-adventtisunnuntai", "name": "1. adventtisunnuntai",
                  "prayers": [{ "number": 1 }],
                  "yearCycles": { "1": { "gospel": { "text": "Kun he lähestyivät..." } } } }]"#,
        )
        .expect("write");
        fs::write(
            &propers,
            r#"{
                "prefaatiot": [
                    { "title": "Tekstitön", "appliesTo": ["adventti"] },
                    { "title": "Adventtiaika", "appliesTo": ["adventti"], "text": "...joka tulee." }
                ],
                "kyrieLitaniat": [{ "texts": [] }, { "slug": "adventin-kyrie" }]
            }"#,
        )
        .expect("write");

        let data = ReferenceData::load(&holy, &propers).expect("Should load despite gaps");
        let day = data.holy_day("1-adventtisunnuntai").expect("record");
        assert!(day.prayers.is_empty());
        let gospel = day.lectionary.cycle(1).and_then(|c| c.gospel.as_ref()).expect("gospel");
        assert_eq!(gospel.reference, "");

        let titles: Vec<&str> = data.propers().prefaces.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Adventtiaika"]);
        assert!(data.propers().litany("adventin-kyrie").is_some());
        assert_eq!(data.propers().kyrie_litanies.len(), 1);
    }

    #[test]
    fn test_duplicate_slugs_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let holy = dir.path().join("pyhapaivat.json");
        let propers = dir.path().join("propersit.json");
        fs::write(
            &holy,
            r#"[{ "slug": "loppiainen", "name": "Loppiainen" },
                { "slug": "loppiainen", "name": "Loppiainen" }]"#,
        )
        .expect("write");
        fs::write(&propers, PROPERS).expect("write");

        let err = ReferenceData::load(&holy, &propers).expect_err("Should fail");
        assert!(matches!(err, KirkkovuosiError::DataIntegrity(_)));
    }

    #[test]
    fn test_records_without_slug_are_rejected() {
        let err = parse_holy_days(r#"[{ "name": "Nimetön" }]"#).expect_err("Should fail");
        assert!(err.contains("no slug"));
    }
}
