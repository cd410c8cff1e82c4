//! Season keys and season inference.
//!
//! A slug (plus the day's reference record, when there is one) maps to an
//! ordered set of season keys through `SEASON_RULES`. Every matching rule
//! contributes its keys; the order of the result is the lookup preference
//! used when choosing propers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::church_year::slugs::*;
use crate::data::HolyDayRecord;

/// The three festal cycles of the church year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "Joulukausi")]
    Christmas,
    #[serde(rename = "Pääsiäiskausi")]
    Easter,
    #[serde(rename = "Helluntaikausi")]
    Pentecost,
}

impl Season {
    pub fn label(self) -> &'static str {
        match self {
            Season::Christmas => "Joulukausi",
            Season::Easter => "Pääsiäiskausi",
            Season::Pentecost => "Helluntaikausi",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vocabulary used by the propers data (`appliesTo`) and the litany table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonKey {
    Adventti,
    Joulu,
    Joulunaika,
    Loppiainen,
    Loppiaisaika,
    Kynttilanpaiva,
    MarianIlmestyspaiva,
    MarianJuhla,
    PaastonaikaaEdeltava,
    Laskiainen,
    Tuhkakeskiviikko,
    Paastonaika,
    Palmusunnuntai,
    HiljainenViikko,
    Kiirastorstai,
    Pitkaperjantai,
    Paasiaisyo,
    Paasiainen,
    Paasiaisaika,
    Helatorstai,
    Helluntai,
    Kolminaisuus,
    Helluntaiaika,
    Juhannus,
    Apostolit,
    Kirkastus,
    Mikkeli,
    Enkelit,
    Uskonpuhdistus,
    Pyhainpaiva,
    Pyhimykset,
    KirkkovuodenLoppu,
    Tuomiosunnuntai,
    Isanmaa,
    Kiitos,
    Yleinen,
}

impl SeasonKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonKey::Adventti => "adventti",
            SeasonKey::Joulu => "joulu",
            SeasonKey::Joulunaika => "joulunaika",
            SeasonKey::Loppiainen => "loppiainen",
            SeasonKey::Loppiaisaika => "loppiaisaika",
            SeasonKey::Kynttilanpaiva => "kynttilanpaiva",
            SeasonKey::MarianIlmestyspaiva => "marian-ilmestyspaiva",
            SeasonKey::MarianJuhla => "marian-juhla",
            SeasonKey::PaastonaikaaEdeltava => "paastonaikaa-edeltava",
            SeasonKey::Laskiainen => "laskiainen",
            SeasonKey::Tuhkakeskiviikko => "tuhkakeskiviikko",
            SeasonKey::Paastonaika => "paastonaika",
            SeasonKey::Palmusunnuntai => "palmusunnuntai",
            SeasonKey::HiljainenViikko => "hiljainen-viikko",
            SeasonKey::Kiirastorstai => "kiirastorstai",
            SeasonKey::Pitkaperjantai => "pitkaperjantai",
            SeasonKey::Paasiaisyo => "paasiaisyo",
            SeasonKey::Paasiainen => "paasiainen",
            SeasonKey::Paasiaisaika => "paasiaisaika",
            SeasonKey::Helatorstai => "helatorstai",
            SeasonKey::Helluntai => "helluntai",
            SeasonKey::Kolminaisuus => "kolminaisuus",
            SeasonKey::Helluntaiaika => "helluntaiaika",
            SeasonKey::Juhannus => "juhannus",
            SeasonKey::Apostolit => "apostolit",
            SeasonKey::Kirkastus => "kirkastus",
            SeasonKey::Mikkeli => "mikkeli",
            SeasonKey::Enkelit => "enkelit",
            SeasonKey::Uskonpuhdistus => "uskonpuhdistus",
            SeasonKey::Pyhainpaiva => "pyhainpaiva",
            SeasonKey::Pyhimykset => "pyhimykset",
            SeasonKey::KirkkovuodenLoppu => "kirkkovuoden-loppu",
            SeasonKey::Tuomiosunnuntai => "tuomiosunnuntai",
            SeasonKey::Isanmaa => "isanmaa",
            SeasonKey::Kiitos => "kiitos",
            SeasonKey::Yleinen => "yleinen",
        }
    }

    /// Festal cycle the key belongs to, if it belongs to one.
    pub fn season(self) -> Option<Season> {
        use SeasonKey::*;
        match self {
            Adventti | Joulu | Joulunaika | Loppiainen | Loppiaisaika | Kynttilanpaiva => {
                Some(Season::Christmas)
            }
            MarianIlmestyspaiva | PaastonaikaaEdeltava | Laskiainen | Tuhkakeskiviikko
            | Paastonaika | Palmusunnuntai | HiljainenViikko | Kiirastorstai | Pitkaperjantai
            | Paasiaisyo | Paasiainen | Paasiaisaika | Helatorstai => Some(Season::Easter),
            Helluntai | Kolminaisuus | Helluntaiaika | Juhannus | Apostolit | Kirkastus | Mikkeli
            | Uskonpuhdistus | Pyhainpaiva | KirkkovuodenLoppu | Tuomiosunnuntai => {
                Some(Season::Pentecost)
            }
            MarianJuhla | Enkelit | Pyhimykset | Isanmaa | Kiitos | Yleinen => None,
        }
    }

    /// Word looked for in the free-text occasion of psalm refrains.
    pub fn refrain_keyword(self) -> Option<&'static str> {
        match self {
            SeasonKey::Adventti => Some("adventti"),
            SeasonKey::Joulunaika => Some("joulu"),
            SeasonKey::Loppiaisaika => Some("loppiai"),
            SeasonKey::Paastonaika => Some("paasto"),
            SeasonKey::HiljainenViikko => Some("hiljai"),
            SeasonKey::Paasiaisaika => Some("paasiais"),
            SeasonKey::Helluntaiaika => Some("helluntai"),
            SeasonKey::KirkkovuodenLoppu => Some("kirkkovuoden"),
            SeasonKey::Pyhimykset => Some("pyhi"),
            _ => None,
        }
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule looks at.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Slug(&'static str),
    SlugPrefix(&'static str),
    SlugSuffix(&'static str),
    /// Folded substring of the record's `period` or `season` field.
    Period(&'static str),
}

impl Condition {
    fn holds(self, slug: &str, day: Option<&HolyDayRecord>) -> bool {
        match self {
            Condition::Slug(s) => slug == s,
            Condition::SlugPrefix(p) => slug.starts_with(p),
            Condition::SlugSuffix(s) => slug.ends_with(s),
            Condition::Period(needle) => day.is_some_and(|d| {
                [&d.period, &d.season]
                    .into_iter()
                    .flatten()
                    .any(|field| fold(field).contains(needle))
            }),
        }
    }
}

/// One row of the season table: when `when` holds, `keys` apply.
#[derive(Debug, Clone, Copy)]
pub struct SeasonRule {
    pub when: Condition,
    pub keys: &'static [SeasonKey],
}

const fn rule(when: Condition, keys: &'static [SeasonKey]) -> SeasonRule {
    SeasonRule { when, keys }
}

use Condition::{Period, Slug, SlugPrefix, SlugSuffix};
use SeasonKey as K;

/// Ordered season table. Slug rules come first so that a day's own keys
/// precede the keys inferred from its period.
pub const SEASON_RULES: &[SeasonRule] = &[
    // Christmas cycle
    rule(SlugSuffix("-adventtisunnuntai"), &[K::Adventti]),
    rule(SlugSuffix("-adventtiviikko"), &[K::Adventti]),
    rule(Slug(CHRISTMAS_EVE), &[K::Joulu, K::Joulunaika]),
    rule(Slug(CHRISTMAS_DAY), &[K::Joulu, K::Joulunaika]),
    rule(Slug(ST_STEPHEN), &[K::Joulunaika, K::Pyhimykset]),
    rule(Slug(ST_JOHN), &[K::Joulunaika, K::Apostolit]),
    rule(Slug(HOLY_INNOCENTS), &[K::Joulunaika]),
    rule(SlugSuffix("-sunnuntai-joulusta"), &[K::Joulunaika]),
    rule(Slug(NEW_YEAR), &[K::Joulunaika]),
    rule(Slug(EPIPHANY), &[K::Loppiainen, K::Loppiaisaika]),
    rule(SlugSuffix("-sunnuntai-loppiaisesta"), &[K::Loppiaisaika]),
    rule(Slug(ST_HENRIK), &[K::Pyhimykset]),
    rule(Slug(CANDLEMAS), &[K::Kynttilanpaiva, K::MarianJuhla, K::Loppiaisaika]),
    // Easter cycle
    rule(SlugSuffix("-ennen-paastonaikaa"), &[K::PaastonaikaaEdeltava]),
    rule(Slug(QUINQUAGESIMA), &[K::Laskiainen, K::PaastonaikaaEdeltava]),
    rule(Slug(ASH_WEDNESDAY), &[K::Tuhkakeskiviikko, K::Paastonaika]),
    rule(SlugSuffix("-paastonajan-sunnuntai"), &[K::Paastonaika]),
    rule(Slug(ANNUNCIATION), &[K::MarianIlmestyspaiva, K::MarianJuhla]),
    rule(Slug(PALM_SUNDAY), &[K::Palmusunnuntai, K::HiljainenViikko, K::Paastonaika]),
    rule(SlugPrefix("hiljaisen-viikon-"), &[K::HiljainenViikko, K::Paastonaika]),
    rule(Slug(MAUNDY_THURSDAY), &[K::Kiirastorstai, K::HiljainenViikko]),
    rule(Slug(GOOD_FRIDAY), &[K::Pitkaperjantai, K::HiljainenViikko]),
    rule(Slug(GOOD_FRIDAY_HOUR_OF_DEATH), &[K::Pitkaperjantai, K::HiljainenViikko]),
    rule(Slug(GOOD_FRIDAY_EVENING), &[K::Pitkaperjantai, K::HiljainenViikko]),
    rule(Slug(HOLY_SATURDAY), &[K::HiljainenViikko]),
    rule(Slug(EASTER_VIGIL), &[K::Paasiaisyo, K::Paasiainen]),
    rule(Slug(EASTER_DAY), &[K::Paasiainen, K::Paasiaisaika]),
    rule(Slug(EASTER_MONDAY), &[K::Paasiainen, K::Paasiaisaika]),
    rule(SlugPrefix("paasiaisviikon-"), &[K::Paasiaisaika]),
    rule(SlugSuffix("-sunnuntai-paasiaisesta"), &[K::Paasiaisaika]),
    rule(Slug(ASCENSION), &[K::Helatorstai, K::Paasiaisaika]),
    // Pentecost cycle
    rule(Slug(PENTECOST_EVE), &[K::Helluntai]),
    rule(Slug(PENTECOST), &[K::Helluntai]),
    rule(Slug(PENTECOST_WEEK), &[K::Helluntai, K::Helluntaiaika]),
    rule(Slug(TRINITY), &[K::Kolminaisuus, K::Helluntaiaika]),
    rule(SlugSuffix("-sunnuntai-helluntaista"), &[K::Helluntaiaika, K::Yleinen]),
    rule(Slug(MIDSUMMER), &[K::Juhannus, K::Pyhimykset]),
    rule(Slug(APOSTLES_DAY), &[K::Apostolit, K::Helluntaiaika]),
    rule(Slug(TRANSFIGURATION), &[K::Kirkastus, K::Helluntaiaika]),
    rule(Slug(MICHAELMAS), &[K::Mikkeli, K::Enkelit]),
    rule(Slug(REFORMATION_DAY), &[K::Uskonpuhdistus, K::Helluntaiaika]),
    rule(Slug(ALL_SAINTS), &[K::Pyhainpaiva, K::Pyhimykset]),
    rule(Slug(WATCHFULNESS_SUNDAY), &[K::KirkkovuodenLoppu]),
    rule(Slug(JUDGEMENT_SUNDAY), &[K::Tuomiosunnuntai, K::KirkkovuodenLoppu]),
    rule(Slug(INDEPENDENCE_DAY), &[K::Isanmaa, K::Kiitos]),
    // From the reference record
    rule(Period("advent"), &[K::Adventti]),
    rule(Period("joulu"), &[K::Joulunaika]),
    rule(Period("loppiai"), &[K::Loppiaisaika]),
    rule(Period("paasto"), &[K::Paastonaika]),
    rule(Period("paasiais"), &[K::Paasiaisaika]),
    rule(Period("helluntai"), &[K::Helluntaiaika]),
];

/// Season keys of a day, deduplicated, in table order.
pub fn season_keys(slug: &str, day: Option<&HolyDayRecord>) -> Vec<SeasonKey> {
    let mut keys: Vec<SeasonKey> = Vec::new();
    for rule in SEASON_RULES.iter().filter(|r| r.when.holds(slug, day)) {
        for key in rule.keys {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }
    }
    keys
}

/// Season label for a day: the record's own `season` when present,
/// otherwise inferred from the slug.
pub fn season_label(slug: &str, day: Option<&HolyDayRecord>) -> Option<String> {
    if let Some(season) = day.and_then(|d| d.season.as_deref()).filter(|s| !s.is_empty()) {
        return Some(season.to_string());
    }
    infer_season(slug).map(|s| s.label().to_string())
}

/// Festal cycle implied by the slug alone.
pub fn infer_season(slug: &str) -> Option<Season> {
    season_keys(slug, None).into_iter().find_map(SeasonKey::season)
}

/// Lowercase and strip Finnish diacritics so "Pääsiäisaika" matches "paasiais".
pub fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ä' | 'å' => 'a',
            'ö' => 'o',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Lectionary;

    fn record(slug: &str, season: Option<&str>, period: Option<&str>) -> HolyDayRecord {
        HolyDayRecord {
            slug: slug.into(),
            name: slug.into(),
            season: season.map(String::from),
            period: period.map(String::from),
            latin_name: None,
            liturgical_color: None,
            description: None,
            lectionary: Lectionary::Empty,
            psalm: None,
            psalm_verse: Vec::new(),
            hallelujah: None,
            prayers: Vec::new(),
            hymns: Vec::new(),
        }
    }

    #[test]
    fn test_advent_keys() {
        assert_eq!(season_keys("1-adventtisunnuntai", None), vec![SeasonKey::Adventti]);
        assert_eq!(season_keys("3-adventtiviikko", None), vec![SeasonKey::Adventti]);
    }

    #[test]
    fn test_keys_are_deduplicated_in_table_order() {
        let day = record(GOOD_FRIDAY, None, Some("Paastonaika"));
        assert_eq!(
            season_keys(GOOD_FRIDAY, Some(&day)),
            vec![SeasonKey::Pitkaperjantai, SeasonKey::HiljainenViikko, SeasonKey::Paastonaika]
        );

        let palm = record(PALM_SUNDAY, None, Some("Paastonaika"));
        let keys = season_keys(PALM_SUNDAY, Some(&palm));
        assert_eq!(keys.iter().filter(|k| **k == SeasonKey::Paastonaika).count(), 1);
    }

    #[test]
    fn test_period_rules_use_folded_text() {
        let day = record("erikoispaiva", None, Some("Pääsiäisaika"));
        assert_eq!(season_keys("erikoispaiva", Some(&day)), vec![SeasonKey::Paasiaisaika]);
        assert!(season_keys("erikoispaiva", None).is_empty());
    }

    #[test]
    fn test_unknown_slug_has_no_keys() {
        assert!(season_keys("tuntematon", None).is_empty());
        assert_eq!(infer_season("tuntematon"), None);
    }

    #[test]
    fn test_infer_season_from_slug() {
        assert_eq!(infer_season("2-adventtisunnuntai"), Some(Season::Christmas));
        assert_eq!(infer_season(CANDLEMAS), Some(Season::Christmas));
        assert_eq!(infer_season(HOLY_MONDAY), Some(Season::Easter));
        assert_eq!(infer_season("4-sunnuntai-paasiaisesta"), Some(Season::Easter));
        assert_eq!(infer_season("12-sunnuntai-helluntaista"), Some(Season::Pentecost));
        assert_eq!(infer_season(MIDSUMMER), Some(Season::Pentecost));
        assert_eq!(infer_season(INDEPENDENCE_DAY), None);
    }

    #[test]
    fn test_season_label_prefers_reference_data() {
        let day = record(CHRISTMAS_DAY, Some("Joulukausi (joulu)"), None);
        assert_eq!(season_label(CHRISTMAS_DAY, Some(&day)).as_deref(), Some("Joulukausi (joulu)"));

        let blank = record(EASTER_DAY, Some(""), None);
        assert_eq!(season_label(EASTER_DAY, Some(&blank)).as_deref(), Some("Pääsiäiskausi"));
        assert_eq!(season_label("tuntematon", None), None);
    }

    #[test]
    fn test_season_keys_serialize_as_kebab_case() {
        assert_eq!(
            serde_json::to_value(SeasonKey::PaastonaikaaEdeltava).expect("serializes"),
            "paastonaikaa-edeltava"
        );
        assert_eq!(
            serde_json::to_value(SeasonKey::MarianIlmestyspaiva).expect("serializes"),
            SeasonKey::MarianIlmestyspaiva.as_str()
        );
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Pääsiäisaika"), "paasiaisaika");
        assert_eq!(fold("Röntgen ÅÄÖ"), "rontgen aao");
    }
}
