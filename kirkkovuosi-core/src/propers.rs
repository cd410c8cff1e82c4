//! Resolution of season-scoped liturgical texts (propers) for a day.

use serde::{Deserialize, Serialize};

use crate::church_year::slugs::GOOD_FRIDAY;
use crate::data::{HolyDayRecord, KyrieLitany, NumberedText, Preface, PropersRecord, PsalmRefrain};
use crate::season::{SeasonKey, fold, season_keys};

/// Season key to Kyrie litany slug. Tried in the day's season-key order.
pub const LITANY_TABLE: &[(SeasonKey, &str)] = &[
    (SeasonKey::Adventti, "adventin-kyrie"),
    (SeasonKey::Joulu, "joulun-kyrie"),
    (SeasonKey::Joulunaika, "joulun-kyrie"),
    (SeasonKey::Loppiainen, "loppiaisen-kyrie"),
    (SeasonKey::Loppiaisaika, "loppiaisen-kyrie"),
    (SeasonKey::PaastonaikaaEdeltava, "paaston-kyrie"),
    (SeasonKey::Tuhkakeskiviikko, "paaston-kyrie"),
    (SeasonKey::Paastonaika, "paaston-kyrie"),
    (SeasonKey::HiljainenViikko, "hiljaisen-viikon-kyrie"),
    (SeasonKey::Pitkaperjantai, "hiljaisen-viikon-kyrie"),
    (SeasonKey::Paasiainen, "paasiaisen-kyrie"),
    (SeasonKey::Paasiaisaika, "paasiaisen-kyrie"),
    (SeasonKey::Helatorstai, "paasiaisen-kyrie"),
    (SeasonKey::Helluntai, "helluntain-kyrie"),
    (SeasonKey::Helluntaiaika, "helluntain-kyrie"),
    (SeasonKey::Kolminaisuus, "helluntain-kyrie"),
    (SeasonKey::KirkkovuodenLoppu, "kirkkovuoden-lopun-kyrie"),
    (SeasonKey::Tuomiosunnuntai, "kirkkovuoden-lopun-kyrie"),
    (SeasonKey::Yleinen, "yleinen-kyrie"),
];

/// Propers attached to an enriched day. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropersResult {
    #[serde(rename = "prefaatio")]
    pub preface: Option<Preface>,
    #[serde(rename = "kyrieLitania")]
    pub kyrie_litany: Option<KyrieLitany>,
    #[serde(rename = "kertosae")]
    pub psalm_refrain: Option<PsalmRefrain>,
    #[serde(rename = "synninpaasto")]
    pub absolution: Option<NumberedText>,
    #[serde(rename = "kiitosrukous")]
    pub thanksgiving_prayer: Option<NumberedText>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub improperia: Option<serde_json::Value>,
}

/// Looks up propers in one loaded `PropersRecord`.
pub struct PropersResolver<'a> {
    record: &'a PropersRecord,
}

impl<'a> PropersResolver<'a> {
    pub fn new(record: &'a PropersRecord) -> Self {
        PropersResolver { record }
    }

    pub fn get_propers(&self, slug: &str, day: Option<&HolyDayRecord>) -> PropersResult {
        let keys = season_keys(slug, day);

        PropersResult {
            preface: self.get_preface(&keys).cloned(),
            kyrie_litany: self.get_kyrie_litany(&keys).cloned(),
            psalm_refrain: self.get_psalm_refrain(slug, day, &keys).cloned(),
            absolution: self.record.absolutions.first().cloned(),
            thanksgiving_prayer: self.record.thanksgiving_prayers.first().cloned(),
            improperia: (slug == GOOD_FRIDAY)
                .then(|| self.record.improperia.clone())
                .flatten(),
        }
    }

    /// First preface ending, in collection order, that applies to any of the keys.
    pub fn get_preface(&self, keys: &[SeasonKey]) -> Option<&'a Preface> {
        self.record
            .prefaces
            .iter()
            .find(|p| p.applies_to.iter().any(|a| keys.iter().any(|k| a.as_str() == k.as_str())))
    }

    /// Litany of the first season key that has one in the table and in the data.
    pub fn get_kyrie_litany(&self, keys: &[SeasonKey]) -> Option<&'a KyrieLitany> {
        keys.iter().find_map(|key| {
            LITANY_TABLE
                .iter()
                .filter(|(k, _)| k == key)
                .find_map(|(_, slug)| self.record.litany(slug))
        })
    }

    /// First refrain whose occasion mentions the day or one of its seasons.
    pub fn get_psalm_refrain(
        &self,
        slug: &str,
        day: Option<&HolyDayRecord>,
        keys: &[SeasonKey],
    ) -> Option<&'a PsalmRefrain> {
        let keywords = refrain_keywords(slug, day, keys);
        if keywords.is_empty() {
            return None;
        }

        self.record.psalm_refrains.iter().find(|r| {
            let occasion = fold(&r.occasion);
            keywords.iter().any(|k| occasion.contains(k.as_str()))
        })
    }
}

/// The day's own phrase first, then one word per season key.
fn refrain_keywords(slug: &str, day: Option<&HolyDayRecord>, keys: &[SeasonKey]) -> Vec<String> {
    let phrase = match day {
        Some(d) if !d.name.is_empty() => fold(&d.name),
        _ => slug.replace('-', " "),
    };

    let mut keywords = vec![phrase];
    for word in keys.iter().filter_map(|k| k.refrain_keyword()) {
        let word = word.to_string();
        if !keywords.contains(&word) {
            keywords.push(word);
        }
    }
    keywords.retain(|k| !k.trim().is_empty());
    keywords
}
