//! Propers reference record: preface endings, Kyrie litanies, psalm
//! refrains, absolutions and thanksgiving prayers.
//!
//! Collection order is meaningful. Lookups take the first matching item, so
//! earlier items win over later ones.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A preface ending (prefaatio) and the season keys it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preface {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub applies_to: Vec<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KyrieLitany {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub texts: Vec<String>,
}

/// A psalm refrain (kertosäe). `occasion` is free text naming the days it
/// is sung on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsalmRefrain {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedText {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropersRecord {
    #[serde(rename = "prefaatiot", default)]
    pub prefaces: Vec<Preface>,
    #[serde(rename = "kyrieLitaniat", default)]
    pub kyrie_litanies: Vec<KyrieLitany>,
    #[serde(rename = "kertosaakeet", default)]
    pub psalm_refrains: Vec<PsalmRefrain>,
    #[serde(rename = "synninpaastot", default)]
    pub absolutions: Vec<NumberedText>,
    #[serde(rename = "kiitosrukoukset", default)]
    pub thanksgiving_prayers: Vec<NumberedText>,
    /// Good Friday reproaches, passed through as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improperia: Option<serde_json::Value>,
}

impl PropersRecord {
    pub fn litany(&self, slug: &str) -> Option<&KyrieLitany> {
        self.kyrie_litanies.iter().find(|l| l.slug == slug)
    }

    /// Drop items no lookup could ever return. Each dropped item is logged.
    pub(crate) fn discard_unusable(&mut self) {
        retain_usable(&mut self.prefaces, "prefaatiot", |p| !p.text.trim().is_empty());
        retain_usable(&mut self.kyrie_litanies, "kyrieLitaniat", |l| {
            !l.slug.trim().is_empty()
        });
        retain_usable(&mut self.psalm_refrains, "kertosaakeet", |r| {
            !r.occasion.trim().is_empty()
        });
        retain_usable(&mut self.absolutions, "synninpaastot", |a| !a.text.trim().is_empty());
        retain_usable(&mut self.thanksgiving_prayers, "kiitosrukoukset", |t| {
            !t.text.trim().is_empty()
        });
    }
}

fn retain_usable<T>(items: &mut Vec<T>, collection: &str, usable: impl Fn(&T) -> bool) {
    let mut position = 0;
    items.retain(|item| {
        position += 1;
        let keep = usable(item);
        if !keep {
            warn!("Skipping item #{} of '{}': required text is missing", position, collection);
        }
        keep
    });
}
