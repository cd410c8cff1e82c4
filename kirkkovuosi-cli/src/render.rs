//! Terminal rendering traits for kirkkovuosi types.
//!
//! Extension traits that add colored terminal rendering to
//! kirkkovuosi-core types using owo_colors.

use kirkkovuosi_core::data::{CycleReadings, Lectionary, Reading};
use kirkkovuosi_core::{
    CalendarEntry, DayTexts, EnrichedDay, EntryType, HolyDayRecord, PropersResult, ResolvedDay,
};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EntryType {
    fn render(&self) -> String {
        let label = format!("{:<7}", self.as_str());
        match self {
            EntryType::Feast => label.yellow().to_string(),
            EntryType::Special => label.cyan().to_string(),
            EntryType::Sunday => label.green().to_string(),
            EntryType::Weekday => label.dimmed().to_string(),
            EntryType::Service => label.magenta().to_string(),
        }
    }
}

impl Render for CalendarEntry {
    fn render(&self) -> String {
        format!(
            "{}  {} {}  {}",
            self.date.format("%Y-%m-%d"),
            self.entry_type.render(),
            self.name,
            self.slug.dimmed()
        )
    }
}

impl Render for Reading {
    fn render(&self) -> String {
        let mut out = self.reference.bold().to_string();
        if let Some(note) = &self.cross_reference {
            out.push_str(&format!(" ({})", note.dimmed()));
        }
        if let Some(text) = &self.text {
            out.push_str(&format!("\n      {}", text));
        }
        out
    }
}

/// Colorize a Finnish liturgical color name in its own color.
fn colorize_liturgical(color: &str) -> String {
    match color.to_lowercase().as_str() {
        "violetti" => color.purple().to_string(),
        "punainen" => color.red().to_string(),
        "vihreä" | "vihrea" => color.green().to_string(),
        "musta" => color.bright_black().to_string(),
        "sininen" => color.blue().to_string(),
        _ => color.white().to_string(),
    }
}

fn push_reading(lines: &mut Vec<String>, label: &str, reading: Option<&Reading>) {
    if let Some(reading) = reading {
        lines.push(format!("   {:<15} {}", label.dimmed(), reading.render()));
    }
}

fn render_cycle(readings: &CycleReadings, lines: &mut Vec<String>) {
    push_reading(lines, "1. lukukappale", readings.first_reading.as_ref());
    push_reading(lines, "2. lukukappale", readings.second_reading.as_ref());
    push_reading(lines, "Evankeliumi", readings.gospel.as_ref());
    for alternative in &readings.alternative_sermon_texts {
        push_reading(lines, "Vaihtoehto", Some(alternative));
    }
}

impl Render for DayTexts {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        match self {
            DayTexts::Cycle(readings) => render_cycle(readings, &mut lines),
            DayTexts::Weekday(readings) => {
                for r in &readings.ot_readings {
                    push_reading(&mut lines, "VT", Some(r));
                }
                for r in &readings.nt_readings {
                    push_reading(&mut lines, "UT", Some(r));
                }
                push_reading(&mut lines, "Evankeliumi", readings.gospel.as_ref());
            }
            DayTexts::Simple(readings) => {
                for r in &readings.readings {
                    push_reading(&mut lines, "Lukukappale", Some(r));
                }
                push_reading(&mut lines, "Evankeliumi", readings.gospel.as_ref());
            }
        }
        lines.join("\n")
    }
}

impl Render for PropersResult {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(preface) = &self.preface {
            lines.push(format!("   {:<15} {}", "Prefaatio".dimmed(), preface.title));
        }
        if let Some(litany) = &self.kyrie_litany {
            lines.push(format!("   {:<15} {}", "Kyrie".dimmed(), litany.slug));
        }
        if let Some(refrain) = &self.psalm_refrain {
            lines.push(format!(
                "   {:<15} {} {}",
                "Kertosäe".dimmed(),
                refrain.number,
                refrain.title
            ));
        }
        if self.improperia.is_some() {
            lines.push(format!("   {:<15} {}", "Improperia".dimmed(), "kyllä"));
        }
        lines.join("\n")
    }
}

impl Render for EnrichedDay {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let mut heading = format!("{} {}", self.entry_type.render(), self.name.bold());
        if let Some(color) = &self.liturgical_color {
            heading.push_str(&format!("  {}", colorize_liturgical(color)));
        }
        lines.push(heading);

        if let Some(latin) = &self.latin_name {
            lines.push(format!("   {}", latin.italic()));
        }
        if let Some(texts) = &self.texts {
            let texts = texts.render();
            if !texts.is_empty() {
                lines.push(texts);
            }
        }
        if let Some(psalm) = &self.psalm {
            push_reading(&mut lines, "Psalmi", Some(psalm));
        }
        if !self.hymns.is_empty() {
            lines.push(format!("   {:<15} {}", "Virret".dimmed(), self.hymns.join(", ")));
        }

        let propers = self.propers.render();
        if !propers.is_empty() {
            lines.push(propers);
        }

        lines.join("\n")
    }
}

impl Render for ResolvedDay {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {}  {}",
            self.day_of_week,
            self.date.format("%-d.%-m.%Y").bold(),
            format!(
                "kirkkovuosi {}, vuosikerta {}",
                self.church_year.label, self.church_year.year_cycle
            )
            .dimmed()
        )];
        if let Some(season) = &self.season {
            lines.push(season.dimmed().to_string());
        }
        lines.push(String::new());

        match (&self.holy_day, &self.preceding_sunday) {
            (Some(day), _) => lines.push(day.render()),
            (None, Some(sunday)) => {
                let note = format!(
                    "Ei omaa pyhäpäivää. Edellinen pyhä {}:",
                    sunday.date.format("%-d.%-m.")
                );
                lines.push(note.dimmed().to_string());
                lines.push(sunday.render());
            }
            (None, None) => lines.push("Ei pyhäpäivää".dimmed().to_string()),
        }

        for service in &self.additional_services {
            lines.push(String::new());
            lines.push(service.render());
        }

        lines.join("\n")
    }
}

impl Render for HolyDayRecord {
    fn render(&self) -> String {
        let mut lines = vec![format!("{}  {}", self.name.bold(), self.slug.dimmed())];
        if let Some(latin) = &self.latin_name {
            lines.push(format!("   {}", latin.italic()));
        }
        if let Some(season) = &self.season {
            lines.push(format!("   {:<15} {}", "Kausi".dimmed(), season));
        }
        if let Some(color) = &self.liturgical_color {
            lines.push(format!("   {:<15} {}", "Väri".dimmed(), colorize_liturgical(color)));
        }
        if let Some(description) = &self.description {
            lines.push(format!("   {}", description));
        }
        match &self.lectionary {
            Lectionary::Sunday { cycles } => {
                for (cycle, readings) in cycles {
                    lines.push(format!("   {}", format!("Vuosikerta {}", cycle).underline()));
                    render_cycle(readings, &mut lines);
                }
            }
            Lectionary::Weekday(readings) => {
                lines.push(DayTexts::Weekday(readings.clone()).render())
            }
            Lectionary::Simple(readings) => {
                lines.push(DayTexts::Simple(readings.clone()).render())
            }
            Lectionary::Empty => {}
        }
        for prayer in &self.prayers {
            let label = format!("Rukous {}", prayer.number);
            lines.push(format!("   {:<15} {}", label.dimmed(), prayer.text));
        }
        lines.join("\n")
    }
}
