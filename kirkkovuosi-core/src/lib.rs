//! Core of the kirkkovuosi church-year calendar.
//!
//! This crate provides:
//! - `computus` for Easter and the other anchor dates of the church year
//! - `church_year` for generating the dated observances of one year
//! - `resolver::DateResolver` for answering "what is this date?" against the
//!   reference data, propers included

pub mod calendar_cache;
pub mod church_year;
pub mod computus;
pub mod data;
pub mod error;
pub mod kirkkovuosi_config;
pub mod propers;
pub mod resolver;
pub mod season;

pub use calendar_cache::CalendarCache;
pub use church_year::{
    CalendarEntry, ChurchYear, ChurchYearCalendar, EntryType, generate_church_year,
};
pub use data::{DataProvider, HolyDayRecord, PropersRecord, ReferenceData};
pub use error::{KirkkovuosiError, KirkkovuosiResult};
pub use kirkkovuosi_config::KirkkovuosiConfig;
pub use propers::{PropersResolver, PropersResult};
pub use resolver::{DateResolver, DayTexts, EnrichedDay, ResolvedDay};
pub use season::{Season, SeasonKey};
