//! Reference datasets: holy-day records and liturgical propers.

pub mod holy_day;
pub mod propers;
mod provider;

pub use holy_day::{
    CycleReadings, HolyDayRecord, Lectionary, Prayer, Reading, SimpleReadings, WeekdayReadings,
};
pub use propers::{KyrieLitany, NumberedText, Preface, PropersRecord, PsalmRefrain};
pub use provider::{DataProvider, ReferenceData};
