//! Easter computus and the date arithmetic the church year is built from.
//!
//! All dates are `NaiveDate`: the calendar is date-only and never touches a
//! timezone, so a date resolves the same way wherever the process runs.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{KirkkovuosiError, KirkkovuosiResult};

/// Earliest year accepted at the input boundary.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted at the input boundary.
pub const MAX_YEAR: i32 = 2100;

/// Build a date from components that are known to be valid.
///
/// Only called with fixed month/day pairs that exist in every year
/// (never Feb 29), so construction cannot fail.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed month/day exists in every year")
}

/// Easter Sunday for a Gregorian year (Meeus/Jones/Butcher algorithm).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    ymd(year, month as u32, day as u32)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Days since the previous Sunday (Sunday = 0, Saturday = 6).
fn days_from_sunday(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_sunday())
}

/// The Sunday closest to `date`.
///
/// Monday to Wednesday go back to the previous Sunday, Thursday to Saturday
/// go forward to the next one.
pub fn nearest_sunday(date: NaiveDate) -> NaiveDate {
    match days_from_sunday(date) {
        0 => date,
        w if w <= 3 => add_days(date, -w),
        w => add_days(date, 7 - w),
    }
}

pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    weekday_on_or_before(date, Weekday::Sun)
}

pub fn sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    weekday_on_or_after(date, Weekday::Sun)
}

pub fn saturday_on_or_before(date: NaiveDate) -> NaiveDate {
    weekday_on_or_before(date, Weekday::Sat)
}

/// Latest `weekday` falling on or before `date`.
pub fn weekday_on_or_before(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = i64::from(weekday.num_days_from_sunday());
    let back = (days_from_sunday(date) - target).rem_euclid(7);
    add_days(date, -back)
}

/// Earliest `weekday` falling on or after `date`.
pub fn weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = i64::from(weekday.num_days_from_sunday());
    let forward = (target - days_from_sunday(date)).rem_euclid(7);
    add_days(date, forward)
}

/// First Sunday of Advent in `year`: the Sunday nearest to November 30.
pub fn first_advent_sunday(year: i32) -> NaiveDate {
    nearest_sunday(ymd(year, 11, 30))
}

/// Reading cycle (1, 2 or 3) of the church year starting in `start_year`.
pub fn year_cycle(start_year: i32) -> u8 {
    // rem_euclid keeps the cycle in range for years before year 0 too
    (start_year.rem_euclid(3) + 1) as u8
}

/// Calendar year in which the church year containing `date` began.
pub fn church_year_start(date: NaiveDate) -> i32 {
    let year = date.year();
    if date >= first_advent_sunday(year) {
        year
    } else {
        year - 1
    }
}

/// Human readable label such as "2025–2026".
pub fn church_year_label(start_year: i32) -> String {
    format!("{}–{}", start_year, start_year + 1)
}

/// Finnish name of the weekday, lowercase.
pub fn weekday_name_fi(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "maanantai",
        Weekday::Tue => "tiistai",
        Weekday::Wed => "keskiviikko",
        Weekday::Thu => "torstai",
        Weekday::Fri => "perjantai",
        Weekday::Sat => "lauantai",
        Weekday::Sun => "sunnuntai",
    }
}

/// Parse a `YYYY-MM-DD` string and check that its year is supported.
pub fn parse_date(s: &str) -> KirkkovuosiResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| KirkkovuosiError::InvalidDate(s.to_string()))?;
    validate_year(date.year())?;
    Ok(date)
}

pub fn validate_year(year: i32) -> KirkkovuosiResult<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(KirkkovuosiError::YearOutOfRange(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easter_reference_table() {
        let table = [
            (1900, 4, 15),
            (1961, 4, 2),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2016, 3, 27),
            (2019, 4, 21),
            (2020, 4, 12),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2027, 3, 28),
            (2038, 4, 25),
            (2100, 3, 28),
        ];

        for (year, month, day) in table {
            assert_eq!(
                easter_sunday(year),
                ymd(year, month, day),
                "Easter {} should be {}-{}",
                year,
                month,
                day
            );
        }
    }

    #[test]
    fn test_easter_is_always_a_sunday_in_range() {
        for year in MIN_YEAR..=MAX_YEAR {
            let easter = easter_sunday(year);
            assert_eq!(easter.weekday(), Weekday::Sun);
            assert!(easter >= ymd(year, 3, 22) && easter <= ymd(year, 4, 25));
        }
    }

    #[test]
    fn test_nearest_sunday_ties() {
        // 2026-11-30 is a Monday -> back to Nov 29
        assert_eq!(nearest_sunday(ymd(2026, 11, 30)), ymd(2026, 11, 29));
        // 2027-11-30 is a Tuesday -> back to Nov 28
        assert_eq!(nearest_sunday(ymd(2027, 11, 30)), ymd(2027, 11, 28));
        // 2024-11-30 is a Saturday -> forward to Dec 1
        assert_eq!(nearest_sunday(ymd(2024, 11, 30)), ymd(2024, 12, 1));
        // 2028-11-30 is a Thursday -> forward to Dec 3
        assert_eq!(nearest_sunday(ymd(2028, 11, 30)), ymd(2028, 12, 3));
        // Wednesday goes back
        assert_eq!(nearest_sunday(ymd(2022, 11, 30)), ymd(2022, 11, 27));
        assert_eq!(nearest_sunday(ymd(2025, 11, 30)), ymd(2025, 11, 30));
    }

    #[test]
    fn test_weekday_on_or_before_and_after() {
        let tuesday = ymd(2026, 2, 3);
        assert_eq!(sunday_on_or_before(tuesday), ymd(2026, 2, 1));
        assert_eq!(sunday_on_or_after(tuesday), ymd(2026, 2, 8));
        assert_eq!(saturday_on_or_before(tuesday), ymd(2026, 1, 31));
        assert_eq!(weekday_on_or_after(tuesday, Weekday::Tue), tuesday);
        assert_eq!(weekday_on_or_before(tuesday, Weekday::Wed), ymd(2026, 1, 28));
    }

    #[test]
    fn test_year_cycle_is_periodic() {
        for year in 1990..2030 {
            assert_eq!(year_cycle(year), year_cycle(year + 3));
            let mut cycles = vec![year_cycle(year), year_cycle(year + 1), year_cycle(year + 2)];
            cycles.sort();
            assert_eq!(cycles, vec![1, 2, 3]);
        }
        assert_eq!(year_cycle(2025), 1);
    }

    #[test]
    fn test_church_year_start_boundary() {
        for year in 1950..2090 {
            let advent = first_advent_sunday(year);
            assert_eq!(church_year_start(advent), year);
            assert_eq!(church_year_start(add_days(advent, -1)), year - 1);
        }
    }

    #[test]
    fn test_parse_date_boundary() {
        assert_eq!(parse_date("2026-02-03").expect("valid"), ymd(2026, 2, 3));
        assert!(matches!(parse_date("2026-2-30"), Err(KirkkovuosiError::InvalidDate(_))));
        assert!(matches!(parse_date("tomorrow"), Err(KirkkovuosiError::InvalidDate(_))));
        assert!(matches!(parse_date("2101-01-01"), Err(KirkkovuosiError::YearOutOfRange(2101))));
    }

    #[test]
    fn test_weekday_name_fi() {
        assert_eq!(weekday_name_fi(ymd(2026, 2, 3)), "tiistai");
        assert_eq!(weekday_name_fi(ymd(2025, 11, 30)), "sunnuntai");
    }
}
