//! Memoized church-year calendars.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::church_year::{CalendarEntry, generate_church_year};

/// Generated calendars keyed by start year.
///
/// A year is generated on first request and kept for the lifetime of the
/// cache. Generation is pure, so populating the same year twice yields the
/// same entries.
#[derive(Debug, Default)]
pub struct CalendarCache {
    years: Mutex<HashMap<i32, Arc<Vec<CalendarEntry>>>>,
}

impl CalendarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, start_year: i32) -> Arc<Vec<CalendarEntry>> {
        // Generation cannot panic halfway through an insert, so a poisoned
        // lock still guards a consistent map.
        let mut years = self.years.lock().unwrap_or_else(PoisonError::into_inner);

        years
            .entry(start_year)
            .or_insert_with(|| {
                let entries = generate_church_year(start_year);
                debug!("Generated church year {} ({} entries)", start_year, entries.len());
                Arc::new(entries)
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.years.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populates_on_miss_and_reuses() {
        let cache = CalendarCache::new();
        assert!(cache.is_empty());

        let first = cache.get(2025);
        let second = cache.get(2025);
        assert!(Arc::ptr_eq(&first, &second), "Second lookup should hit the cache");
        assert_eq!(cache.len(), 1);

        cache.get(2026);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cached_year_matches_fresh_generation() {
        let cache = CalendarCache::new();
        assert_eq!(*cache.get(2030), generate_church_year(2030));
    }
}
