// Test fixtures - reusable test data
// Provides consistent dates and stores across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Jan 31, 2024: a birth day whose monthly anniversary skips short months
    pub fn end_of_january_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// Mar 1, 2024, the day after a leap day
    pub fn march_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }
}

/// Stores pre-seeded with raw JSON text
pub mod stores {
    use baby_dday::services::storage::MemoryStorage;

    /// A store as a returning user would have left it.
    pub fn returning_user() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        storage.insert_raw("babyName", "\"하늘\"");
        storage.insert_raw("birthDate", "\"2024-01-31\"");
        storage.insert_raw("viewMode", "\"months\"");
        storage.insert_raw("theme", "\"pink\"");
        storage.insert_raw("quoteIndex", "3");
        storage.insert_raw("fontScale", "1.2");
        storage
    }

    /// A store with garbage under several keys.
    pub fn corrupted() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        storage.insert_raw("birthDate", "2024-01-31");
        storage.insert_raw("viewMode", "{");
        storage.insert_raw("quoteIndex", "\"three\"");
        storage.insert_raw("photoUrl", "[1, 2]");
        storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::leap_day_2024().day(), 29);
        assert_eq!(dates::end_of_january_2024().month(), 1);
    }
}
