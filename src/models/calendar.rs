//! Calendar classification: weekend / holiday / workday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Immutable view over the range [first_day, first_day + days) and the
/// holiday set it was built with.
pub struct Calendar {
    first_day: NaiveDate,
    days: u32,
    holidays: Vec<NaiveDate>,
}

impl Calendar {
    pub fn new(first_day: NaiveDate, days: u32, holidays: Vec<NaiveDate>) -> Self {
        Self {
            first_day,
            days,
            holidays,
        }
    }

    pub fn is_weekend(day: NaiveDate) -> bool {
        matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Exact date membership in the holiday list.
    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        self.holidays.contains(&day)
    }

    /// Count of days in the range that are neither weekend nor holiday.
    pub fn worked_days(&self) -> u32 {
        self.iter()
            .filter(|d| !Self::is_weekend(*d) && !self.is_holiday(*d))
            .count() as u32
    }

    /// The days of the range, in date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let first = self.first_day;
        (0..self.days).map(move |i| first + Duration::days(i64::from(i)))
    }
}
