//! Overflow-checked wall-clock arithmetic.
//!
//! A `TimeOfDay` always lies within [00:00:00, 24:00:00). Arithmetic that
//! would cross midnight in either direction is a range error, never a silent
//! wrap: every derived clock-in/clock-out computation relies on this.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};

use crate::errors::{AppError, AppResult};

const SECS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> AppResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeOfDay)
            .ok_or_else(|| AppError::InvalidTime(format!("{hour}:{minute:02}")))
    }

    fn secs_from_midnight(self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight())
    }

    /// Add a (possibly negative) duration, failing if the result leaves the
    /// current day.
    pub fn add(self, d: Duration) -> AppResult<Self> {
        let total = self.secs_from_midnight() + d.num_seconds();
        if !(0..SECS_PER_DAY).contains(&total) {
            return Err(AppError::TimeOverflow(format!(
                "{} {:+} minutes crosses midnight",
                self,
                d.num_minutes()
            )));
        }
        NaiveTime::from_num_seconds_from_midnight_opt(total as u32, 0)
            .map(TimeOfDay)
            .ok_or_else(|| AppError::TimeOverflow(total.to_string()))
    }

    pub fn sub(self, d: Duration) -> AppResult<Self> {
        self.add(-d)
    }

    /// Duration elapsed since `earlier`. A negative difference is a range
    /// error: a time of day never comes before an earlier one.
    pub fn since(self, earlier: TimeOfDay) -> AppResult<Duration> {
        if earlier > self {
            return Err(AppError::TimeOverflow(format!(
                "{} is after {}",
                earlier, self
            )));
        }
        Ok(Duration::seconds(
            self.secs_from_midnight() - earlier.secs_from_midnight(),
        ))
    }

    /// 12-hour clock rendering, e.g. `09:17:00 AM`.
    pub fn to_12h(self) -> String {
        self.0.format("%I:%M:%S %p").to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        TimeOfDay(t)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}
