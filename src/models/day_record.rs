use chrono::Duration;

use crate::errors::AppResult;
use crate::models::time_of_day::TimeOfDay;

/// One generated workday: the four values pasted into the sheet.
#[derive(Debug, Clone, Copy)]
pub struct DayRecord {
    pub clock_in: TimeOfDay,
    pub lunch_start: TimeOfDay,
    pub lunch_duration: Duration,
    pub clock_out: TimeOfDay,
}

impl DayRecord {
    pub fn lunch_end(&self) -> AppResult<TimeOfDay> {
        self.lunch_start.add(self.lunch_duration)
    }

    /// Net worked time: the span between the clocks minus the lunch break.
    pub fn worked(&self) -> AppResult<Duration> {
        Ok(self.clock_out.since(self.clock_in)? - self.lunch_duration)
    }
}
