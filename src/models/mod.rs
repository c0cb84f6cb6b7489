pub mod calendar;
pub mod day_record;
pub mod time_of_day;

pub use calendar::Calendar;
pub use day_record::DayRecord;
pub use time_of_day::TimeOfDay;
