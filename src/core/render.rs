//! Text rendering of the generated table.

use std::io::Write;

use crate::core::timesheet::Timesheet;
use crate::errors::{AppError, AppResult};
use crate::models::{Calendar, DayRecord};

/// Instruction footer printed after the table.
pub const FOOTER: &str = "Paste this output on the spreadsheet. The rows marked with\n\
'x' reference to holidays. You must mark the actual holiday\n\
column manually.";

fn write_worked_day(out: &mut impl Write, record: &DayRecord) -> AppResult<()> {
    let back_from_lunch = record.lunch_end()?;
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        record.clock_in.to_12h(),
        record.lunch_start.to_12h(),
        back_from_lunch.to_12h(),
        record.clock_out.to_12h(),
    )?;
    Ok(())
}

/// Walk the calendar in date order, consuming one record per workday.
/// Holidays get an `x` marker row, weekend days an empty row. A workday
/// without a record, or records left over at the end, means the calendar
/// and the generator disagree on the workday count.
pub fn render(
    out: &mut impl Write,
    calendar: &Calendar,
    timesheet: &mut Timesheet,
) -> AppResult<()> {
    for day in calendar.iter() {
        if calendar.is_holiday(day) {
            writeln!(out, "x\t\t\t")?;
        } else if Calendar::is_weekend(day) {
            writeln!(out, "\t\t\t")?;
        } else {
            let record = timesheet.pop().ok_or_else(|| {
                AppError::RecordMismatch(format!("no record left for workday {day}"))
            })?;
            write_worked_day(out, &record)?;
        }
    }

    if !timesheet.is_empty() {
        return Err(AppError::RecordMismatch(format!(
            "{} unconsumed records after rendering",
            timesheet.len()
        )));
    }

    Ok(())
}
