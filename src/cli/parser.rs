use chrono::{Duration, NaiveDate};
use clap::Parser;

use crate::models::TimeOfDay;
use crate::utils::time;

/// Command-line interface definition for tsgen.
/// Generates a timesheet table based on the worked days and the desired balance.
#[derive(Parser)]
#[command(
    name = "tsgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a timesheet table based on the worked days and the desired balance",
    long_about = None
)]
pub struct Cli {
    /// First day on the timesheet table
    #[arg(value_name = "DD/MM/YY", value_parser = parse_date_arg)]
    pub firstday: NaiveDate,

    /// Number of days on the timesheet table including weekends and holidays
    #[arg(value_name = "NUM_DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    pub totaldays: u32,

    /// Desired timesheet balance. Use prefix 'p' for positive balance and
    /// 'n' for negative balance
    #[arg(long, value_name = "(p|n)HH:MM", value_parser = parse_balance_arg)]
    pub balance: Option<Duration>,

    /// List of holidays
    #[arg(
        long = "holiday-list",
        value_name = "DD/MM/YY[,DD/MM/YY[...]]",
        value_delimiter = ',',
        value_parser = parse_date_arg
    )]
    pub holiday_list: Vec<NaiveDate>,

    /// Lunch time
    #[arg(
        long = "lunch-break",
        value_name = "HH:MM",
        default_value = "12:30",
        value_parser = parse_time_arg
    )]
    pub lunch_break: TimeOfDay,

    /// Lunch duration in minutes
    #[arg(long = "lunch-duration", value_name = "N", default_value_t = 60)]
    pub lunch_duration: u32,

    /// Earlier time for clock-in
    #[arg(
        long = "earlier-clockin-time",
        value_name = "HH:MM",
        default_value = "9:00",
        value_parser = parse_time_arg
    )]
    pub earlier_clockin_time: TimeOfDay,

    /// Later time for clock-in
    #[arg(
        long = "later-clockin-time",
        value_name = "HH:MM",
        default_value = "10:00",
        value_parser = parse_time_arg
    )]
    pub later_clockin_time: TimeOfDay,

    /// Fix the random seed for reproducible output (used by tests)
    #[arg(long, hide = true)]
    pub seed: Option<u64>,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    time::parse_date(s).map_err(|e| e.to_string())
}

fn parse_time_arg(s: &str) -> Result<TimeOfDay, String> {
    time::parse_time(s).map_err(|e| e.to_string())
}

fn parse_balance_arg(s: &str) -> Result<Duration, String> {
    time::parse_balance(s).map_err(|e| e.to_string())
}
