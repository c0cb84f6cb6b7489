//! tsgen library root.
//! Exposes the CLI parser, the high-level run() function, and the internal modules.

pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod utils;

use std::io::Write;

use chrono::Duration;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::parser::Cli;
use crate::core::render;
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::models::Calendar;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    generate(&cli, &mut std::io::stdout().lock())
}

/// Build the calendar and timesheet from parsed arguments and write the
/// table plus the instruction footer to `out`. Nothing is written unless
/// the whole generation succeeds.
pub fn generate(cli: &Cli, out: &mut impl Write) -> AppResult<()> {
    let calendar = Calendar::new(cli.firstday, cli.totaldays, cli.holiday_list.clone());

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut timesheet = Timesheet::new(
        cli.lunch_break,
        Duration::minutes(i64::from(cli.lunch_duration)),
        cli.earlier_clockin_time,
        cli.later_clockin_time,
    )?;

    let balance = cli.balance.unwrap_or_else(Duration::zero);
    timesheet.generate(&mut rng, calendar.worked_days(), balance)?;

    let mut table = Vec::new();
    render::render(&mut table, &calendar, &mut timesheet)?;
    out.write_all(&table)?;

    writeln!(out)?;
    writeln!(out, "{}", render::FOOTER)?;
    Ok(())
}
