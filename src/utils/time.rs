//! Parsing of the DD/MM/YY, HH:MM and (p|n)HH:MM argument formats.
//!
//! Each value is checked against a strict regex before chrono parsing runs,
//! so a malformed argument is rejected as a usage error and never reaches
//! the generator.

use chrono::{Duration, NaiveDate, NaiveTime};
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::models::TimeOfDay;

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let re = Regex::new(r"^\d{1,2}/\d{1,2}/\d{2}$").unwrap();
    if !re.is_match(s) {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%d/%m/%y").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> AppResult<TimeOfDay> {
    let re = Regex::new(r"^\d{1,2}:\d{2}$").unwrap();
    if !re.is_match(s) {
        return Err(AppError::InvalidTime(s.to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(TimeOfDay::from)
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// `(p|n)HH:MM`: 'p' for a positive balance, 'n' for a negative one.
pub fn parse_balance(s: &str) -> AppResult<Duration> {
    let re = Regex::new(r"^[pn]\d{1,2}:\d{2}$").unwrap();
    if !re.is_match(s) {
        return Err(AppError::InvalidBalance(s.to_string()));
    }
    let sign = if s.starts_with('p') { 1 } else { -1 };
    let (hours, minutes) = s[1..]
        .split_once(':')
        .ok_or_else(|| AppError::InvalidBalance(s.to_string()))?;
    let hours: i64 = hours
        .parse()
        .map_err(|_| AppError::InvalidBalance(s.to_string()))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| AppError::InvalidBalance(s.to_string()))?;
    Ok(Duration::minutes(sign * (hours * 60 + minutes)))
}
