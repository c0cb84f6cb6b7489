//! Unified application error type.
//! All modules (cli, core, models, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Argument parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid balance format: {0}")]
    InvalidBalance(String),

    // ---------------------------
    // Clock arithmetic
    // ---------------------------
    #[error("Time of day out of range: {0}")]
    TimeOverflow(String),

    // ---------------------------
    // Generation
    // ---------------------------
    #[error("No workdays in the range to absorb the requested balance")]
    NoWorkdays,

    #[error("Sampler error: {0}")]
    Sampler(String),

    // ---------------------------
    // Internal consistency
    // ---------------------------
    #[error("Day/record mismatch: {0}")]
    RecordMismatch(String),
}

pub type AppResult<T> = Result<T, AppError>;
