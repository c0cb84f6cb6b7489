//! Bounded-gaussian sampling for clock-in times and per-day workloads.
//!
//! Draws cluster near the midpoint of the range and occasionally touch the
//! extremes, which reads more plausibly on a timesheet than uniform noise.
//! The RNG is passed in explicitly so a fixed seed reproduces a whole run.

use chrono::Duration;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::errors::{AppError, AppResult};
use crate::models::TimeOfDay;

/// Integer minute offset in [0, span], drawn from
/// Normal(mean = span/2, stddev = span/10) and clamped.
pub fn sample_offset<R: Rng>(rng: &mut R, span: i64) -> AppResult<i64> {
    let mu = span as f64 / 2.0;
    let sigma = span as f64 / 10.0;
    let normal = Normal::new(mu, sigma)
        .map_err(|e| AppError::Sampler(format!("normal({mu}, {sigma}): {e}")))?;
    let draw = normal.sample(rng).round() as i64;
    Ok(draw.clamp(0, span))
}

/// Random time of day in [min, max], minute resolution.
pub fn random_time<R: Rng>(rng: &mut R, min: TimeOfDay, max: TimeOfDay) -> AppResult<TimeOfDay> {
    let span = max.since(min)?.num_minutes();
    let offset = sample_offset(rng, span)?;
    min.add(Duration::minutes(offset))
}

/// Random duration in [min, max], minute resolution.
pub fn random_duration<R: Rng>(
    rng: &mut R,
    min: Duration,
    max: Duration,
) -> AppResult<Duration> {
    let span = (max - min).num_minutes();
    let offset = sample_offset(rng, span)?;
    Ok(min + Duration::minutes(offset))
}
