//! Timesheet generation: the day-pair balance distributor and the per-day
//! clock-in/clock-out generator.

use std::collections::VecDeque;

use chrono::Duration;
use rand::Rng;

use crate::core::sampler;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, TimeOfDay};

/// Fixed reference values, in minutes.
pub const DAILY_WORKTIME_MIN: i64 = 8 * 60 + 48;
pub const MIN_WORKING_TIME_MIN: i64 = 6 * 60 + 48;
pub const MAX_WORKING_TIME_MIN: i64 = 10 * 60 + 48;
pub const MAX_CLOCK_OUT_HOUR: u32 = 22;

/// Configuration plus the generated day records, consumed in generation
/// order (first generated, first consumed) while rendering. Populated once
/// by [`generate`](Timesheet::generate), drained by [`pop`](Timesheet::pop);
/// not reusable after draining.
pub struct Timesheet {
    lunch_start: TimeOfDay,
    lunch_duration: Duration,
    earlier_clockin: TimeOfDay,
    later_clockin: TimeOfDay,
    max_clockout: TimeOfDay,
    table: VecDeque<DayRecord>,
}

impl Timesheet {
    pub fn new(
        lunch_start: TimeOfDay,
        lunch_duration: Duration,
        earlier_clockin: TimeOfDay,
        later_clockin: TimeOfDay,
    ) -> AppResult<Self> {
        Ok(Self {
            lunch_start,
            lunch_duration,
            earlier_clockin,
            later_clockin,
            max_clockout: TimeOfDay::from_hm(MAX_CLOCK_OUT_HOUR, 0)?,
            table: VecDeque::new(),
        })
    }

    /// Materialize one workday for the given net working time.
    ///
    /// The clock-in is drawn at random between the configured bounds. If the
    /// derived clock-out would pass the maximum allowed time, the day is
    /// shifted earlier by exactly the excess; the shift may push the
    /// clock-in before the earlier-clock-in bound. That bound is soft, the
    /// worked duration is not.
    fn generate_day<R: Rng>(&self, rng: &mut R, working_time: Duration) -> AppResult<DayRecord> {
        let mut clock_in =
            sampler::random_time(rng, self.earlier_clockin, self.later_clockin)?;
        let mut clock_out = clock_in.add(self.lunch_duration + working_time)?;

        if clock_out > self.max_clockout {
            let excess = clock_out.since(self.max_clockout)?;
            clock_in = clock_in.sub(excess)?;
            clock_out = self.max_clockout;
        }

        Ok(DayRecord {
            clock_in,
            lunch_start: self.lunch_start,
            lunch_duration: self.lunch_duration,
            clock_out,
        })
    }

    /// Distribute `worked_days x 8h48m + balance` across the workdays and
    /// generate one record per day.
    ///
    /// Days are processed in pairs: the first of each pair gets a random
    /// working time within [6h48m, 10h48m], the second gets the complement
    /// that keeps the pair average exact. Minutes that do not divide evenly
    /// are handed out one at a time to the earliest days. An odd final day
    /// gets the plain average.
    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        worked_days: u32,
        balance: Duration,
    ) -> AppResult<()> {
        if worked_days == 0 {
            // A range of only weekends/holidays is fine: nothing to generate.
            // A balance with no workday to absorb it is unsatisfiable.
            if balance != Duration::zero() {
                return Err(AppError::NoWorkdays);
            }
            return Ok(());
        }

        let days = i64::from(worked_days);
        let total = days * DAILY_WORKTIME_MIN + balance.num_minutes();
        // rem_euclid keeps the remainder in [0, days) for negative balances
        let mut remaining = total.rem_euclid(days);
        let average = (total - remaining) / days;

        for _ in 0..days / 2 {
            let day1 = sampler::random_duration(
                rng,
                Duration::minutes(MIN_WORKING_TIME_MIN),
                Duration::minutes(MAX_WORKING_TIME_MIN),
            )?
            .num_minutes();
            // The complement keeps the pair average exact. It is deliberately
            // not re-clamped to the working-time bounds: clamping would break
            // the total-sum invariant for extreme balances.
            let day2 = 2 * average - day1;

            for mut worked in [day1, day2] {
                if remaining > 0 {
                    worked += 1;
                    remaining -= 1;
                }
                let record = self.generate_day(rng, Duration::minutes(worked))?;
                self.table.push_back(record);
            }
        }

        if days % 2 == 1 {
            let mut worked = average;
            // Leftover minutes are exhausted by the pairs before the last
            // day, but the check costs nothing and keeps the sum exact.
            if remaining > 0 {
                worked += 1;
            }
            let record = self.generate_day(rng, Duration::minutes(worked))?;
            self.table.push_back(record);
        }

        Ok(())
    }

    /// Next record in generation order.
    pub fn pop(&mut self) -> Option<DayRecord> {
        self.table.pop_front()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
