use chrono::{Duration, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tsgen::core::sampler;
use tsgen::core::timesheet::{
    DAILY_WORKTIME_MIN, MAX_WORKING_TIME_MIN, MIN_WORKING_TIME_MIN, Timesheet,
};
use tsgen::errors::AppError;
use tsgen::models::{Calendar, TimeOfDay};

fn hm(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).expect("valid time")
}

fn default_timesheet() -> Timesheet {
    Timesheet::new(hm(12, 30), Duration::minutes(60), hm(9, 0), hm(10, 0))
        .expect("valid configuration")
}

// ---------------------------
// TimeOfDay arithmetic
// ---------------------------

#[test]
fn test_time_of_day_add_sub_roundtrip() {
    let t = hm(9, 30);
    let d = Duration::minutes(95);
    assert_eq!(t.add(d).unwrap().sub(d).unwrap(), t);
}

#[test]
fn test_time_of_day_add_past_midnight_fails() {
    let late = hm(23, 0);
    assert!(matches!(
        late.add(Duration::hours(2)),
        Err(AppError::TimeOverflow(_))
    ));
}

#[test]
fn test_time_of_day_sub_before_midnight_fails() {
    let early = hm(1, 0);
    assert!(matches!(
        early.sub(Duration::hours(2)),
        Err(AppError::TimeOverflow(_))
    ));
}

#[test]
fn test_time_of_day_since() {
    let a = hm(9, 0);
    let b = hm(17, 45);
    assert_eq!(b.since(a).unwrap(), Duration::minutes(525));
    assert!(matches!(a.since(b), Err(AppError::TimeOverflow(_))));
}

#[test]
fn test_time_of_day_rejects_invalid_hour() {
    assert!(TimeOfDay::from_hm(25, 0).is_err());
}

// ---------------------------
// Calendar
// ---------------------------

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, 1).expect("valid date")
}

#[test]
fn test_calendar_counts_weekdays() {
    let cal = Calendar::new(monday(), 7, vec![]);
    assert_eq!(cal.worked_days(), 5);
}

#[test]
fn test_calendar_holiday_on_workday_reduces_count() {
    let wednesday = NaiveDate::from_ymd_opt(2020, 6, 3).unwrap();
    let cal = Calendar::new(monday(), 7, vec![wednesday]);
    assert_eq!(cal.worked_days(), 4);
}

#[test]
fn test_calendar_holiday_on_weekend_is_neutral() {
    let saturday = NaiveDate::from_ymd_opt(2020, 6, 6).unwrap();
    let cal = Calendar::new(monday(), 7, vec![saturday]);
    assert_eq!(cal.worked_days(), 5);
    assert!(cal.is_holiday(saturday));
    assert!(Calendar::is_weekend(saturday));
}

#[test]
fn test_calendar_iterates_in_date_order() {
    let cal = Calendar::new(monday(), 3, vec![]);
    let days: Vec<NaiveDate> = cal.iter().collect();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0], monday());
    assert_eq!(days[2], NaiveDate::from_ymd_opt(2020, 6, 3).unwrap());
}

// ---------------------------
// Sampler
// ---------------------------

#[test]
fn test_sample_offset_within_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let offset = sampler::sample_offset(&mut rng, 60).unwrap();
        assert!((0..=60).contains(&offset), "offset {offset} out of range");
    }
}

#[test]
fn test_sample_offset_zero_span_is_constant() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10 {
        assert_eq!(sampler::sample_offset(&mut rng, 0).unwrap(), 0);
    }
}

#[test]
fn test_random_time_stays_between_bounds() {
    let mut rng = StdRng::seed_from_u64(5);
    let min = hm(9, 0);
    let max = hm(10, 0);
    for _ in 0..500 {
        let t = sampler::random_time(&mut rng, min, max).unwrap();
        assert!(t >= min && t <= max, "clock-in {t} outside bounds");
    }
}

#[test]
fn test_random_time_inverted_bounds_fails() {
    let mut rng = StdRng::seed_from_u64(5);
    assert!(sampler::random_time(&mut rng, hm(10, 0), hm(9, 0)).is_err());
}

// ---------------------------
// Balance distributor
// ---------------------------

fn generated_worked_minutes(worked_days: u32, balance_min: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ts = default_timesheet();
    ts.generate(&mut rng, worked_days, Duration::minutes(balance_min))
        .expect("generation succeeds");

    let mut out = Vec::new();
    while let Some(record) = ts.pop() {
        out.push(record.worked().expect("consistent record").num_minutes());
    }
    out
}

#[test]
fn test_distributor_sum_is_exact() {
    // Even/odd day counts, positive/negative/awkward balances
    let cases = [
        (1, 0),
        (2, 0),
        (5, 0),
        (5, 120),
        (5, -90),
        (7, 13),
        (4, -1),
        (10, 263),
    ];
    for (days, balance) in cases {
        let worked = generated_worked_minutes(days, balance, 1234);
        assert_eq!(worked.len(), days as usize);
        let total: i64 = worked.iter().sum();
        assert_eq!(
            total,
            i64::from(days) * DAILY_WORKTIME_MIN + balance,
            "sum mismatch for {days} days, balance {balance}"
        );
    }
}

#[test]
fn test_distributor_first_day_within_working_bounds() {
    // The first day of each pair is drawn inside [min, max]; the remainder
    // hand-out may add at most one minute on top. The complement day is
    // deliberately unbounded.
    let worked = generated_worked_minutes(6, 0, 77);
    for day1 in [worked[0], worked[2], worked[4]] {
        assert!(
            (MIN_WORKING_TIME_MIN..=MAX_WORKING_TIME_MIN + 1).contains(&day1),
            "pair-leading day {day1} outside sampling range"
        );
    }
}

#[test]
fn test_distributor_records_in_generation_order() {
    // The first popped record must correspond to the first sampled working
    // time: probe the same seeded RNG sequence the generator consumes.
    let mut probe = StdRng::seed_from_u64(7);
    let expected_day1 = sampler::random_duration(
        &mut probe,
        Duration::minutes(MIN_WORKING_TIME_MIN),
        Duration::minutes(MAX_WORKING_TIME_MIN),
    )
    .unwrap()
    .num_minutes();

    let worked = generated_worked_minutes(2, 0, 7);
    assert_eq!(worked[0], expected_day1);
    assert_eq!(worked[0] + worked[1], 2 * DAILY_WORKTIME_MIN);
}

#[test]
fn test_distributor_zero_workdays_zero_balance_is_empty() {
    // A range of only weekends/holidays generates no records
    let mut rng = StdRng::seed_from_u64(0);
    let mut ts = default_timesheet();
    ts.generate(&mut rng, 0, Duration::zero()).unwrap();
    assert!(ts.is_empty());
    assert!(ts.pop().is_none());
}

#[test]
fn test_distributor_zero_workdays_with_balance_fails() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut ts = default_timesheet();
    assert!(matches!(
        ts.generate(&mut rng, 0, Duration::minutes(60)),
        Err(AppError::NoWorkdays)
    ));
}

#[test]
fn test_timesheet_drains_once() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut ts = default_timesheet();
    ts.generate(&mut rng, 3, Duration::zero()).unwrap();
    assert_eq!(ts.len(), 3);
    assert!(ts.pop().is_some());
    assert!(ts.pop().is_some());
    assert!(ts.pop().is_some());
    assert!(ts.pop().is_none());
    assert!(ts.is_empty());
}

// ---------------------------
// Day generator
// ---------------------------

#[test]
fn test_day_generator_caps_clockout() {
    // Clock-in bounds late enough that every draw overshoots 22:00
    let mut rng = StdRng::seed_from_u64(21);
    let mut ts = Timesheet::new(hm(12, 30), Duration::minutes(60), hm(13, 0), hm(14, 0))
        .expect("valid configuration");
    ts.generate(&mut rng, 1, Duration::zero()).unwrap();

    let record = ts.pop().expect("one record");
    assert_eq!(record.clock_out, hm(22, 0));
    // The shift preserves the worked duration exactly
    assert_eq!(
        record.worked().unwrap(),
        Duration::minutes(DAILY_WORKTIME_MIN)
    );
}

#[test]
fn test_day_generator_lunch_fields_are_config() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut ts = default_timesheet();
    ts.generate(&mut rng, 1, Duration::zero()).unwrap();

    let record = ts.pop().expect("one record");
    assert_eq!(record.lunch_start, hm(12, 30));
    assert_eq!(record.lunch_duration, Duration::minutes(60));
    assert_eq!(record.lunch_end().unwrap(), hm(13, 30));
}
