//! Proctoring-point calculation.
//!
//! Points measure the time-and-inconvenience cost of sitting one exam and
//! feed the pool's fairness metric: 2.5 points per hour of exam, with a
//! 1.5× weekend multiplier or a 1.25× weekday-evening multiplier. The
//! weekend check comes first, so a Saturday evening exam gets only the
//! weekend multiplier.
//!
//! All times are naive local time; no timezone conversion is applied.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Base rate: points per hour of exam duration.
const POINTS_PER_HOUR: f64 = 2.5;
/// Multiplier for Saturday/Sunday exams.
const WEEKEND_FACTOR: f64 = 1.5;
/// Multiplier for weekday exams starting at 17:00 or later.
const EVENING_FACTOR: f64 = 1.25;
/// First hour (24h clock) counted as evening.
const EVENING_START_HOUR: u32 = 17;

/// Computes the proctoring points for one exam.
///
/// `duration_hours * 2.5`, times 1.5 on weekends, else times 1.25 for
/// starts at 17:00 or later, rounded to 2 decimal places.
///
/// Never panics: a non-finite or negative duration yields exactly `0.0`.
/// That soft-zero contract keeps a batch run alive across one bad row; the
/// engine separately validates durations so a zeroed exam is also reported.
pub fn compute_points(start: NaiveDateTime, duration_minutes: f64) -> f64 {
    if !duration_minutes.is_finite() || duration_minutes < 0.0 {
        return 0.0;
    }

    let mut points = duration_minutes / 60.0 * POINTS_PER_HOUR;

    if is_weekend(start.weekday()) {
        points *= WEEKEND_FACTOR;
    } else if start.hour() >= EVENING_START_HOUR {
        points *= EVENING_FACTOR;
    }

    round2(points)
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_weekday_daytime() {
        // 2025-04-15 is a Tuesday
        assert_eq!(compute_points(dt("2025-04-15 10:00"), 120.0), 5.0);
    }

    #[test]
    fn test_weekday_evening() {
        assert_eq!(compute_points(dt("2025-04-15 18:00"), 120.0), 6.25);
        // 17:00 sharp already counts as evening
        assert_eq!(compute_points(dt("2025-04-15 17:00"), 120.0), 6.25);
        // 16:59 does not
        assert_eq!(compute_points(dt("2025-04-15 16:59"), 120.0), 5.0);
    }

    #[test]
    fn test_weekend() {
        // 2025-04-19 is a Saturday, 2025-04-20 a Sunday
        assert_eq!(compute_points(dt("2025-04-19 10:00"), 120.0), 7.5);
        assert_eq!(compute_points(dt("2025-04-20 10:00"), 120.0), 7.5);
    }

    #[test]
    fn test_weekend_beats_evening() {
        // Saturday evening: weekend factor only, evening branch never runs
        assert_eq!(compute_points(dt("2025-04-19 18:00"), 120.0), 7.5);
    }

    #[test]
    fn test_rounding() {
        // 100 min weekday evening: 100/60 * 2.5 * 1.25 = 5.2083... → 5.21
        assert_eq!(compute_points(dt("2025-04-15 18:00"), 100.0), 5.21);
    }

    #[test]
    fn test_invalid_duration_soft_zero() {
        // The soft-failure contract: invalid input yields exactly 0.0,
        // never a panic.
        assert_eq!(compute_points(dt("2025-04-15 10:00"), -30.0), 0.0);
        assert_eq!(compute_points(dt("2025-04-15 10:00"), f64::NAN), 0.0);
        assert_eq!(compute_points(dt("2025-04-15 10:00"), f64::INFINITY), 0.0);
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(compute_points(dt("2025-04-15 10:00"), 0.0), 0.0);
    }
}
