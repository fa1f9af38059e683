// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian day helpers.
//!
//! Serial day arithmetic is done on the integer **Julian day number** (JDN)
//! of a calendar date: a continuous day count that is independent of month
//! lengths, leap years and time zones. The Gregorian calendar itself comes
//! from `chrono`; this module only maps its day count onto the JDN axis.
//!
//! | Date (proleptic Gregorian) | JDN |
//! |----------------------------|-----|
//! | 0001-01-01 | 1 721 426 |
//! | 1900-01-01 | 2 415 021 |
//! | 1904-01-01 | 2 416 481 |
//! | 1970-01-01 | 2 440 588 |
//! | 2000-01-01 | 2 451 545 |

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use qtty::Days;

/// JDN of the day before 0001-01-01 (chrono's day 0 of the common era).
const CE_DAY_ZERO_JDN: i64 = 1_721_425;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day number of a calendar date.
#[inline]
pub fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_DAY_ZERO_JDN
}

/// Calendar date of a Julian day number.
///
/// Returns `None` if the day falls outside chrono's representable range.
pub fn date_from_day_number(jdn: i64) -> Option<NaiveDate> {
    let days_from_ce = i32::try_from(jdn - CE_DAY_ZERO_JDN).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}

/// Elapsed fraction of the day at a given time of day (`0.5` = noon).
///
/// Whole seconds are divided exactly, so fractions such as `0.625` come out
/// bit-exact.
#[inline]
pub fn day_fraction(time: NaiveTime) -> f64 {
    let seconds = f64::from(time.num_seconds_from_midnight());
    let nanos = f64::from(time.nanosecond());
    (seconds + nanos / 1e9) / SECONDS_PER_DAY
}

/// Continuous Julian date of a zone-naive clock reading.
///
/// Julian days start at noon, so midnight sits on the `.5` boundary.
pub fn julian_day(datetime: NaiveDateTime) -> Days {
    Days::new(day_number(datetime.date()) as f64 - 0.5) + Days::new(day_fraction(datetime.time()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_day_numbers() {
        assert_eq!(day_number(ymd(1, 1, 1)), 1_721_426);
        assert_eq!(day_number(ymd(1900, 1, 1)), 2_415_021);
        assert_eq!(day_number(ymd(1904, 1, 1)), 2_416_481);
        assert_eq!(day_number(ymd(1970, 1, 1)), 2_440_588);
        assert_eq!(day_number(ymd(2000, 1, 1)), 2_451_545);
    }

    #[test]
    fn test_day_number_roundtrip() {
        for date in [ymd(1899, 12, 31), ymd(1900, 3, 1), ymd(2024, 2, 29)] {
            assert_eq!(date_from_day_number(day_number(date)), Some(date));
        }
    }

    #[test]
    fn test_date_from_day_number_out_of_range() {
        assert_eq!(date_from_day_number(i64::MAX), None);
        assert_eq!(date_from_day_number(i64::MIN + CE_DAY_ZERO_JDN), None);
    }

    #[test]
    fn test_day_fraction() {
        assert_eq!(day_fraction(NaiveTime::MIN), 0.0);
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(day_fraction(noon), 0.5);
        let six = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        assert_eq!(day_fraction(six), 0.25);
    }

    #[test]
    fn test_julian_day_unix_epoch_and_j2000() {
        let unix = ymd(1970, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        assert!((julian_day(unix).value() - 2_440_587.5).abs() < 1e-9);

        let j2000 = ymd(2000, 1, 1).and_hms_opt(12, 0, 0).unwrap();
        assert!((julian_day(j2000).value() - 2_451_545.0).abs() < 1e-9);
    }
}
