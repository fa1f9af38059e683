// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Serial day ↔ calendar conversion.
//!
//! [`EpochConverter`] holds a single [`SystemType`] and converts in both
//! directions:
//!
//! ```text
//! serial ──to_calendar──▶ CalendarTimestamp
//! CalendarTimestamp ──to_number──▶ serial | timestamp (before the epoch)
//! ```
//!
//! Both directions work on the Julian day number axis, so calendar
//! irregularities are handled by `chrono` and the only special cases left
//! are the spreadsheet quirks themselves:
//!
//! - serial `0` is not a calendar date and is replaced by the first day past
//!   the origin, with a [`BadDateWarning::ZeroDate`];
//! - Windows serial `[60, 61)` is the fictitious 1900-02-29 and is replaced
//!   by 1900-03-01, with a [`BadDateWarning::FictitiousLeapDay`];
//! - Windows serials above 60 are one day ahead of the real calendar.

use crate::error::{BadDateWarning, Diagnosed, EpochError, Result};
use crate::julian;
use crate::system::{SystemType, FICTITIOUS_LEAP_DAY, MARCH_FIRST_1900_JDN};
use crate::timestamp::{CalendarTimestamp, TimeZoneRef};
use chrono::{NaiveDateTime, NaiveTime};
use log::{trace, warn};
use std::fmt;

/// Resolution of the time-of-day component.
const MILLIS_PER_DAY: i64 = 86_400_000;

// ═══════════════════════════════════════════════════════════════════════════
// Inputs and outputs
// ═══════════════════════════════════════════════════════════════════════════

/// A value offered to [`EpochConverter::to_calendar`].
///
/// Only numbers are convertible. Text is accepted at the type level so that
/// loosely typed cell values can be passed through, but it is always
/// rejected with [`EpochError::InvalidInput`]: date strings are never parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum SerialInput {
    /// A numeric serial day value.
    Number(f64),
    /// Any textual value; always rejected.
    Text(String),
}

impl SerialInput {
    /// The finite numeric value, or [`EpochError::InvalidInput`].
    pub fn into_serial(self) -> Result<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(value),
            Self::Number(value) => Err(EpochError::InvalidInput(value.to_string())),
            Self::Text(text) => Err(EpochError::InvalidInput(format!("{text:?}"))),
        }
    }
}

impl From<f64> for SerialInput {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for SerialInput {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for SerialInput {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for SerialInput {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for SerialInput {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for SerialInput {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SerialInput {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Result of [`EpochConverter::to_number`].
#[derive(Debug, Clone, PartialEq)]
pub enum SerialOutcome {
    /// Serial day number of the timestamp.
    Serial(f64),
    /// The timestamp precedes the first day of the epoch and is returned
    /// unchanged.
    BeforeEpoch(CalendarTimestamp),
}

impl SerialOutcome {
    /// The serial number, if one was produced.
    #[inline]
    pub fn as_serial(&self) -> Option<f64> {
        match self {
            Self::Serial(value) => Some(*value),
            Self::BeforeEpoch(_) => None,
        }
    }

    #[inline]
    pub fn is_before_epoch(&self) -> bool {
        matches!(self, Self::BeforeEpoch(_))
    }
}

/// Renders the serial, or the timestamp's own text for the fallback case.
impl fmt::Display for SerialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(value) => write!(f, "{value}"),
            Self::BeforeEpoch(timestamp) => write!(f, "{timestamp}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EpochConverter
// ═══════════════════════════════════════════════════════════════════════════

/// Converts between spreadsheet serial day numbers and calendar timestamps.
///
/// # Examples
///
/// ```
/// use sheetepoch::{CalendarTimestamp, EpochConverter, SystemType};
///
/// let converter = EpochConverter::new(SystemType::Windows);
/// let ts = converter.to_calendar(40123.625, None).unwrap();
/// assert_eq!(ts.to_string(), "2009-11-06T15:00:00");
///
/// let birthday = CalendarTimestamp::from_ymd_hms(1979, 7, 16, 0, 0, 0).unwrap();
/// assert_eq!(converter.to_number(birthday).as_serial(), Some(29052.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpochConverter {
    system_type: SystemType,
}

impl EpochConverter {
    /// Create a converter for the given date system.
    #[inline]
    pub const fn new(system_type: SystemType) -> Self {
        Self { system_type }
    }

    /// The active date system.
    #[inline]
    pub const fn system_type(&self) -> SystemType {
        self.system_type
    }

    /// Switch the date system. Timestamps produced earlier are unaffected.
    #[inline]
    pub fn set_system_type(&mut self, system_type: SystemType) {
        self.system_type = system_type;
    }

    /// Convert a serial day number to a calendar timestamp.
    ///
    /// The zone, if given, is attached to the result without shifting its
    /// clock fields; otherwise the result is floating. Substitutions are
    /// logged at `warn` level; use [`Self::to_calendar_diagnosed`] to receive
    /// them as values.
    ///
    /// # Errors
    ///
    /// - [`EpochError::InvalidInput`] for text or non-finite numbers.
    /// - [`EpochError::OutOfRange`] for negative serials or serials beyond
    ///   the calendar range.
    pub fn to_calendar(
        &self,
        value: impl Into<SerialInput>,
        zone: Option<TimeZoneRef>,
    ) -> Result<CalendarTimestamp> {
        self.to_calendar_diagnosed(value, zone)
            .map(Diagnosed::into_value)
    }

    /// Like [`Self::to_calendar`], also returning the substitution warning.
    pub fn to_calendar_diagnosed(
        &self,
        value: impl Into<SerialInput>,
        zone: Option<TimeZoneRef>,
    ) -> Result<Diagnosed<CalendarTimestamp>> {
        let system = self.system_type;
        let input: SerialInput = value.into();
        let serial = input.into_serial()?;
        let resolved = resolve_serial(system, serial)?;

        if let Some(warning) = resolved.warning {
            warn!(
                "{warning}; {system} serial {serial} resolved to {}",
                resolved.value
            );
        }

        Ok(resolved.map(|datetime| {
            let timestamp = CalendarTimestamp::new(datetime);
            match zone {
                Some(zone) => timestamp.with_zone(zone),
                None => timestamp,
            }
        }))
    }

    /// Convert a calendar timestamp to a serial day number.
    ///
    /// The zone is ignored; only the clock reading counts. Timestamps before
    /// the first day of the epoch (1900-01-01 or 1904-01-01) are handed back
    /// as [`SerialOutcome::BeforeEpoch`].
    pub fn to_number(&self, timestamp: impl Into<CalendarTimestamp>) -> SerialOutcome {
        let system = self.system_type;
        let timestamp: CalendarTimestamp = timestamp.into();
        let datetime = timestamp.naive();
        let day_number = julian::day_number(datetime.date());

        if day_number < system.first_day() {
            trace!("{timestamp} precedes the {system} epoch; returned unchanged");
            return SerialOutcome::BeforeEpoch(timestamp);
        }

        let mut days = day_number - system.day_zero();
        if system.has_fictitious_leap_day() && days >= FICTITIOUS_LEAP_DAY {
            days += 1;
        }
        SerialOutcome::Serial(days as f64 + julian::day_fraction(datetime.time()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serial resolution
// ═══════════════════════════════════════════════════════════════════════════

fn out_of_range(value: f64, reason: &'static str) -> EpochError {
    EpochError::OutOfRange { value, reason }
}

/// Map a finite serial onto a clock reading for `system`.
fn resolve_serial(system: SystemType, serial: f64) -> Result<Diagnosed<NaiveDateTime>> {
    if serial < 0.0 {
        return Err(out_of_range(serial, "negative serial day"));
    }

    if serial == 0.0 {
        let date = julian::date_from_day_number(system.zero_substitute())
            .ok_or_else(|| out_of_range(serial, "beyond the calendar range"))?;
        return Ok(Diagnosed::warned(
            date.and_time(NaiveTime::MIN),
            BadDateWarning::ZeroDate,
        ));
    }

    // Rounding the whole serial (not only its fraction) lets a time that
    // rounds up to midnight roll over into the next serial day.
    let total_millis = (serial * MILLIS_PER_DAY as f64).round();
    if total_millis >= i64::MAX as f64 {
        return Err(out_of_range(serial, "beyond the calendar range"));
    }
    let total_millis = total_millis as i64;
    let days = total_millis / MILLIS_PER_DAY;
    let millis = total_millis % MILLIS_PER_DAY;

    let time = NaiveTime::from_num_seconds_from_midnight_opt(
        (millis / 1_000) as u32,
        ((millis % 1_000) * 1_000_000) as u32,
    )
    .ok_or_else(|| out_of_range(serial, "invalid time of day"))?;

    // Bands are decided on the unrounded input; the rounded day only places
    // the result on the calendar.
    let raw_day = serial.floor() as i64;
    let leap_bug = system.has_fictitious_leap_day();
    let day_number = if raw_day == 0 {
        system.first_day() + days
    } else if leap_bug && days == FICTITIOUS_LEAP_DAY {
        MARCH_FIRST_1900_JDN
    } else if leap_bug && days > FICTITIOUS_LEAP_DAY {
        system.day_zero() + days - 1
    } else {
        system.day_zero() + days
    };
    let warning =
        (leap_bug && raw_day == FICTITIOUS_LEAP_DAY).then_some(BadDateWarning::FictitiousLeapDay);

    let date = julian::date_from_day_number(day_number)
        .ok_or_else(|| out_of_range(serial, "beyond the calendar range"))?;
    let datetime = date.and_time(time);

    Ok(match warning {
        Some(warning) => Diagnosed::warned(datetime, warning),
        None => Diagnosed::clean(datetime),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
