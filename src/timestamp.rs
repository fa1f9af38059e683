// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar timestamps.
//!
//! [`CalendarTimestamp`] is a zone-naive clock reading (`chrono::NaiveDateTime`)
//! plus an optional, opaque [`TimeZoneRef`]. The zone is carried along but
//! never used to reinterpret the clock fields: serial day numbers have no
//! notion of time zones.

use crate::julian;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use qtty::Days;
use std::fmt;

/// Opaque time-zone designation attached to a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeZoneRef {
    /// A fixed UTC offset.
    Offset(FixedOffset),
    /// A named zone (e.g. `"Europe/Madrid"`); never resolved by this crate.
    Named(String),
}

impl TimeZoneRef {
    /// UTC as a fixed offset.
    #[inline]
    pub fn utc() -> Self {
        Self::Offset(Utc.fix())
    }

    /// Named zone.
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<FixedOffset> for TimeZoneRef {
    #[inline]
    fn from(offset: FixedOffset) -> Self {
        Self::Offset(offset)
    }
}

impl From<&str> for TimeZoneRef {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for TimeZoneRef {
    #[inline]
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for TimeZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => write!(f, "{offset}"),
            Self::Named(name) => write!(f, "[{name}]"),
        }
    }
}

/// A calendar date and time of day, optionally tagged with a zone.
///
/// Without a zone the timestamp is *floating*: a local reading with no
/// anchor on the global time line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarTimestamp {
    datetime: NaiveDateTime,
    zone: Option<TimeZoneRef>,
}

impl CalendarTimestamp {
    // ── constructors ──────────────────────────────────────────────────

    /// Floating timestamp from a zone-naive clock reading.
    #[inline]
    pub const fn new(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            zone: None,
        }
    }

    /// Floating timestamp from calendar components.
    ///
    /// Returns `None` for an invalid date or time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        Self::from_ymd_hms_milli(year, month, day, hour, minute, second, 0)
    }

    /// Floating timestamp from calendar components with milliseconds.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Option<Self> {
        let datetime = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_milli_opt(hour, minute, second, milli)?;
        Some(Self::new(datetime))
    }

    /// Attach a zone, replacing any previous one. Clock fields are unchanged.
    #[inline]
    pub fn with_zone(mut self, zone: impl Into<TimeZoneRef>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Drop the zone, leaving a floating timestamp with the same clock fields.
    #[inline]
    pub fn without_zone(mut self) -> Self {
        self.zone = None;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The zone-naive clock reading.
    #[inline]
    pub const fn naive(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Attached zone, if any.
    #[inline]
    pub fn zone(&self) -> Option<&TimeZoneRef> {
        self.zone.as_ref()
    }

    /// `true` when no zone is attached.
    #[inline]
    pub fn is_floating(&self) -> bool {
        self.zone.is_none()
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    #[inline]
    pub fn nanosecond(&self) -> u32 {
        self.datetime.nanosecond()
    }

    /// Continuous Julian date of the clock reading (zone ignored).
    #[inline]
    pub fn julian_day(&self) -> Days {
        julian::julian_day(self.datetime)
    }

    /// Anchored `DateTime` when the zone is a fixed offset.
    ///
    /// Returns `None` for floating or named-zone timestamps.
    pub fn to_fixed_offset(&self) -> Option<DateTime<FixedOffset>> {
        match &self.zone {
            Some(TimeZoneRef::Offset(offset)) => {
                offset.from_local_datetime(&self.datetime).single()
            }
            _ => None,
        }
    }
}

// ── From conversions ──────────────────────────────────────────────────────

impl From<NaiveDateTime> for CalendarTimestamp {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl From<NaiveDate> for CalendarTimestamp {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<DateTime<FixedOffset>> for CalendarTimestamp {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::new(datetime.naive_local()).with_zone(*datetime.offset())
    }
}

impl From<DateTime<Utc>> for CalendarTimestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.naive_utc()).with_zone(TimeZoneRef::utc())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for CalendarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.datetime.nanosecond() == 0 {
            write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S"))?;
        } else {
            write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S%.3f"))?;
        }
        match &self.zone {
            Some(zone) => write!(f, "{zone}"),
            None => Ok(()),
        }
    }
}
