// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Spreadsheet date systems.
//!
//! A [`SystemType`] fixes where serial day 0 sits on the Julian day axis and
//! whether the Lotus 1-2-3 leap-year bug is reproduced.
//!
//! | System | Serial 0 | First real day | Fictitious 1900-02-29 |
//! |--------|----------|----------------|-----------------------|
//! | [`SystemType::Windows`] | "1900-01-00" (JDN 2 415 020) | 1900-01-01 = serial 1 | serial 60 |
//! | [`SystemType::Apple`]   | 1904-01-01 (JDN 2 416 481)   | 1904-01-01 = serial 0 | — |

use crate::error::EpochError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// JDN of the Windows reference day "1900-01-00" (i.e. 1899-12-31).
const WINDOWS_DAY_ZERO_JDN: i64 = 2_415_020;

/// JDN of 1904-01-01, the Apple serial day 0.
const APPLE_DAY_ZERO_JDN: i64 = 2_416_481;

/// Windows serial of the non-existent 1900-02-29.
pub(crate) const FICTITIOUS_LEAP_DAY: i64 = 60;

/// JDN of 1900-03-01, the date substituted for the fictitious leap day.
pub(crate) const MARCH_FIRST_1900_JDN: i64 = WINDOWS_DAY_ZERO_JDN + FICTITIOUS_LEAP_DAY;

/// Which spreadsheet epoch a serial day number is counted from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SystemType {
    /// 1900 date system, including the fictitious 1900-02-29.
    #[default]
    Windows,
    /// 1904 date system used by classic Mac spreadsheets.
    Apple,
}

impl SystemType {
    /// Select the system from a workbook's `date1904` flag.
    #[inline]
    pub const fn from_date1904(date1904: bool) -> Self {
        if date1904 {
            Self::Apple
        } else {
            Self::Windows
        }
    }

    /// Whether serial 60 is the fictitious 1900-02-29.
    #[inline]
    pub const fn has_fictitious_leap_day(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Julian day number of serial day 0.
    ///
    /// For [`SystemType::Windows`] this is a reference point only; the
    /// calendar has no "1900-01-00".
    #[inline]
    pub const fn day_zero(self) -> i64 {
        match self {
            Self::Windows => WINDOWS_DAY_ZERO_JDN,
            Self::Apple => APPLE_DAY_ZERO_JDN,
        }
    }

    /// Julian day number of the earliest real calendar day the system
    /// can express (1900-01-01 or 1904-01-01).
    ///
    /// Fractional serials in `(0, 1)` are placed on this day.
    #[inline]
    pub const fn first_day(self) -> i64 {
        match self {
            Self::Windows => WINDOWS_DAY_ZERO_JDN + 1,
            Self::Apple => APPLE_DAY_ZERO_JDN,
        }
    }

    /// Julian day number substituted when serial `0` is requested: the first
    /// day past the origin.
    #[inline]
    pub const fn zero_substitute(self) -> i64 {
        self.day_zero() + 1
    }

    /// Human-readable epoch year.
    #[inline]
    pub const fn epoch_year(self) -> i32 {
        match self {
            Self::Windows => 1900,
            Self::Apple => 1904,
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("Windows"),
            Self::Apple => f.write_str("Apple"),
        }
    }
}

impl FromStr for SystemType {
    type Err = EpochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" | "1900" => Ok(Self::Windows),
            "apple" | "mac" | "1904" => Ok(Self::Apple),
            _ => Err(EpochError::UnknownSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::date_from_day_number;
    use chrono::NaiveDate;

    fn date(jdn: i64) -> NaiveDate {
        date_from_day_number(jdn).unwrap()
    }

    #[test]
    fn test_default_is_windows() {
        assert_eq!(SystemType::default(), SystemType::Windows);
    }

    #[test]
    fn test_reference_days() {
        assert_eq!(
            date(SystemType::Windows.day_zero()),
            NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()
        );
        assert_eq!(
            date(SystemType::Windows.first_day()),
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
        );
        assert_eq!(
            date(SystemType::Apple.day_zero()),
            NaiveDate::from_ymd_opt(1904, 1, 1).unwrap()
        );
        assert_eq!(SystemType::Apple.first_day(), SystemType::Apple.day_zero());
        assert_eq!(
            date(MARCH_FIRST_1900_JDN),
            NaiveDate::from_ymd_opt(1900, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_zero_substitutes() {
        assert_eq!(
            date(SystemType::Windows.zero_substitute()),
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
        );
        assert_eq!(
            date(SystemType::Apple.zero_substitute()),
            NaiveDate::from_ymd_opt(1904, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_from_date1904_flag() {
        assert_eq!(SystemType::from_date1904(false), SystemType::Windows);
        assert_eq!(SystemType::from_date1904(true), SystemType::Apple);
        assert!(SystemType::Windows.has_fictitious_leap_day());
        assert!(!SystemType::Apple.has_fictitious_leap_day());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Windows".parse::<SystemType>(), Ok(SystemType::Windows));
        assert_eq!(" 1900 ".parse::<SystemType>(), Ok(SystemType::Windows));
        assert_eq!("MAC".parse::<SystemType>(), Ok(SystemType::Apple));
        assert_eq!("1904".parse::<SystemType>(), Ok(SystemType::Apple));
        assert_eq!(
            "lotus".parse::<SystemType>(),
            Err(EpochError::UnknownSystem("lotus".to_string()))
        );
        assert_eq!(SystemType::Apple.to_string(), "Apple");
        assert_eq!(SystemType::Windows.epoch_year(), 1900);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SystemType::Apple).unwrap();
        assert_eq!(json, "\"apple\"");
        let back: SystemType = serde_json::from_str("\"windows\"").unwrap();
        assert_eq!(back, SystemType::Windows);
    }
}
