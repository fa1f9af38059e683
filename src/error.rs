// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error and diagnostic types.
//!
//! Fatal failures are reported through [`EpochError`]. Recoverable
//! substitutions (the zero date and the fictitious 1900 leap day) are not
//! errors: the conversion succeeds and reports a [`BadDateWarning`] next to
//! its result.

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EpochError>;

/// Fatal conversion errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EpochError {
    /// A serial conversion was requested on non-numeric data.
    ///
    /// Date strings are never parsed; non-finite floats are rejected too.
    #[error("invalid input: expected a numeric serial day value, got {0}")]
    InvalidInput(String),

    /// The serial value lies outside the representable domain.
    #[error("serial day value {value} is out of range: {reason}")]
    OutOfRange {
        /// The offending serial value.
        value: f64,
        /// Which bound was violated.
        reason: &'static str,
    },

    /// A textual system-type setting was not recognised.
    #[error("unknown system type {0:?} (expected \"windows\" or \"apple\")")]
    UnknownSystem(String),
}

/// Non-fatal notice that a substitute date was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BadDateWarning {
    /// Serial `0` was supplied; day 0 is not a calendar date.
    ZeroDate,
    /// Windows serial `[60, 61)` was supplied; 1900-02-29 does not exist.
    FictitiousLeapDay,
}

impl fmt::Display for BadDateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDate => f.write_str("bad date supplied: serial day 0 is not a calendar date"),
            Self::FictitiousLeapDay => {
                f.write_str("fictitious leap day requested: 1900-02-29 does not exist")
            }
        }
    }
}

/// A successful conversion result together with an optional warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosed<T> {
    pub value: T,
    pub warning: Option<BadDateWarning>,
}

impl<T> Diagnosed<T> {
    #[inline]
    pub(crate) fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    #[inline]
    pub(crate) fn warned(value: T, warning: BadDateWarning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    /// Discard the diagnostic and keep the value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the value, keeping the diagnostic.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Diagnosed<U> {
        Diagnosed {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = EpochError::InvalidInput("\"2009-11-06\"".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("invalid input"));
        assert!(msg.contains("2009-11-06"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = EpochError::OutOfRange {
            value: -1.5,
            reason: "negative serial day",
        };
        assert_eq!(
            err.to_string(),
            "serial day value -1.5 is out of range: negative serial day"
        );
    }

    #[test]
    fn test_unknown_system_display() {
        let err = EpochError::UnknownSystem("lotus".to_string());
        assert!(err.to_string().contains("\"lotus\""));
    }

    #[test]
    fn test_warning_messages() {
        assert!(BadDateWarning::ZeroDate
            .to_string()
            .starts_with("bad date supplied"));
        assert!(BadDateWarning::FictitiousLeapDay
            .to_string()
            .contains("1900-02-29"));
    }

    #[test]
    fn diagnosed_map_keeps_warning() {
        let d = Diagnosed::warned(2, BadDateWarning::ZeroDate).map(|v| v * 10);
        assert_eq!(d.value, 20);
        assert_eq!(d.warning, Some(BadDateWarning::ZeroDate));
        assert_eq!(Diagnosed::clean("x").into_value(), "x");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_warning_roundtrip() {
        let json = serde_json::to_string(&BadDateWarning::FictitiousLeapDay).unwrap();
        assert_eq!(json, "\"FictitiousLeapDay\"");
        let back: BadDateWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BadDateWarning::FictitiousLeapDay);
    }
}
