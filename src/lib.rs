// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Spreadsheet Epoch Module
//!
//! Conversion between calendar timestamps and the serial day numbers used by
//! spreadsheet programs to store dates, including their historical quirks.
//!
//! # Core types
//!
//! - [`EpochConverter`] — converts in both directions for one [`SystemType`].
//! - [`SystemType`] — the 1900 (`Windows`) or 1904 (`Apple`) date system.
//! - [`CalendarTimestamp`] — clock reading plus an optional [`TimeZoneRef`].
//! - [`SerialInput`] / [`SerialOutcome`] — the typed boundary of the two
//!   conversions.
//! - [`EpochError`] / [`BadDateWarning`] — fatal errors and recoverable
//!   substitution notices.
//!
//! # Date systems
//!
//! | System | Serial 0 | Serial 1 | Quirk |
//! |--------|----------|----------|-------|
//! | [`SystemType::Windows`] | "1900-01-00" | 1900-01-01 | serial 60 = 1900-02-29 |
//! | [`SystemType::Apple`]   | 1904-01-01   | 1904-01-02 | — |
//!
//! The integer part of a serial counts days, the fractional part is the
//! elapsed fraction of the day (`0.5` = noon), resolved to milliseconds.
//!
//! # Quick example
//!
//! ```
//! use sheetepoch::{BadDateWarning, EpochConverter, SystemType};
//!
//! let converter = EpochConverter::new(SystemType::Windows);
//! let unix_epoch = converter.to_calendar(25569, None).unwrap();
//! assert_eq!(unix_epoch.to_string(), "1970-01-01T00:00:00");
//!
//! let leap = converter.to_calendar_diagnosed(60.5, None).unwrap();
//! assert_eq!(leap.value.to_string(), "1900-03-01T12:00:00");
//! assert_eq!(leap.warning, Some(BadDateWarning::FictitiousLeapDay));
//! ```

mod converter;
mod error;
pub mod julian;
mod system;
mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use converter::{EpochConverter, SerialInput, SerialOutcome};
pub use error::{BadDateWarning, Diagnosed, EpochError, Result};
pub use system::SystemType;
pub use timestamp::{CalendarTimestamp, TimeZoneRef};
