//! Device clock timestamps

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Date and time reported by the device clock
///
/// The device sends 12 decimal digits: `DDMMYYhhmmss`, with the two-digit
/// year offset from 2000.
///
/// [`DeviceTimestamp::default`] is the "unavailable" sentinel,
/// `0001-01-01 00:00:00`. It is what callers get from
/// `result.unwrap_or_default()` when the clock could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceTimestamp(NaiveDateTime);

impl DeviceTimestamp {
    /// Number of digits in an encoded timestamp
    pub const DIGITS: usize = 12;

    /// Year the two-digit device year is offset from
    pub const BASE_YEAR: i32 = 2000;

    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// The "unavailable" sentinel
    pub fn unavailable() -> Self {
        let sentinel = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self(sentinel)
    }

    /// Parse the `DDMMYYhhmmss` digit string sent by the device
    ///
    /// # Examples
    ///
    /// ```
    /// use guaritaip_types::DeviceTimestamp;
    ///
    /// let ts = DeviceTimestamp::from_digits("050923143000").unwrap();
    /// assert_eq!(ts.to_string(), "2023-09-05 14:30:00");
    /// ```
    pub fn from_digits(digits: &str) -> Result<Self> {
        if digits.len() != Self::DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Parse(format!(
                "expected {} decimal digits, got {:?}",
                Self::DIGITS,
                digits
            )));
        }

        // All ASCII digits, so byte slicing is safe and parsing cannot fail
        let field = |range: std::ops::Range<usize>| -> u32 {
            digits[range].parse().unwrap_or_default()
        };

        let day = field(0..2);
        let month = field(2..4);
        let year = Self::BASE_YEAR + field(4..6) as i32;
        let hour = field(6..8);
        let minute = field(8..10);
        let second = field(10..12);

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self)
            .ok_or_else(|| {
                Error::Validation(format!(
                    "invalid date/time {:02}/{:02}/{} {:02}:{:02}:{:02}",
                    day, month, year, hour, minute, second
                ))
            })
    }

    /// Check whether this is a real reading rather than the sentinel
    pub fn is_available(&self) -> bool {
        *self != Self::unavailable()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl Default for DeviceTimestamp {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl From<DeviceTimestamp> for NaiveDateTime {
    fn from(ts: DeviceTimestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for DeviceTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
