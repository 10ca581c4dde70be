mod calendar;
mod clock;
mod config;
mod consts;
mod grid;
mod persian;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;
mod utility;

pub use calendar::{CalendarBackend, CalendarError, Jalaali, days_in_month, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use grid::{ClickOutcome, DayCell, DayMarks, Selection};
pub use persian::{
    PERSIAN_DIGITS, PERSIAN_MONTHS, from_persian_digits, month_name, month_number, put_zero,
    to_persian_digits,
};
pub use range::{DateRange, RangeSelection};
pub use types::{Direction, Weekday};
pub use utility::DateUtility;

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A day in the Jalaali calendar.
///
/// Values are not validated: callers supply real Jalaali dates, or use
/// [`JalaaliDate::checked`] / [`FromStr`] when the input is untrusted.
/// The `is_standard` and `is_disabled` flags are display hints set by a
/// calendar view; equality, hashing and ordering only look at the
/// year, month and day.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}/{:02}/{:02}", year, month, day)]
#[serde(rename_all = "camelCase")]
pub struct JalaaliDate {
    year:        i32,
    month:       u8,
    day:         u8,
    /// Belongs to the displayed month rather than being a padding cell
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_standard: bool,
    /// Blocked from selection
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "{_0}")]
    Calendar(CalendarError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl From<CalendarError> for ParseError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}

impl JalaaliDate {
    /// Creates a date without any validation
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            is_standard: false,
            is_disabled: false,
        }
    }

    /// Creates a date, validating the month and the day against the month length
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth`, `ParseError::InvalidDay`, or
    /// `ParseError::Calendar` when the year is outside the supported range.
    pub fn checked(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        let max_day = days_in_month(year, month)?;
        if day < MIN_DAY || day > max_day {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self::new(year, month, day))
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_standard(&self) -> bool {
        self.is_standard
    }

    pub const fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Returns a copy with the `is_standard` flag set
    #[must_use]
    pub const fn with_standard(self, is_standard: bool) -> Self {
        Self { is_standard, ..self }
    }

    /// Returns a copy with the `is_disabled` flag set
    #[must_use]
    pub const fn with_disabled(self, is_disabled: bool) -> Self {
        Self { is_disabled, ..self }
    }

    /// Returns a copy with the day replaced
    #[must_use]
    pub const fn with_day(self, day: u8) -> Self {
        Self { day, ..self }
    }

    /// First day of the month one step in `direction`.
    /// Rolls the year over when the month leaves 1..=12; the year saturates at the `i32` bounds.
    #[must_use]
    pub fn shift_month(&self, direction: Direction) -> Self {
        let mut month = i32::from(self.month) + direction.delta();
        let mut year = self.year;
        if month < i32::from(FARVARDIN) {
            month = i32::from(ESFAND);
            year = year.saturating_sub(1);
        }
        if month > i32::from(ESFAND) {
            month = i32::from(FARVARDIN);
            year = year.saturating_add(1);
        }
        // Inside 1..=12 after the rollover above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = month as u8;
        Self::new(year, month, MIN_DAY)
    }

    /// The `(year, month, day)` triple
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl PartialEq for JalaaliDate {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple() == other.to_tuple()
    }
}

impl Eq for JalaaliDate {}

impl Hash for JalaaliDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_tuple().hash(state);
    }
}

impl PartialOrd for JalaaliDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JalaaliDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_tuple().cmp(&other.to_tuple())
    }
}

impl From<(i32, u8, u8)> for JalaaliDate {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

impl FromStr for JalaaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = from_persian_digits(s.trim());
        if normalized.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = normalized.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s)",
                parts.len()
            )));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

        Self::checked(year, month, day)
    }
}
