//! Jalaali/Gregorian conversion.
//!
//! [`CalendarBackend`] is the conversion primitive the date utility is built
//! on. [`Jalaali`] implements it with the 33-year break table used by the
//! Iranian calendar: Farvardin 1 is located in Gregorian March, and every
//! other day is an offset from it.

use crate::JalaaliDate;
use crate::consts::{
    BAHMAN, BREAKS, ESFAND_DAYS, ESFAND_DAYS_LEAP, FIRST_HALF_MONTH_DAYS, GREGORIAN_OFFSET,
    LEAP_CYCLE, LEAPS_PER_CYCLE, MARCH, MAX_MONTH, MAX_YEAR, MIN_YEAR, SECOND_HALF_MONTH_DAYS,
    SHAHRIVAR,
};
use chrono::{Datelike, Duration, NaiveDate};

/// Days from Farvardin 1 to Mehr 1
const FIRST_HALF_DAYS: i64 = FIRST_HALF_MONTH_DAYS as i64 * SHAHRIVAR as i64;
/// Days in months seven through twelve of a common year
const COMMON_YEAR_SECOND_HALF_DAYS: i64 = 179;

/// Error type for calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the break table.
    #[error("invalid jalaali year: {year} (must be {}..={})", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange { year: i32 },

    /// Month outside 1..=12.
    #[error("invalid jalaali month: {month} (must be 1..={})", MAX_MONTH)]
    InvalidMonth { month: u8 },

    /// The date falls outside what `chrono` can represent.
    #[error("date {date} cannot be represented in the gregorian calendar")]
    Unrepresentable { date: String },
}

/// Conversion primitive between Jalaali dates and Gregorian dates.
///
/// Implementations must be pure: the same input always maps to the same output.
pub trait CalendarBackend {
    /// Number of days in the given Jalaali month.
    ///
    /// # Errors
    /// Returns `CalendarError` if the year or month is outside what the backend supports.
    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError>;

    /// Converts a Jalaali date to its Gregorian equivalent.
    ///
    /// # Errors
    /// Returns `CalendarError` if the date cannot be converted.
    fn to_gregorian(&self, date: &JalaaliDate) -> Result<NaiveDate, CalendarError>;

    /// Converts a Gregorian date to its Jalaali equivalent.
    ///
    /// # Errors
    /// Returns `CalendarError` if the date cannot be converted.
    fn from_gregorian(&self, date: NaiveDate) -> Result<JalaaliDate, CalendarError>;
}

impl<T: CalendarBackend + ?Sized> CalendarBackend for &T {
    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        (**self).days_in_month(year, month)
    }

    fn to_gregorian(&self, date: &JalaaliDate) -> Result<NaiveDate, CalendarError> {
        (**self).to_gregorian(date)
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<JalaaliDate, CalendarError> {
        (**self).from_gregorian(date)
    }
}

/// The arithmetic Jalaali calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jalaali;

/// Where a Jalaali year sits relative to the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearAnchor {
    /// Gregorian year in which the Jalaali year begins
    gregorian_year: i32,
    /// Day of Gregorian March that is Farvardin 1
    march_day: u32,
    /// Years since the last leap year (0 means this is a leap year)
    leap: i32,
}

impl YearAnchor {
    fn farvardin_first(&self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.gregorian_year, MARCH, self.march_day).ok_or_else(|| {
            CalendarError::Unrepresentable {
                date: format!("{}-03-{:02}", self.gregorian_year, self.march_day),
            }
        })
    }
}

const fn check_year(year: i32) -> Result<(), CalendarError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(())
}

/// Locates a Jalaali year in the break table.
fn anchor(year: i32) -> Result<YearAnchor, CalendarError> {
    check_year(year)?;

    let gregorian_year = year + GREGORIAN_OFFSET;
    let mut leap_jalaali = -14;
    let mut previous_break = BREAKS[0];
    let mut jump = 0;

    for &next_break in &BREAKS[1..] {
        jump = next_break - previous_break;
        if year < next_break {
            break;
        }
        leap_jalaali += jump / LEAP_CYCLE * LEAPS_PER_CYCLE + jump % LEAP_CYCLE / 4;
        previous_break = next_break;
    }

    let mut n = year - previous_break;
    leap_jalaali += n / LEAP_CYCLE * LEAPS_PER_CYCLE + (n % LEAP_CYCLE + 3) / 4;
    if jump % LEAP_CYCLE == 4 && jump - n == 4 {
        leap_jalaali += 1;
    }

    let leap_gregorian = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    #[allow(clippy::cast_sign_loss)]
    let march_day = (20 + leap_jalaali - leap_gregorian) as u32;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / LEAP_CYCLE * LEAP_CYCLE;
    }
    let mut leap = ((n + 1) % LEAP_CYCLE - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearAnchor {
        gregorian_year,
        march_day,
        leap,
    })
}

/// Returns true if the Jalaali year has a 30-day Esfand.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside the supported years.
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    anchor(year).map(|a| a.leap == 0)
}

/// Days in a Jalaali month.
///
/// # Errors
/// Returns `CalendarError` for an unsupported year or a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_year(year)?;
    match month {
        0 => Err(CalendarError::InvalidMonth { month }),
        m if m <= SHAHRIVAR => Ok(FIRST_HALF_MONTH_DAYS),
        m if m <= BAHMAN => Ok(SECOND_HALF_MONTH_DAYS),
        m if m == MAX_MONTH => {
            if is_leap_year(year)? {
                Ok(ESFAND_DAYS_LEAP)
            } else {
                Ok(ESFAND_DAYS)
            }
        }
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Days between Farvardin 1 and the given month/day of the same year.
/// Days past the end of a month roll into the following months.
fn day_of_year_offset(month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    (month - 1) * i64::from(FIRST_HALF_MONTH_DAYS) - month / 7 * (month - 7) + i64::from(day) - 1
}

impl CalendarBackend for Jalaali {
    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        days_in_month(year, month)
    }

    fn to_gregorian(&self, date: &JalaaliDate) -> Result<NaiveDate, CalendarError> {
        let start = anchor(date.year())?.farvardin_first()?;
        start
            .checked_add_signed(Duration::days(day_of_year_offset(date.month(), date.day())))
            .ok_or_else(|| CalendarError::Unrepresentable {
                date: date.to_string(),
            })
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<JalaaliDate, CalendarError> {
        let mut year = date.year() - GREGORIAN_OFFSET;
        let year_anchor = anchor(year)?;
        let mut k = (date - year_anchor.farvardin_first()?).num_days();

        if k >= 0 {
            if k < FIRST_HALF_DAYS {
                return Ok(JalaaliDate::new(
                    year,
                    narrow(1 + k / i64::from(FIRST_HALF_MONTH_DAYS)),
                    narrow(k % i64::from(FIRST_HALF_MONTH_DAYS) + 1),
                ));
            }
            k -= FIRST_HALF_DAYS;
        } else {
            // Before Nowruz: the tail of the previous Jalaali year.
            year -= 1;
            check_year(year)?;
            k += COMMON_YEAR_SECOND_HALF_DAYS;
            if year_anchor.leap == 1 {
                k += 1;
            }
        }

        Ok(JalaaliDate::new(
            year,
            narrow(i64::from(SHAHRIVAR) + 1 + k / i64::from(SECOND_HALF_MONTH_DAYS)),
            narrow(k % i64::from(SECOND_HALF_MONTH_DAYS) + 1),
        ))
    }
}

/// Month and day values computed above always fit in a `u8`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn narrow(value: i64) -> u8 {
    value as u8
}
