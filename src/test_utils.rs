//! Shared constructors for unit tests.

use crate::{DateUtility, FixedClock, Jalaali, JalaaliDate};
use chrono::NaiveDate;

pub fn jdate(year: i32, month: u8, day: u8) -> JalaaliDate {
    JalaaliDate::new(year, month, day)
}

pub fn gregorian(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid gregorian date in test")
}

/// Utility pinned to 1402/01/01 (2023-03-21).
pub fn utility() -> DateUtility<Jalaali, FixedClock> {
    DateUtility::new(Jalaali, FixedClock::new(gregorian(2023, 3, 21)))
}
