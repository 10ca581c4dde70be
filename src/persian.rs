//! Persian digit and month-name substitution.

use crate::consts::MAX_MONTH;
use std::fmt::Display;

/// Persian digits indexed by their value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Jalaali month names, Farvardin first
pub const PERSIAN_MONTHS: [&str; MAX_MONTH as usize] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Replaces every ASCII digit in the rendered value with its Persian digit.
/// Other characters are kept as they are.
pub fn to_persian_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replaces every Persian digit with its ASCII digit.
pub fn from_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .position(|&p| p == c)
                .and_then(|d| char::from_digit(u32::try_from(d).ok()?, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Persian name of a 1-based month number
pub fn month_name(month: u8) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    PERSIAN_MONTHS.get(index).copied()
}

/// 1-based month number for a Persian month name
pub fn month_number(name: &str) -> Option<u8> {
    let index = PERSIAN_MONTHS.iter().position(|&m| m == name.trim())?;
    u8::try_from(index + 1).ok()
}

/// Pads a number to two digits. Zero is treated as unset and becomes `"01"`.
pub fn put_zero(number: u32) -> String {
    if number == 0 {
        "01".to_owned()
    } else {
        format!("{number:02}")
    }
}
