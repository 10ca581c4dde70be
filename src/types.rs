use crate::ParseError;
use crate::consts::{DAYS_IN_WEEK, GREGORIAN_SATURDAY};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of a one-month step in the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    #[display(fmt = "NEXT")]
    Next,
    #[display(fmt = "PREVIOUS")]
    Previous,
}

impl Direction {
    /// Signed month delta for this direction
    #[inline]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }

    /// The opposite direction
    pub const fn reverse(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NEXT" => Ok(Self::Next),
            "PREVIOUS" => Ok(Self::Previous),
            other => Err(ParseError::InvalidFormat(format!(
                "Unknown direction: {other} (expected NEXT or PREVIOUS)"
            ))),
        }
    }
}

/// Day of a week that starts on Saturday and ends on Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "شنبه")]
    Saturday,
    #[display(fmt = "یکشنبه")]
    Sunday,
    #[display(fmt = "دوشنبه")]
    Monday,
    #[display(fmt = "سه شنبه")]
    Tuesday,
    #[display(fmt = "چهارشنبه")]
    Wednesday,
    #[display(fmt = "پنجشنبه")]
    Thursday,
    #[display(fmt = "جمعه")]
    Friday,
}

impl Weekday {
    /// All weekdays in calendar header order
    pub const ALL: [Self; DAYS_IN_WEEK as usize] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Builds a weekday from a Sunday-based index (0=Sunday..6=Saturday).
    /// Indices past 6 wrap around.
    pub const fn from_sunday_index(index: u8) -> Self {
        match index % DAYS_IN_WEEK {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Sunday-based index (0=Sunday..6=Saturday)
    pub const fn sunday_index(self) -> u8 {
        match self {
            Self::Saturday => GREGORIAN_SATURDAY,
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
        }
    }

    /// Position in a Saturday-first week (Saturday=1..Friday=7)
    pub const fn position(self) -> u8 {
        (self.sunday_index() + 1) % DAYS_IN_WEEK + 1
    }

    /// Persian weekday name
    pub fn persian_name(self) -> &'static str {
        match self {
            Self::Saturday => "شنبه",
            Self::Sunday => "یکشنبه",
            Self::Monday => "دوشنبه",
            Self::Tuesday => "سه شنبه",
            Self::Wednesday => "چهارشنبه",
            Self::Thursday => "پنجشنبه",
            Self::Friday => "جمعه",
        }
    }

    /// First letter of the Persian name, used for column headers
    pub fn initial(self) -> char {
        self.persian_name().chars().next().unwrap_or(' ')
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let index = day.num_days_from_sunday() as u8;
        Self::from_sunday_index(index)
    }
}
