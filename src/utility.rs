//! Date arithmetic and range selection over an injected calendar backend.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::JalaaliDate;
use crate::calendar::{CalendarBackend, CalendarError, Jalaali};
use crate::clock::{Clock, SystemClock};
use crate::consts::{GREGORIAN_SATURDAY, MIN_DAY, SATURDAY_FIRST_WEEKDAY_OFFSET};
use crate::range::{DateRange, RangeSelection};
use crate::types::{Direction, Weekday};

/// Calendar operations for a date picker.
///
/// The Jalaali/Gregorian conversion and the clock are injected so the
/// utility can run against a fixed date or another calendar backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateUtility<C = Jalaali, K = SystemClock> {
    calendar: C,
    clock:    K,
}

impl DateUtility {
    /// Built-in Jalaali arithmetic and the system clock
    pub const fn system() -> Self {
        Self::new(Jalaali, SystemClock)
    }
}

impl<C: CalendarBackend, K: Clock> DateUtility<C, K> {
    pub const fn new(calendar: C, clock: K) -> Self {
        Self { calendar, clock }
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    pub const fn clock(&self) -> &K {
        &self.clock
    }

    /// Today's date in the Jalaali calendar.
    ///
    /// # Errors
    /// Returns `CalendarError` if the backend cannot convert the clock's date.
    pub fn today(&self) -> Result<JalaaliDate, CalendarError> {
        self.calendar.from_gregorian(self.clock.today())
    }

    /// Number of days in the month of `date`.
    ///
    /// # Errors
    /// Returns `CalendarError` if the backend does not support the year or month.
    pub fn month_length(&self, date: &JalaaliDate) -> Result<u8, CalendarError> {
        self.calendar.days_in_month(date.year(), date.month())
    }

    /// Gregorian weekday of the first day of the month of `date`.
    ///
    /// # Errors
    /// Returns `CalendarError` if the first day cannot be converted.
    pub fn first_weekday(&self, date: &JalaaliDate) -> Result<Weekday, CalendarError> {
        let first = self.calendar.to_gregorian(&date.with_day(MIN_DAY))?;
        Ok(first.weekday().into())
    }

    /// Leading cell count for the month grid of `date`.
    ///
    /// Sunday..Friday map to `sunday_index + 1` (1..=6). A month that starts
    /// on Saturday reports [`SATURDAY_FIRST_WEEKDAY_OFFSET`] (3), not the 1
    /// a Saturday-first week would suggest; grid layouts depend on that value.
    ///
    /// # Errors
    /// Returns `CalendarError` if the first day cannot be converted.
    pub fn first_weekday_offset(&self, date: &JalaaliDate) -> Result<u8, CalendarError> {
        let weekday = self.first_weekday(date)?.sunday_index();
        if weekday < GREGORIAN_SATURDAY {
            Ok(weekday + 1)
        } else {
            Ok(SATURDAY_FIRST_WEEKDAY_OFFSET)
        }
    }

    /// First day of the next or previous month.
    #[must_use]
    pub fn shift_month(&self, date: &JalaaliDate, direction: Direction) -> JalaaliDate {
        date.shift_month(direction)
    }

    /// Returns true if both days are present and share year, month and day.
    pub fn is_same_day(&self, a: Option<&JalaaliDate>, b: Option<&JalaaliDate>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns true if both days are present and `a` is strictly earlier than `b`.
    ///
    /// Both days go through the Gregorian calendar; a day that cannot be
    /// converted compares as absent.
    pub fn is_before(&self, a: Option<&JalaaliDate>, b: Option<&JalaaliDate>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };
        match (self.gregorian(a), self.gregorian(b)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// Returns true if `day` lies strictly between `from` and `to`.
    /// The ends themselves are not in range.
    pub fn check_in_range(
        &self,
        day: Option<&JalaaliDate>,
        from: Option<&JalaaliDate>,
        to: Option<&JalaaliDate>,
    ) -> bool {
        let (Some(day), Some(from), Some(to)) = (day, from, to) else {
            return false;
        };
        match (self.gregorian(day), self.gregorian(from), self.gregorian(to)) {
            (Some(day), Some(from), Some(to)) => from < day && day < to,
            _ => false,
        }
    }

    /// Returns true if `day` lies strictly inside `range`
    pub fn is_within(&self, day: &JalaaliDate, range: &DateRange) -> bool {
        self.check_in_range(Some(day), range.from().as_ref(), range.to().as_ref())
    }

    /// Applies a click on `clicked` to `existing`.
    ///
    /// The day fills the range (restarting it when already complete), the
    /// ends are put in chronological order, and the update is rejected if any
    /// of `disabled_days` falls strictly inside the result.
    pub fn build_range_selection(
        &self,
        existing: &DateRange,
        clicked: JalaaliDate,
        disabled_days: &[JalaaliDate],
    ) -> RangeSelection {
        let mut range = existing.with_clicked(clicked);
        if self.is_before(range.to().as_ref(), range.from().as_ref()) {
            range = range.swapped();
        }

        if let Some(disabled_day) = disabled_days.iter().find(|d| self.is_within(d, &range)) {
            debug!(%disabled_day, %clicked, "range rejected: disabled day inside selection");
            return RangeSelection::Rejected {
                range:        *existing,
                disabled_day: *disabled_day,
            };
        }

        RangeSelection::Accepted(range)
    }

    fn gregorian(&self, date: &JalaaliDate) -> Option<NaiveDate> {
        self.calendar
            .to_gregorian(date)
            .inspect_err(|err| warn!(%date, %err, "cannot compare date"))
            .ok()
    }
}
