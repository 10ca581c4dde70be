//! Month grid layout, per-day markers and navigation limits.

use serde::{Deserialize, Serialize};

use crate::JalaaliDate;
use crate::calendar::{CalendarBackend, CalendarError};
use crate::clock::Clock;
use crate::config::PickerConfig;
use crate::consts::{DAYS_IN_WEEK, MIN_DAY};
use crate::range::{DateRange, RangeSelection};
use crate::types::Direction;
use crate::utility::DateUtility;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first or after the last day of the month
    Blank,
    /// A day of the displayed month, flagged `is_standard`
    Day(JalaaliDate),
}

/// What the picker currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    Single(Option<JalaaliDate>),
    Range(DateRange),
}

/// Result of a click on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The selection changed
    Changed(Selection),
    /// The click was refused because of `disabled_day`; the selection stays as it was
    Rejected { disabled_day: JalaaliDate },
}

/// Highlight state of a day in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DayMarks {
    /// Today, and not the selected day
    pub today:       bool,
    pub selected:    bool,
    pub range_start: bool,
    pub range_end:   bool,
    /// Strictly between the range ends
    pub in_range:    bool,
    /// Padding cell
    pub blank:       bool,
    pub disabled:    bool,
}

impl DayCell {
    pub const fn date(&self) -> Option<JalaaliDate> {
        match *self {
            Self::Blank => None,
            Self::Day(date) => Some(date),
        }
    }

    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl Selection {
    pub const fn selected_day(&self) -> Option<JalaaliDate> {
        match *self {
            Self::Single(day) => day,
            Self::Range(_) => None,
        }
    }

    pub const fn range(&self) -> DateRange {
        match *self {
            Self::Single(_) => DateRange::empty(),
            Self::Range(range) => range,
        }
    }
}

impl<C: CalendarBackend, K: Clock> DateUtility<C, K> {
    /// Returns true if `day` may not be picked: it is listed in the disabled
    /// days or falls outside the minimum/maximum bounds.
    pub fn is_disabled_day(&self, day: &JalaaliDate, config: &PickerConfig) -> bool {
        let listed = config
            .disabled_days
            .iter()
            .any(|disabled| self.is_same_day(Some(day), Some(disabled)));
        let before_minimum = self.is_before(Some(day), config.minimum_date.as_ref());
        let after_maximum = self.is_before(config.maximum_date.as_ref(), Some(day));
        listed || before_minimum || after_maximum
    }

    /// Cells of the month containing `active`.
    ///
    /// `first_weekday_offset` blanks lead the month and `7 - offset` blanks
    /// trail it. Every day is flagged `is_standard` and carries its
    /// `is_disabled` state.
    ///
    /// # Errors
    /// Returns `CalendarError` if the month cannot be resolved by the backend.
    pub fn month_cells(
        &self,
        active: &JalaaliDate,
        config: &PickerConfig,
    ) -> Result<Vec<DayCell>, CalendarError> {
        let offset = self.first_weekday_offset(active)?;
        let length = self.month_length(active)?;
        let trailing = DAYS_IN_WEEK.saturating_sub(offset);

        let capacity = usize::from(offset) + usize::from(length) + usize::from(trailing);
        let mut cells = Vec::with_capacity(capacity);
        cells.extend((0..offset).map(|_| DayCell::Blank));
        cells.extend((MIN_DAY..=length).map(|day| {
            let date = JalaaliDate::new(active.year(), active.month(), day).with_standard(true);
            DayCell::Day(date.with_disabled(self.is_disabled_day(&date, config)))
        }));
        cells.extend((0..trailing).map(|_| DayCell::Blank));
        Ok(cells)
    }

    /// Highlight state of `day` given today's date and the current selection.
    pub fn day_marks(
        &self,
        day: &JalaaliDate,
        today: &JalaaliDate,
        selection: &Selection,
    ) -> DayMarks {
        let selected = self.is_same_day(Some(day), selection.selected_day().as_ref());
        let range = selection.range();
        DayMarks {
            today: self.is_same_day(Some(day), Some(today)) && !selected,
            selected,
            range_start: self.is_same_day(Some(day), range.from().as_ref()),
            range_end: self.is_same_day(Some(day), range.to().as_ref()),
            in_range: self.is_within(day, &range),
            blank: !day.is_standard(),
            disabled: day.is_disabled(),
        }
    }

    /// Applies a click on `clicked`.
    ///
    /// Disabled days are refused outright. In range mode the range policy of
    /// [`DateUtility::build_range_selection`] decides.
    pub fn click_day(
        &self,
        selection: &Selection,
        clicked: JalaaliDate,
        config: &PickerConfig,
    ) -> ClickOutcome {
        if self.is_disabled_day(&clicked, config) {
            tracing::debug!(%clicked, "click on disabled day");
            return ClickOutcome::Rejected { disabled_day: clicked };
        }
        match selection {
            Selection::Single(_) => ClickOutcome::Changed(Selection::Single(Some(clicked))),
            Selection::Range(range) => {
                match self.build_range_selection(range, clicked, &config.disabled_days) {
                    RangeSelection::Accepted(range) => {
                        ClickOutcome::Changed(Selection::Range(range))
                    }
                    RangeSelection::Rejected { disabled_day, .. } => {
                        ClickOutcome::Rejected { disabled_day }
                    }
                }
            }
        }
    }

    /// Month the view opens on: the selected day, else the start of the
    /// selected range, else today.
    ///
    /// # Errors
    /// Returns `CalendarError` if today's date cannot be converted.
    pub fn initial_active_date(&self, selection: &Selection) -> Result<JalaaliDate, CalendarError> {
        match selection.selected_day().or_else(|| selection.range().from()) {
            Some(date) => Ok(date),
            None => self.today(),
        }
    }

    /// Returns true if stepping forward from `active` would pass the maximum date
    pub fn is_next_month_blocked(&self, active: &JalaaliDate, config: &PickerConfig) -> bool {
        let next = active.shift_month(Direction::Next);
        self.is_before(config.maximum_date.as_ref(), Some(&next))
    }

    /// Returns true if stepping back from `active` would pass the minimum date
    pub fn is_previous_month_blocked(&self, active: &JalaaliDate, config: &PickerConfig) -> bool {
        let first = active.with_day(MIN_DAY);
        self.is_before(Some(&first), config.minimum_date.as_ref())
            || self.is_same_day(config.minimum_date.as_ref(), Some(&first))
    }

    /// Returns true if the month selector may jump to `month` of `year`
    pub fn is_month_selectable(&self, year: i32, month: u8, config: &PickerConfig) -> bool {
        let first = JalaaliDate::new(year, month, MIN_DAY);
        let next = first.shift_month(Direction::Next);
        let after_maximum = self.is_before(config.maximum_date.as_ref(), Some(&first));
        let before_minimum = self.is_before(Some(&next), config.minimum_date.as_ref())
            || self.is_same_day(Some(&next), config.minimum_date.as_ref());
        !after_maximum && !before_minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{jdate, utility};

    fn days(cells: &[DayCell]) -> Vec<JalaaliDate> {
        cells.iter().filter_map(DayCell::date).collect()
    }

    #[test]
    fn test_month_cells_layout() {
        let util = utility();
        // 1402/01/01 is a Tuesday: offset 3.
        let cells = util.month_cells(&jdate(1402, 1, 20), &PickerConfig::default()).unwrap();

        assert_eq!(cells.len(), 3 + 31 + 4);
        assert!(cells[..3].iter().all(DayCell::is_blank));
        assert!(cells[34..].iter().all(DayCell::is_blank));
        assert_eq!(cells[3], DayCell::Day(jdate(1402, 1, 1)));
        assert_eq!(cells[33], DayCell::Day(jdate(1402, 1, 31)));

        let days = days(&cells);
        assert_eq!(days.len(), 31);
        assert!(days.iter().all(JalaaliDate::is_standard));
        assert!(days.iter().all(|d| !d.is_disabled()));
    }

    #[test]
    fn test_month_cells_esfand() {
        let util = utility();
        let common = util.month_cells(&jdate(1402, 12, 1), &PickerConfig::default()).unwrap();
        assert_eq!(days(&common).len(), 29);
        let leap = util.month_cells(&jdate(1403, 12, 1), &PickerConfig::default()).unwrap();
        assert_eq!(days(&leap).len(), 30);
    }

    #[test]
    fn test_month_cells_saturday_start() {
        let util = utility();
        // 1402/07/01 is a Saturday and takes the fixed offset of 3.
        let cells = util.month_cells(&jdate(1402, 7, 1), &PickerConfig::default()).unwrap();
        assert!(cells[..3].iter().all(DayCell::is_blank));
        assert_eq!(cells[3].date(), Some(jdate(1402, 7, 1)));
        assert_eq!(cells.len(), 3 + 30 + 4);
    }

    #[test]
    fn test_month_cells_disabled_flags() {
        let util = utility();
        let config = PickerConfig::default()
            .with_minimum_date(jdate(1402, 1, 5))
            .with_maximum_date(jdate(1402, 1, 25))
            .with_disabled_days([jdate(1402, 1, 13)]);
        let cells = util.month_cells(&jdate(1402, 1, 1), &config).unwrap();

        let disabled: Vec<u8> = days(&cells)
            .iter()
            .filter(|d| d.is_disabled())
            .map(JalaaliDate::day)
            .collect();
        let expected: Vec<u8> = (1..=4).chain([13]).chain(26..=31).collect();
        assert_eq!(disabled, expected);
    }

    #[test]
    fn test_is_disabled_day() {
        let util = utility();
        let config = PickerConfig::default()
            .with_minimum_date(jdate(1402, 1, 5))
            .with_disabled_days([jdate(1402, 1, 13)]);
        assert!(util.is_disabled_day(&jdate(1402, 1, 4), &config));
        assert!(!util.is_disabled_day(&jdate(1402, 1, 5), &config));
        assert!(util.is_disabled_day(&jdate(1402, 1, 13), &config));
        assert!(!util.is_disabled_day(&jdate(1405, 1, 13), &config));
    }

    #[test]
    fn test_day_marks_single() {
        let util = utility();
        let today = jdate(1402, 1, 1);
        let selection = Selection::Single(Some(jdate(1402, 1, 2)));

        let marks = util.day_marks(&today.with_standard(true), &today, &selection);
        assert_eq!(
            marks,
            DayMarks {
                today: true,
                ..DayMarks::default()
            }
        );

        let marks = util.day_marks(&jdate(1402, 1, 2).with_standard(true), &today, &selection);
        assert!(marks.selected);
        assert!(!marks.today);

        let today_selected = Selection::Single(Some(today));
        let marks = util.day_marks(&today.with_standard(true), &today, &today_selected);
        assert!(marks.selected);
        assert!(!marks.today, "today mark is hidden when selected");
    }

    #[test]
    fn test_day_marks_range() {
        let util = utility();
        let today = jdate(1402, 2, 1);
        let selection = Selection::Range(DateRange::between(jdate(1402, 1, 1), jdate(1402, 1, 10)));

        let start = util.day_marks(&jdate(1402, 1, 1), &today, &selection);
        assert!(start.range_start && !start.in_range && !start.range_end);

        let middle = util.day_marks(&jdate(1402, 1, 5), &today, &selection);
        assert!(middle.in_range && !middle.range_start && !middle.range_end);

        let end = util.day_marks(&jdate(1402, 1, 10), &today, &selection);
        assert!(end.range_end && !end.in_range);

        let blank = util.day_marks(&jdate(1402, 1, 20).with_disabled(true), &today, &selection);
        assert!(blank.blank);
        assert!(blank.disabled);
    }

    #[test]
    fn test_click_day_single() {
        let util = utility();
        let config = PickerConfig::default();
        let outcome = util.click_day(&Selection::Single(None), jdate(1402, 1, 3), &config);
        assert_eq!(outcome, ClickOutcome::Changed(Selection::Single(Some(jdate(1402, 1, 3)))));
    }

    #[test]
    fn test_click_day_disabled() {
        let util = utility();
        let config = PickerConfig::default().with_maximum_date(jdate(1402, 1, 10));
        let outcome = util.click_day(&Selection::Single(None), jdate(1402, 1, 11), &config);
        assert_eq!(
            outcome,
            ClickOutcome::Rejected {
                disabled_day: jdate(1402, 1, 11),
            }
        );
    }

    #[test]
    fn test_click_day_range() {
        let util = utility();
        let config = PickerConfig::default().with_disabled_days([jdate(1402, 1, 5)]);
        let selection = Selection::Range(DateRange::new(Some(jdate(1402, 1, 1)), None));

        let outcome = util.click_day(&selection, jdate(1402, 1, 4), &config);
        assert_eq!(
            outcome,
            ClickOutcome::Changed(Selection::Range(DateRange::between(
                jdate(1402, 1, 1),
                jdate(1402, 1, 4)
            )))
        );

        let outcome = util.click_day(&selection, jdate(1402, 1, 9), &config);
        assert_eq!(
            outcome,
            ClickOutcome::Rejected {
                disabled_day: jdate(1402, 1, 5),
            }
        );
    }

    #[test]
    fn test_initial_active_date() {
        let util = utility();
        let selected = Selection::Single(Some(jdate(1401, 7, 7)));
        assert_eq!(util.initial_active_date(&selected).unwrap(), jdate(1401, 7, 7));

        let range = Selection::Range(DateRange::new(Some(jdate(1400, 2, 2)), None));
        assert_eq!(util.initial_active_date(&range).unwrap(), jdate(1400, 2, 2));

        let nothing = Selection::Range(DateRange::empty());
        assert_eq!(util.initial_active_date(&nothing).unwrap(), jdate(1402, 1, 1));
    }

    #[test]
    fn test_month_navigation_limits() {
        let util = utility();
        let config = PickerConfig::default()
            .with_minimum_date(jdate(1402, 3, 1))
            .with_maximum_date(jdate(1402, 5, 15));

        assert!(util.is_previous_month_blocked(&jdate(1402, 3, 20), &config));
        assert!(!util.is_previous_month_blocked(&jdate(1402, 4, 20), &config));
        assert!(util.is_next_month_blocked(&jdate(1402, 5, 1), &config));
        assert!(!util.is_next_month_blocked(&jdate(1402, 4, 1), &config));

        let unbounded = PickerConfig::default();
        assert!(!util.is_previous_month_blocked(&jdate(1402, 3, 20), &unbounded));
        assert!(!util.is_next_month_blocked(&jdate(1402, 12, 1), &unbounded));
    }

    #[test]
    fn test_next_month_blocked_across_year_end() {
        let util = utility();
        let config = PickerConfig::default().with_maximum_date(jdate(1402, 12, 29));
        assert!(util.is_next_month_blocked(&jdate(1402, 12, 1), &config));
        assert!(!util.is_next_month_blocked(&jdate(1402, 11, 1), &config));
    }

    #[test]
    fn test_month_selectable() {
        let util = utility();
        let config = PickerConfig::default()
            .with_minimum_date(jdate(1402, 3, 10))
            .with_maximum_date(jdate(1402, 9, 1));

        assert!(!util.is_month_selectable(1402, 2, &config));
        assert!(util.is_month_selectable(1402, 3, &config));
        assert!(util.is_month_selectable(1402, 9, &config));
        assert!(!util.is_month_selectable(1402, 10, &config));
        assert!(util.is_month_selectable(1402, 12, &PickerConfig::default()));
    }

    #[test]
    fn test_selection_accessors() {
        let single = Selection::Single(Some(jdate(1402, 1, 1)));
        assert_eq!(single.selected_day(), Some(jdate(1402, 1, 1)));
        assert!(single.range().is_empty());

        let range = DateRange::between(jdate(1402, 1, 1), jdate(1402, 1, 2));
        let ranged = Selection::Range(range);
        assert_eq!(ranged.selected_day(), None);
        assert_eq!(ranged.range(), range);
    }
}
