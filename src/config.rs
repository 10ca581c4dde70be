//! Picker configuration: selectable bounds, disabled days and the year selector span.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::JalaaliDate;
use crate::consts::{DEFAULT_SELECTOR_ENDING_YEAR, DEFAULT_SELECTOR_STARTING_YEAR};

/// Settings a calendar view is built from.
///
/// Deserializes from the camelCase keys a picker is usually configured with;
/// every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// Earliest selectable day
    pub minimum_date:           Option<JalaaliDate>,
    /// Latest selectable day
    pub maximum_date:           Option<JalaaliDate>,
    /// Days that can never be selected or spanned by a range
    pub disabled_days:          Vec<JalaaliDate>,
    pub selector_starting_year: i32,
    pub selector_ending_year:   i32,
}

/// Error type for inconsistent configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The minimum date is after the maximum date.
    #[error("minimum date {minimum} is after maximum date {maximum}")]
    InvertedBounds {
        minimum: JalaaliDate,
        maximum: JalaaliDate,
    },

    /// The year selector would be empty.
    #[error("selector starting year {start} is after ending year {end}")]
    InvertedSelectorYears { start: i32, end: i32 },
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            minimum_date:           None,
            maximum_date:           None,
            disabled_days:          Vec::new(),
            selector_starting_year: DEFAULT_SELECTOR_STARTING_YEAR,
            selector_ending_year:   DEFAULT_SELECTOR_ENDING_YEAR,
        }
    }
}

impl PickerConfig {
    #[must_use]
    pub fn with_minimum_date(mut self, date: JalaaliDate) -> Self {
        self.minimum_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_maximum_date(mut self, date: JalaaliDate) -> Self {
        self.maximum_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_disabled_days(mut self, days: impl IntoIterator<Item = JalaaliDate>) -> Self {
        self.disabled_days = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_selector_years(mut self, start: i32, end: i32) -> Self {
        self.selector_starting_year = start;
        self.selector_ending_year = end;
        self
    }

    /// Checks that the bounds and the selector span are ordered.
    ///
    /// # Errors
    /// Returns `ConfigError` describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(minimum), Some(maximum)) = (self.minimum_date, self.maximum_date) {
            if minimum > maximum {
                return Err(ConfigError::InvertedBounds { minimum, maximum });
            }
        }
        if self.selector_starting_year > self.selector_ending_year {
            return Err(ConfigError::InvertedSelectorYears {
                start: self.selector_starting_year,
                end:   self.selector_ending_year,
            });
        }
        Ok(())
    }

    /// Years offered by the year selector
    pub const fn selector_years(&self) -> RangeInclusive<i32> {
        self.selector_starting_year..=self.selector_ending_year
    }

    /// Returns true if the year selector may pick `year`
    pub fn is_year_selectable(&self, year: i32) -> bool {
        let after_maximum = self.maximum_date.is_some_and(|max| year > max.year());
        let before_minimum = self.minimum_date.is_some_and(|min| year < min.year());
        !after_maximum && !before_minimum
    }

    /// Selector years together with whether each may be picked
    pub fn selectable_years(&self) -> Vec<(i32, bool)> {
        self.selector_years()
            .map(|year| (year, self.is_year_selectable(year)))
            .collect()
    }
}
