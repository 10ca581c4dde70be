use serde::{Deserialize, Serialize};

use crate::JalaaliDate;

/// A selected interval of days. Either end may still be unset.
///
/// The type does not enforce `from <= to`; the selection policy in
/// [`DateUtility::build_range_selection`](crate::DateUtility::build_range_selection)
/// keeps the ends ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    from: Option<JalaaliDate>,
    to:   Option<JalaaliDate>,
}

/// Outcome of clicking a day while selecting a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    /// The click produced a new range.
    Accepted(DateRange),

    /// A disabled day would have fallen inside the new range.
    /// `range` is the range as it was before the click.
    Rejected {
        range:        DateRange,
        disabled_day: JalaaliDate,
    },
}

impl DateRange {
    /// A range with neither end set
    pub const fn empty() -> Self {
        Self { from: None, to: None }
    }

    pub const fn new(from: Option<JalaaliDate>, to: Option<JalaaliDate>) -> Self {
        Self { from, to }
    }

    /// A range spanning `from` to `to`
    pub const fn between(from: JalaaliDate, to: JalaaliDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    pub const fn from(&self) -> Option<JalaaliDate> {
        self.from
    }

    pub const fn to(&self) -> Option<JalaaliDate> {
        self.to
    }

    /// Both ends as a tuple
    pub const fn ends(&self) -> (Option<JalaaliDate>, Option<JalaaliDate>) {
        (self.from, self.to)
    }

    /// Returns true if both ends are set
    pub const fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Returns true if neither end is set
    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Places a clicked day into the range.
    ///
    /// A complete range is discarded and restarted at `day`. Otherwise the
    /// empty slot is filled, `from` first. The result is not reordered.
    #[must_use]
    pub fn with_clicked(self, day: JalaaliDate) -> Self {
        if self.is_complete() {
            tracing::debug!(%day, "restarting complete range");
            return Self::new(Some(day), None);
        }
        match self.from {
            None => Self::new(Some(day), self.to),
            Some(from) => Self::new(Some(from), Some(day)),
        }
    }

    /// The range with its ends exchanged
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            from: self.to,
            to:   self.from,
        }
    }

    /// Returns true if `day` is one of the set ends
    pub fn is_endpoint(&self, day: &JalaaliDate) -> bool {
        self.from.as_ref() == Some(day) || self.to.as_ref() == Some(day)
    }
}

impl RangeSelection {
    /// The range the caller should keep: the new one when accepted,
    /// the previous one when rejected
    pub const fn range(&self) -> DateRange {
        match *self {
            Self::Accepted(range) | Self::Rejected { range, .. } => range,
        }
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The disabled day that caused a rejection
    pub const fn disabled_day(&self) -> Option<JalaaliDate> {
        match *self {
            Self::Accepted(_) => None,
            Self::Rejected { disabled_day, .. } => Some(disabled_day),
        }
    }
}
