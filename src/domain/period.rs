//! Calendar-month periods used to bucket transactions.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single calendar month. `month` is zero-based (`0` = January).
///
/// Years are limited to [`Period::MIN_YEAR`]..=[`Period::MAX_YEAR`], inside
/// chrono's range, so every period and its neighbours map to real dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawPeriod {
    month: u32,
    year: i32,
}

impl TryFrom<RawPeriod> for Period {
    type Error = ValidationError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.month, raw.year)
    }
}

impl Period {
    pub const MIN_YEAR: i32 = -262_000;
    pub const MAX_YEAR: i32 = 262_000;

    pub fn new(month: u32, year: i32) -> Result<Self, ValidationError> {
        if month > 11 {
            return Err(ValidationError::InvalidPeriod { month });
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(ValidationError::InvalidYear { year });
        }
        Ok(Self { year, month })
    }

    /// The period whose calendar month contains `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(date.month0(), date.year())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // month and year are validated on construction, so day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(first)
    }

    /// The month before, or `self` at the start of the supported range.
    pub fn previous(&self) -> Self {
        if self.month == 0 {
            if self.year == Self::MIN_YEAR {
                return *self;
            }
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month after, or `self` at the end of the supported range.
    pub fn next(&self) -> Self {
        if self.month == 11 {
            if self.year == Self::MAX_YEAR {
                return *self;
            }
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize], self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Anything that can be placed on the calendar.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Returns the entries that fall inside `period`, preserving input order.
pub fn filter_period<T: Dated>(entries: &[T], period: Period) -> Vec<&T> {
    entries
        .iter()
        .filter(|entry| period.contains(entry.date()))
        .collect()
}
