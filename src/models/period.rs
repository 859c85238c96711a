//! Report period representation
//!
//! A report always covers exactly one calendar month. Periods are validated
//! on construction so that a month outside 1-12 can never reach the
//! transaction source.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// What to do when the previous month of January is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RolloverPolicy {
    /// January rolls back to December of the previous year (default)
    #[default]
    RollOver,
    /// Crossing a year boundary is an `InvalidPeriod` error
    Reject,
}

/// A calendar month (e.g. "2025-03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportPeriod {
    /// First day of the month
    start: NaiveDate,
}

impl ReportPeriod {
    /// Create a monthly period, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, ReportError> {
        if !(1..=12).contains(&month) {
            return Err(ReportError::InvalidPeriod(format!(
                "month {} is out of range 1-12",
                month
            )));
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|start| Self { start })
            .ok_or_else(|| ReportError::InvalidPeriod(format!("year {} is out of range", year)))
    }

    /// The period containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: date.with_day(1).unwrap_or(date),
        }
    }

    /// Get the current monthly period
    pub fn current_month() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Get the start date of this period
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Get the end date of this period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Get the immediately preceding calendar month
    ///
    /// Under [`RolloverPolicy::Reject`], asking for the month before January
    /// is an error instead of a December of the previous year.
    pub fn previous(&self, policy: RolloverPolicy) -> Result<Self, ReportError> {
        if self.month() == 1 && policy == RolloverPolicy::Reject {
            return Err(ReportError::InvalidPeriod(format!(
                "previous month of {} crosses a year boundary",
                self
            )));
        }

        self.start
            .checked_sub_months(Months::new(1))
            .map(|start| Self { start })
            .ok_or_else(|| {
                ReportError::InvalidPeriod(format!("no month precedes {}", self))
            })
    }

    /// Parse a period string in "YYYY-MM" format
    pub fn parse(s: &str) -> Result<Self, ReportError> {
        let s = s.trim();
        let invalid = || ReportError::InvalidPeriod(format!("'{}' is not in YYYY-MM format", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for ReportPeriod {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ReportPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ReportPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
