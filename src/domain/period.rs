//! Period enum for calendar-keyed notes.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar period that a periodic note can be keyed by.
///
/// Every periodic note carries exactly one `Period` together with a calendar
/// date truncated to midnight. Unique (non-periodic) notes are represented by
/// [`NoteKind::Unique`](crate::domain::NoteKind), not by a `Period` value, so
/// matches over `Period` stay exhaustive over the five calendar cases.
///
/// # Examples
///
/// ```
/// use almanac::domain::Period;
///
/// let period: Period = "week".parse().unwrap();
/// assert_eq!(period, Period::Week);
/// assert_eq!(period.to_string(), "week");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// A single calendar day.
    Date,
    /// An ISO week (keyed by the Monday of the week).
    Week,
    /// A calendar month (keyed by the first of the month).
    Month,
    /// A calendar quarter (keyed by the first day of the quarter).
    Quarter,
    /// A calendar year (keyed by January 1st).
    Year,
}

/// Error returned when parsing an unknown period name.
#[derive(Debug, Clone)]
pub struct ParsePeriodError(String);

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown period '{}': expected one of date, week, month, quarter, year",
            self.0
        )
    }
}

impl std::error::Error for ParsePeriodError {}

impl Period {
    /// Classification priority order, most specific pattern first.
    ///
    /// Classification tries each period's pattern in this order and accepts
    /// the first strict match, so a basename that could structurally satisfy
    /// two patterns resolves to the earlier period.
    pub const PRIORITY: [Period; 5] = [
        Period::Date,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];

    /// Returns the lowercase period name used in paths, templates, and CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Period::Date => "date",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Renders the year-grouping folder name for a date of this period.
    ///
    /// Weeks group by ISO week-year so that e.g. 2024-12-30 (ISO week 1 of
    /// 2025) lands in the `2025` folder next to its week note. All other
    /// periods group by plain calendar year.
    pub fn year_group(&self, date: NaiveDate) -> String {
        use chrono::Datelike;
        match self {
            Period::Week => format!("{:04}", date.iso_week().year()),
            _ => format!("{:04}", date.year()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "day" | "daily" => Ok(Period::Date),
            "week" | "weekly" => Ok(Period::Week),
            "month" | "monthly" => Ok(Period::Month),
            "quarter" | "quarterly" => Ok(Period::Quarter),
            "year" | "yearly" => Ok(Period::Year),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}
