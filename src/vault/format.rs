//! Path format tables and the periodic-note path schema.
//!
//! Each period has a fixed basename pattern (`20240115`, `2024-W03`,
//! `202401`, `2024-Q1`, `2024`) and an optional year-grouping folder.
//! Classification parses a vault-relative path strictly against these
//! patterns in priority order and accepts a candidate only if re-rendering
//! the path for the parsed date reproduces the input byte for byte.

use crate::domain::Period;
use chrono::{Datelike, NaiveDate, Weekday};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// The strict basename format for one period.
///
/// `pattern` is the human-readable form shown in diagnostics; parsing goes
/// through an anchored regex plus a calendar-validating constructor, so
/// structurally well-formed but impossible dates (month 13, ISO week 54)
/// are "no match" rather than errors.
#[derive(Clone)]
pub struct PeriodFormat {
    pattern: &'static str,
    regex: Regex,
    parse: fn(&Captures) -> Option<NaiveDate>,
    render: fn(NaiveDate) -> String,
}

impl PeriodFormat {
    fn new(
        pattern: &'static str,
        regex: &str,
        parse: fn(&Captures) -> Option<NaiveDate>,
        render: fn(NaiveDate) -> String,
    ) -> Self {
        Self {
            pattern,
            regex: Regex::new(regex).expect("period format regex must compile"),
            parse,
            render,
        }
    }

    /// Returns the human-readable pattern, e.g. `YYYYMMDD`.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Parses a basename strictly against this format.
    ///
    /// Returns `None` on any partial match or invalid calendar value.
    pub fn parse(&self, basename: &str) -> Option<NaiveDate> {
        let caps = self.regex.captures(basename)?;
        (self.parse)(&caps)
    }

    /// Renders the basename for a date.
    pub fn render(&self, date: NaiveDate) -> String {
        (self.render)(date)
    }
}

/// The closed mapping from period to basename format.
///
/// Production code uses [`FormatTable::standard`]; a custom table can be
/// built to exercise pattern-collision behavior.
#[derive(Clone)]
pub struct FormatTable {
    date: PeriodFormat,
    week: PeriodFormat,
    month: PeriodFormat,
    quarter: PeriodFormat,
    year: PeriodFormat,
}

fn capture_u32(caps: &Captures, i: usize) -> Option<u32> {
    caps.get(i)?.as_str().parse().ok()
}

fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

static STANDARD: LazyLock<FormatTable> = LazyLock::new(|| FormatTable {
    date: PeriodFormat::new(
        "YYYYMMDD",
        r"^(\d{4})(\d{2})(\d{2})$",
        |caps| {
            NaiveDate::from_ymd_opt(
                capture_u32(caps, 1)? as i32,
                capture_u32(caps, 2)?,
                capture_u32(caps, 3)?,
            )
        },
        |date| date.format("%Y%m%d").to_string(),
    ),
    week: PeriodFormat::new(
        "YYYY-[W]ww",
        r"^(\d{4})-W(\d{2})$",
        |caps| {
            NaiveDate::from_isoywd_opt(
                capture_u32(caps, 1)? as i32,
                capture_u32(caps, 2)?,
                Weekday::Mon,
            )
        },
        |date| {
            let iso = date.iso_week();
            format!("{:04}-W{:02}", iso.year(), iso.week())
        },
    ),
    month: PeriodFormat::new(
        "YYYYMM",
        r"^(\d{4})(\d{2})$",
        |caps| {
            NaiveDate::from_ymd_opt(capture_u32(caps, 1)? as i32, capture_u32(caps, 2)?, 1)
        },
        |date| date.format("%Y%m").to_string(),
    ),
    quarter: PeriodFormat::new(
        "YYYY-[Q]q",
        r"^(\d{4})-Q([1-4])$",
        |caps| {
            let month = (capture_u32(caps, 2)? - 1) * 3 + 1;
            NaiveDate::from_ymd_opt(capture_u32(caps, 1)? as i32, month, 1)
        },
        |date| format!("{:04}-Q{}", date.year(), quarter_of(date)),
    ),
    year: PeriodFormat::new(
        "YYYY",
        r"^(\d{4})$",
        |caps| NaiveDate::from_ymd_opt(capture_u32(caps, 1)? as i32, 1, 1),
        |date| date.format("%Y").to_string(),
    ),
});

impl FormatTable {
    /// Returns the fixed production table.
    pub fn standard() -> &'static FormatTable {
        &STANDARD
    }

    /// Builds a table with one period's format replaced.
    ///
    /// Exists so tests can force two periods onto the same pattern and
    /// observe priority resolution.
    pub fn with_format(&self, period: Period, format: PeriodFormat) -> FormatTable {
        let mut table = self.clone();
        match period {
            Period::Date => table.date = format,
            Period::Week => table.week = format,
            Period::Month => table.month = format,
            Period::Quarter => table.quarter = format,
            Period::Year => table.year = format,
        }
        table
    }

    /// Returns the format for a period.
    pub fn get(&self, period: Period) -> &PeriodFormat {
        match period {
            Period::Date => &self.date,
            Period::Week => &self.week,
            Period::Month => &self.month,
            Period::Quarter => &self.quarter,
            Period::Year => &self.year,
        }
    }
}

/// Schema mapping periodic notes to vault-relative paths and back.
///
/// Paths compose as `periodic_folder / [year_group /] basename.md`, where
/// the year-group folder is present only when grouping is enabled. Weeks
/// group by ISO week-year; other periods by calendar year.
#[derive(Clone)]
pub struct PathSchema {
    periodic_folder: PathBuf,
    group_by_year: bool,
    table: FormatTable,
}

impl PathSchema {
    /// Creates a schema over the standard format table.
    pub fn new(periodic_folder: impl Into<PathBuf>, group_by_year: bool) -> Self {
        Self::with_table(periodic_folder, group_by_year, FormatTable::standard().clone())
    }

    /// Creates a schema with a custom format table.
    pub fn with_table(
        periodic_folder: impl Into<PathBuf>,
        group_by_year: bool,
        table: FormatTable,
    ) -> Self {
        Self {
            periodic_folder: periodic_folder.into(),
            group_by_year,
            table,
        }
    }

    /// Returns the vault-relative root folder for periodic notes.
    pub fn periodic_folder(&self) -> &Path {
        &self.periodic_folder
    }

    /// Returns the format table in use.
    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    /// Renders the vault-relative path for a period and date.
    pub fn format_path(&self, period: Period, date: NaiveDate) -> PathBuf {
        let mut path = self.periodic_folder.clone();
        if self.group_by_year {
            path.push(period.year_group(date));
        }
        path.push(format!("{}.md", self.table.get(period).render(date)));
        path
    }

    /// Classifies a vault-relative path as a periodic note.
    ///
    /// Tries periods in [`Period::PRIORITY`] order; for each, the basename
    /// is parsed strictly and the candidate is accepted only when
    /// [`format_path`](Self::format_path) for the parsed date reproduces
    /// the input path exactly. The render-back check enforces the folder
    /// prefix, the year-group folder, and full-pattern matching in one
    /// step. Returns `None` when no period matches.
    pub fn classify(&self, path: &Path) -> Option<(Period, NaiveDate)> {
        if path.extension().is_none_or(|ext| ext != "md") {
            return None;
        }
        let basename = path.file_stem()?.to_str()?;

        for period in Period::PRIORITY {
            if let Some(date) = self.table.get(period).parse(basename) {
                if self.format_path(period, date) == path {
                    return Some((period, date));
                }
            }
        }
        None
    }
}
