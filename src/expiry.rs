//! Expiry month/year selection.
//!
//! The form offers a year picker covering the current year and the next
//! few, and a month picker whose past months are disabled while the
//! current year is selected. A chosen month is never corrected: changing
//! the year only changes which options are disabled.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{min_valid_month, month_options, year_options};
//!
//! assert_eq!(min_valid_month(2026, 2026, 10), 10);
//! assert_eq!(min_valid_month(2027, 2026, 10), 1);
//!
//! let months = month_options(10);
//! assert_eq!(months[0].value, "01");
//! assert!(months[8].disabled);   // September
//! assert!(!months[9].disabled);  // October
//!
//! assert_eq!(year_options(2026, 12).last(), Some(&2037));
//! ```

use chrono::Datelike;
use std::fmt;

/// Number of years the year picker offers by default.
pub const DEFAULT_YEAR_SPAN: u16 = 12;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    // field order gives chronological Ord
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Creates a year-month. Returns `None` unless `month` is 1-12.
    pub fn new(year: u16, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// The current month in the local time zone.
    pub fn today() -> Self {
        let now = chrono::Local::now();
        Self {
            year: u16::try_from(now.year()).unwrap_or(u16::MAX),
            month: now.month() as u8,
        }
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Returns the first month that may be selected for `selected_year`.
///
/// `current_month` while the current year is selected, otherwise 1.
#[inline]
pub fn min_valid_month(selected_year: u16, current_year: u16, current_month: u8) -> u8 {
    if selected_year == current_year {
        current_month.clamp(1, 12)
    } else {
        1
    }
}

/// An entry of the month picker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthOption {
    /// Month number, 1-12.
    pub month: u8,
    /// Two-digit value submitted by the picker (`"01"`..`"12"`).
    pub value: String,
    /// True for months before the minimum selectable month.
    pub disabled: bool,
}

/// Builds the twelve month options, disabling those before `min_month`.
pub fn month_options(min_month: u8) -> Vec<MonthOption> {
    (1..=12u8)
        .map(|month| MonthOption {
            month,
            value: format!("{:02}", month),
            disabled: month < min_month,
        })
        .collect()
}

/// Returns `span` consecutive years starting at `current_year`.
pub fn year_options(current_year: u16, span: u16) -> Vec<u16> {
    (0..span)
        .map_while(|offset| current_year.checked_add(offset))
        .collect()
}

/// Parses a picker month value (`"7"` or `"07"`).
pub fn parse_month(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|m| (1..=12).contains(m))
}

/// Parses a four-digit picker year value.
pub fn parse_year(value: &str) -> Option<u16> {
    let value = value.trim();
    if value.len() != 4 {
        return None;
    }
    value.parse().ok()
}

/// Two-digit form of a year value for the card preview (`"2031"` to `"31"`).
pub fn short_year(value: &str) -> String {
    value.chars().skip(2).collect()
}
