use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::constants::dates::{MONTH_ABBREVIATIONS, RAW_DATE_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("expected 8 characters (YYYYMMDD), got {0:?}")]
    WrongLength(String),
    #[error("date must be all digits (YYYYMMDD), got {0:?}")]
    NonNumeric(String),
    #[error("month {month} out of range 1-12 in {raw:?}")]
    MonthOutOfRange { raw: String, month: u8 },
}

/// A record's issue date, decoded from `YYYYMMDD`.
///
/// `Ord` is chronological. `Display` gives the `DD-Mon-YY` label, and the
/// labels sort lexically, which is NOT chronological.
/// The day digits are carried as written; only the month is range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueDate {
    year: u16,
    month: u8,
    day: u8,
}

impl IssueDate {
    pub fn parse(raw: &str) -> Result<Self, DateFormatError> {
        if raw.chars().count() != RAW_DATE_LEN {
            return Err(DateFormatError::WrongLength(raw.to_string()));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateFormatError::NonNumeric(raw.to_string()));
        }

        // All ASCII digits from here, so byte slicing is safe and the values fit
        let year = digits_value(&raw[0..4]) as u16;
        let month = digits_value(&raw[4..6]) as u8;
        let day = digits_value(&raw[6..8]) as u8;

        if !(1..=12).contains(&month) {
            return Err(DateFormatError::MonthOutOfRange {
                raw: raw.to_string(),
                month,
            });
        }

        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[usize::from(self.month - 1)]
    }

    /// `DD-Mon-YY`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}-{}-{:02}",
            self.day,
            self.month_abbreviation(),
            self.year % 100
        )
    }
}

impl FromStr for IssueDate {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Convert `YYYYMMDD` into its `DD-Mon-YY` display form.
pub fn normalize_date(raw: &str) -> Result<String, DateFormatError> {
    IssueDate::parse(raw).map(|date| date.label())
}
