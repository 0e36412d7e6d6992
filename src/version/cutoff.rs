//! Cutoff instant that separates safe uploads from unsafe ones

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::config::{DATE_FORMATS, DEFAULT_CUTOFF_DATE};

const END_OF_DAY: NaiveTime = NaiveTime::from_hms_opt(23, 59, 59).unwrap();

/// The last instant (23:59:59) of a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cutoff(NaiveDateTime);

impl Cutoff {
    /// Cutoff at the end of the given day
    pub fn end_of_day(date: NaiveDate) -> Self {
        Self(date.and_time(END_OF_DAY))
    }

    /// Parse a date using the accepted formats, first match wins
    ///
    /// Examples:
    /// - "23/02/2022" -> 2022-02-23T23:59:59
    /// - "2022.02.23" -> 2022-02-23T23:59:59
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .map(Self::end_of_day)
    }

    /// Parse a date, falling back to the default cutoff with a warning
    pub fn parse_or_default(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|| {
            warn!("Cannot parse date - {}", input);
            let cutoff = Self::default();
            warn!("Setting default date - {}", cutoff);
            cutoff
        })
    }

    /// Whether an upload at `uploaded_at` happened strictly before the cutoff
    pub fn admits(&self, uploaded_at: NaiveDateTime) -> bool {
        self.0 > uploaded_at
    }
}

impl Default for Cutoff {
    fn default() -> Self {
        Self::end_of_day(DEFAULT_CUTOFF_DATE)
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
