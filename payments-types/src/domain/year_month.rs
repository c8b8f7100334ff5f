//! Calendar month used as a filter key.

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A `(year, month)` pair with no day or time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a YearMonth. `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month a timestamp falls in, read in the timestamp's own offset.
    pub fn of<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Same year and same month as `timestamp`.
    pub fn contains<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        timestamp.year() == self.year && timestamp.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidYearMonth(s.to_string());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_rejects_out_of_range_month() {
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(DomainError::InvalidMonth(13))
        ));
        assert!(matches!(
            YearMonth::new(2024, 0),
            Err(DomainError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 3);
        assert_eq!(ym.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(matches!(
            "march".parse::<YearMonth>(),
            Err(DomainError::InvalidYearMonth(_))
        ));
        assert!(matches!(
            "2024-xx".parse::<YearMonth>(),
            Err(DomainError::InvalidYearMonth(_))
        ));
    }

    #[test]
    fn test_month_is_read_in_local_offset() {
        // March 31st 22:30 in UTC.
        let april_local: DateTime<FixedOffset> =
            DateTime::parse_from_rfc3339("2024-04-01T00:30:00+02:00").unwrap();
        assert_eq!(YearMonth::of(&april_local), YearMonth::new(2024, 4).unwrap());
        assert!(YearMonth::new(2024, 4).unwrap().contains(&april_local));
        assert!(!YearMonth::new(2024, 3).unwrap().contains(&april_local));
    }

    #[test]
    fn test_same_month_other_year_does_not_match() {
        let ts = DateTime::parse_from_rfc3339("2023-03-15T10:00:00Z").unwrap();
        assert!(!YearMonth::new(2024, 3).unwrap().contains(&ts));
    }

    #[test]
    fn test_serde_as_string() {
        let ym = YearMonth::new(2024, 7).unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"2024-07\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);
    }
}
