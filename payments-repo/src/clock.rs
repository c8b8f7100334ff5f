//! Clock adapters for the `DateTimeProvider` port.

use chrono::{DateTime, FixedOffset, Local};

use payments_types::{DateTimeProvider, YearMonth};

/// Wall clock in the machine's local offset.
///
/// The offset in force at the moment of the call is pinned, so "last N days"
/// windows are N spans of 24 hours even when a DST change falls inside them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateTimeProvider for SystemClock {
    fn current_year_month(&self) -> YearMonth {
        YearMonth::of(&self.current_timestamp())
    }

    fn current_timestamp(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Parses an RFC 3339 timestamp such as `2024-03-20T12:00:00+01:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self::new)
    }
}

impl DateTimeProvider for FixedClock {
    fn current_year_month(&self) -> YearMonth {
        YearMonth::of(&self.now)
    }

    fn current_timestamp(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_month_follows_its_offset() {
        // Still April 30th in UTC.
        let clock = FixedClock::parse("2024-05-01T01:00:00+03:00").unwrap();
        assert_eq!(clock.current_year_month(), YearMonth::new(2024, 5).unwrap());
        assert_eq!(
            clock.current_timestamp(),
            DateTime::parse_from_rfc3339("2024-04-30T22:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_fixed_clock_rejects_bad_timestamp() {
        assert!(FixedClock::parse("yesterday").is_err());
    }

    #[test]
    fn test_system_clock_month_matches_timestamp() {
        let clock = SystemClock;
        let before = clock.current_year_month();
        let now = clock.current_timestamp();
        let after = clock.current_year_month();
        assert!(before == YearMonth::of(&now) || after == YearMonth::of(&now));
    }
}
