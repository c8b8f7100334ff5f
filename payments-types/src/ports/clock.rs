//! Time provider port.

use chrono::{DateTime, FixedOffset};

use crate::domain::YearMonth;

/// Supplies "now" to the query service.
///
/// Injected so tests can pin the current instant.
pub trait DateTimeProvider: Send + Sync + 'static {
    /// The calendar month considered current.
    fn current_year_month(&self) -> YearMonth;

    /// The instant considered current, with its offset.
    fn current_timestamp(&self) -> DateTime<FixedOffset>;
}
