//! Configuration resolved from flags and environment.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

use payments_repo::{FixedClock, SystemClock};
use payments_types::{DateTimeProvider, YearMonth};

/// Clock chosen at start-up: pinned when `--now` is given, wall clock otherwise.
#[derive(Debug, Clone, Copy)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl DateTimeProvider for AppClock {
    fn current_year_month(&self) -> YearMonth {
        match self {
            AppClock::System(clock) => clock.current_year_month(),
            AppClock::Fixed(clock) => clock.current_year_month(),
        }
    }

    fn current_timestamp(&self) -> DateTime<FixedOffset> {
        match self {
            AppClock::System(clock) => clock.current_timestamp(),
            AppClock::Fixed(clock) => clock.current_timestamp(),
        }
    }
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub snapshot: PathBuf,
    pub clock: AppClock,
    pub json_logs: bool,
}

impl Config {
    /// Builds the configuration from already-parsed arguments.
    pub fn new(snapshot: PathBuf, now: Option<&str>, json_logs: bool) -> anyhow::Result<Self> {
        let clock = match now {
            Some(raw) => AppClock::Fixed(
                FixedClock::parse(raw)
                    .with_context(|| format!("invalid --now '{raw}', expected RFC 3339"))?,
            ),
            None => AppClock::System(SystemClock),
        };

        Ok(Self {
            snapshot,
            clock,
            json_logs,
        })
    }
}
