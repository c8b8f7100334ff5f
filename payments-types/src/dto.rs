//! Data Transfer Objects (DTOs) for snapshots and reports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Payment, YearMonth};

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// On-disk payment snapshot.
///
/// Accepts either `{ "payments": [...] }` or a bare array of payments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentSnapshot {
    pub payments: Vec<Payment>,
}

impl PaymentSnapshot {
    /// Parses either snapshot shape, picked by the first non-whitespace byte.
    ///
    /// The chosen shape is decoded directly so errors keep serde_json's line
    /// and column.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        match raw.trim_start().as_bytes().first() {
            Some(b'[') => Ok(Self {
                payments: serde_json::from_str(raw)?,
            }),
            _ => serde_json::from_str(raw),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Report DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregates for one calendar month.
///
/// `regular_total == final_total + discount_total` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub payment_count: usize,
    pub item_count: usize,
    pub regular_total: Decimal,
    pub final_total: Decimal,
    pub discount_total: Decimal,
}

impl MonthlySummary {
    /// A summary with no payments.
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            payment_count: 0,
            item_count: 0,
            regular_total: Decimal::ZERO,
            final_total: Decimal::ZERO,
            discount_total: Decimal::ZERO,
        }
    }
}
