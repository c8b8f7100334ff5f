//! Payment domain model.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Unique identifier for a Payment, assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One product line within a payment.
///
/// Prices are exact decimals. `final_price <= regular_price` holds for
/// well-formed data but is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentItem {
    pub name: String,
    pub regular_price: Decimal,
    pub final_price: Decimal,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, regular_price: Decimal, final_price: Decimal) -> Self {
        Self {
            name: name.into(),
            regular_price,
            final_price,
        }
    }

    /// Amount knocked off the regular price.
    pub fn discount(&self) -> Decimal {
        self.regular_price - self.final_price
    }
}

/// A recorded purchase.
///
/// Equality and hashing cover every field, so a payment the repository
/// yields twice collapses to one entry in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    /// Missing ids in a snapshot get a fresh one on load.
    #[serde(default)]
    pub id: PaymentId,
    pub payment_date: DateTime<FixedOffset>,
    pub user: User,
    pub items: Vec<PaymentItem>,
}

impl Payment {
    /// Creates a payment with a fresh id.
    pub fn new(payment_date: DateTime<FixedOffset>, user: User, items: Vec<PaymentItem>) -> Self {
        Self {
            id: PaymentId::new(),
            payment_date,
            user,
            items,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of final prices across all items.
    ///
    /// Panics if the sum exceeds `Decimal::MAX` (about 7.9e28).
    pub fn total_final_price(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.final_price)
    }

    /// Sum of regular prices across all items.
    ///
    /// Panics if the sum exceeds `Decimal::MAX` (about 7.9e28).
    pub fn total_regular_price(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.regular_price)
    }
}
