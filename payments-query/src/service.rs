//! Payment Query Service
//!
//! Read-only queries and aggregations over the repository snapshot.
//! Contains NO infrastructure logic - every call re-reads the full
//! collection through the repository port and returns a fresh result.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::TimeDelta;
use rust_decimal::Decimal;

use payments_types::{
    DateTimeProvider, MonthlySummary, Payment, PaymentItem, PaymentRepository, YearMonth,
};

/// Later payments first. Equal instants compare equal so a stable sort keeps
/// repository order.
fn by_date_desc(a: &Payment, b: &Payment) -> Ordering {
    b.payment_date.cmp(&a.payment_date)
}

/// Query service over payment snapshots.
///
/// Sums use exact `Decimal` addition and panic if a total exceeds
/// `Decimal::MAX` (about 7.9e28).
///
/// Generic over `R: PaymentRepository` and `C: DateTimeProvider` - both
/// adapters are injected at compile time. This enables:
/// - Swapping the snapshot source without code changes
/// - Testing with an in-memory repo and a pinned clock
pub struct PaymentQueryService<R: PaymentRepository, C: DateTimeProvider> {
    repo: R,
    clock: C,
}

impl<R: PaymentRepository, C: DateTimeProvider> PaymentQueryService<R, C> {
    /// Creates a new query service with the given repository and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    fn payments_in(&self, month: YearMonth) -> impl Iterator<Item = Payment> {
        self.repo
            .find_all()
            .into_iter()
            .filter(move |payment| month.contains(&payment.payment_date))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────────

    /// All payments, newest first.
    #[tracing::instrument(skip(self))]
    pub fn find_payments_sorted_by_date_desc(&self) -> Vec<Payment> {
        let mut payments = self.repo.find_all();
        payments.sort_by(by_date_desc);
        tracing::debug!(count = payments.len(), "sorted payments");
        payments
    }

    /// Payments in the clock's current month, in repository order.
    #[tracing::instrument(skip(self))]
    pub fn find_payments_for_current_month(&self) -> Vec<Payment> {
        let month = self.clock.current_year_month();
        self.find_payments_for_given_month(month)
    }

    /// Payments in `month`, in repository order.
    #[tracing::instrument(skip(self, month), fields(%month))]
    pub fn find_payments_for_given_month(&self, month: YearMonth) -> Vec<Payment> {
        let payments: Vec<Payment> = self.payments_in(month).collect();
        tracing::debug!(count = payments.len(), "payments in month");
        payments
    }

    /// Payments dated strictly after `now - days`.
    ///
    /// A payment exactly `days` old is excluded. If the cutoff lies outside
    /// the representable date range every payment qualifies.
    #[tracing::instrument(skip(self))]
    pub fn find_payments_for_last_days(&self, days: u32) -> Vec<Payment> {
        let now = self.clock.current_timestamp();
        let cutoff =
            TimeDelta::try_days(i64::from(days)).and_then(|span| now.checked_sub_signed(span));

        let payments: Vec<Payment> = self
            .repo
            .find_all()
            .into_iter()
            .filter(|payment| cutoff.is_none_or(|cutoff| payment.payment_date > cutoff))
            .collect();
        tracing::debug!(count = payments.len(), ?cutoff, "payments in window");
        payments
    }

    /// Payments carrying exactly one item.
    #[tracing::instrument(skip(self))]
    pub fn find_payments_with_one_item(&self) -> HashSet<Payment> {
        self.repo
            .find_all()
            .into_iter()
            .filter(|payment| payment.item_count() == 1)
            .collect()
    }

    /// Distinct product names sold in the clock's current month.
    #[tracing::instrument(skip(self))]
    pub fn find_products_sold_in_current_month(&self) -> HashSet<String> {
        let month = self.clock.current_year_month();
        self.payments_in(month)
            .flat_map(|payment| payment.items)
            .map(|item| item.name)
            .collect()
    }

    /// Every item bought by the user whose email matches exactly.
    #[tracing::instrument(skip(self))]
    pub fn find_items_for_user_with_email(&self, email: &str) -> Vec<PaymentItem> {
        let items: Vec<PaymentItem> = self
            .repo
            .find_all()
            .into_iter()
            .filter(|payment| payment.user.email == email)
            .flat_map(|payment| payment.items)
            .collect();
        tracing::debug!(count = items.len(), "items for user");
        items
    }

    /// Payments whose final-price total is strictly greater than `value`.
    #[tracing::instrument(skip(self))]
    pub fn find_payments_with_value_over(&self, value: i64) -> HashSet<Payment> {
        let threshold = Decimal::from(value);
        self.repo
            .find_all()
            .into_iter()
            .filter(|payment| payment.total_final_price() > threshold)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Monthly Aggregates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sum of final prices over every item sold in `month`.
    #[tracing::instrument(skip(self, month), fields(%month))]
    pub fn sum_total_for_given_month(&self, month: YearMonth) -> Decimal {
        self.payments_in(month)
            .flat_map(|payment| payment.items)
            .fold(Decimal::ZERO, |acc, item| acc + item.final_price)
    }

    /// Sum of `regular_price - final_price` over every item sold in `month`.
    #[tracing::instrument(skip(self, month), fields(%month))]
    pub fn sum_discount_for_given_month(&self, month: YearMonth) -> Decimal {
        self.payments_in(month)
            .flat_map(|payment| payment.items)
            .fold(Decimal::ZERO, |acc, item| acc + item.discount())
    }

    /// Sum of regular prices over every item sold in `month`.
    #[tracing::instrument(skip(self, month), fields(%month))]
    pub fn sum_regular_for_given_month(&self, month: YearMonth) -> Decimal {
        self.payments_in(month)
            .flat_map(|payment| payment.items)
            .fold(Decimal::ZERO, |acc, item| acc + item.regular_price)
    }

    /// Counts and totals for `month` from a single snapshot read.
    #[tracing::instrument(skip(self, month), fields(%month))]
    pub fn monthly_summary(&self, month: YearMonth) -> MonthlySummary {
        let summary = self
            .payments_in(month)
            .fold(MonthlySummary::empty(month), |mut acc, payment| {
                acc.payment_count += 1;
                for item in &payment.items {
                    acc.item_count += 1;
                    acc.regular_total += item.regular_price;
                    acc.final_total += item.final_price;
                    acc.discount_total += item.discount();
                }
                acc
            });
        tracing::debug!(
            payments = summary.payment_count,
            items = summary.item_count,
            "monthly summary"
        );
        summary
    }
}
