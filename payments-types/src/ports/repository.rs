//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (InMemory, JSON snapshot) implement this trait.

use crate::domain::Payment;

/// The repository port for payment snapshots.
///
/// Implementations hand out the complete collection and do no filtering.
/// The returned order is the tie-break order for every query that keeps or
/// sorts by repository order, so it must be stable across calls.
pub trait PaymentRepository: Send + Sync + 'static {
    /// Returns every known payment.
    fn find_all(&self) -> Vec<Payment>;
}
