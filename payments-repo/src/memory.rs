//! In-memory repository adapter.

use payments_types::{Payment, PaymentRepository};

/// Repository backed by a plain vector, served in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepo {
    payments: Vec<Payment>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a payment to the end of the snapshot.
    pub fn push(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl From<Vec<Payment>> for InMemoryRepo {
    fn from(payments: Vec<Payment>) -> Self {
        Self { payments }
    }
}

impl FromIterator<Payment> for InMemoryRepo {
    fn from_iter<I: IntoIterator<Item = Payment>>(iter: I) -> Self {
        Self {
            payments: iter.into_iter().collect(),
        }
    }
}

impl PaymentRepository for InMemoryRepo {
    fn find_all(&self) -> Vec<Payment> {
        self.payments.clone()
    }
}
