//! # Payments Repository
//!
//! Concrete adapters for the payment query service.
//! This crate provides snapshot sources that implement the `PaymentRepository`
//! port and clocks that implement the `DateTimeProvider` port.

use std::path::Path;

use payments_types::RepoError;

pub mod clock;
pub mod json;
pub mod memory;

#[cfg(test)]
mod json_tests;

pub use clock::{FixedClock, SystemClock};
pub use json::JsonSnapshotRepo;
pub use memory::InMemoryRepo;

/// Load a repository from a JSON snapshot file.
///
/// The file is read and parsed once; every later `find_all` serves the
/// parsed payments in file order.
///
/// # Examples
///
/// ```ignore
/// let repo = load_snapshot("payments.json")?;
/// let service = PaymentQueryService::new(repo, SystemClock);
/// ```
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<JsonSnapshotRepo, RepoError> {
    JsonSnapshotRepo::open(path)
}
