//! # Payments Query
//!
//! Read-only query and aggregation service for payment snapshots.
//!
//! The service is generic over `R: PaymentRepository` and
//! `C: DateTimeProvider`, allowing different snapshot sources and clocks
//! to be injected.

pub mod service;


pub use service::PaymentQueryService;
