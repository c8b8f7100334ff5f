//! # Payments Types
//!
//! Domain types and port traits for the payment query service.
//! This crate has ZERO IO dependencies - only data structures,
//! small value rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain values (Payment, PaymentItem, User, YearMonth)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for snapshots and reports
//! - `error/` - Domain and repository error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId, PaymentItem, User, YearMonth};
pub use dto::*;
pub use error::{DomainError, RepoError};
pub use ports::{DateTimeProvider, PaymentRepository};
