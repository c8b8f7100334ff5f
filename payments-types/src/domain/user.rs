//! User domain model.

use serde::{Deserialize, Serialize};

/// The purchaser attached to a payment.
///
/// `email` is matched exactly (case-sensitive) when looking up a user's items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}
