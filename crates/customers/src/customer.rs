use serde::{Deserialize, Serialize};

use creditdesk_core::{Entity, RecordId};
use creditdesk_core::text::contains_ci;

/// Credit customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub RecordId);

impl CustomerId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A customer with a spending ceiling and a running balance.
///
/// Immutable after creation: no operation updates, deletes, or adjusts the
/// balance of an existing customer, so `balance_cents <= credit_limit_cents`
/// holds for the record's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCustomer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Spending ceiling in smallest currency unit (e.g., cents).
    pub credit_limit_cents: u64,
    /// Outstanding balance in smallest currency unit. Zero at creation.
    pub balance_cents: u64,
}

impl CreditCustomer {
    /// Credit still available to this customer.
    pub fn available_credit_cents(&self) -> u64 {
        self.credit_limit_cents.saturating_sub(self.balance_cents)
    }

    /// Search facade predicate: case-insensitive substring on name OR email.
    pub fn matches_term(&self, term: &str) -> bool {
        contains_ci(&self.name, term) || contains_ci(&self.email, term)
    }
}

impl Entity for CreditCustomer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: AddCustomer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCustomer {
    pub name: String,
    pub email: String,
    pub credit_limit_cents: u64,
}
