use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use creditdesk_core::{Entity, RecordId};
use creditdesk_core::text::{contains_ci, format_cents, long_date};

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub RecordId);

impl InvoiceId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice status lifecycle.
///
/// Created as `Pending`; changed only through the explicit transition command,
/// never derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        };
        f.write_str(s)
    }
}

/// Target of the status-transition command. `Pending` is the creation status
/// only and is not a valid transition target, so it is absent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceResolution {
    Paid,
    Overdue,
}

impl From<InvoiceResolution> for InvoiceStatus {
    fn from(resolution: InvoiceResolution) -> Self {
        match resolution {
            InvoiceResolution::Paid => InvoiceStatus::Paid,
            InvoiceResolution::Overdue => InvoiceStatus::Overdue,
        }
    }
}

/// A billable obligation tied to a customer name.
///
/// `customer_name` is free text, not a reference into the customer ledger; the
/// two collections are deliberately not linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_name: String,
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: u64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Search facade predicate: OR across name (case-insensitive), amount as
    /// decimal text, and the due date in its long display form.
    pub fn matches_term(&self, term: &str) -> bool {
        contains_ci(&self.customer_name, term)
            || format_cents(self.amount_cents).contains(term)
            || contains_ci(&long_date(self.due_date), term)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: CreateInvoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvoice {
    pub customer_name: String,
    pub amount_cents: u64,
    pub due_date: NaiveDate,
}
