use serde::{Deserialize, Serialize};

use creditdesk_core::DomainError;
use creditdesk_customers::CreditCustomer;
use creditdesk_invoicing::Invoice;

/// How the calling layer should style a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// A non-blocking, user-facing notification describing a command outcome.
///
/// The core never displays anything itself; the presentation layer renders
/// these verbatim (toast, banner, log line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    pub fn customer_added(customer: &CreditCustomer) -> Self {
        Self::info(
            "Customer Added",
            format!(
                "{} has been added to the credit customers list.",
                customer.name
            ),
        )
    }

    pub fn invoice_created(invoice: &Invoice) -> Self {
        Self::info(
            "Invoice Created",
            format!("Invoice for {} has been created.", invoice.customer_name),
        )
    }

    pub fn invoice_updated(invoice: &Invoice) -> Self {
        Self::info(
            "Invoice Updated",
            format!("Invoice status has been updated to {}.", invoice.status),
        )
    }

    pub fn reminder_sent() -> Self {
        Self::info(
            "Reminder Sent",
            "Payment reminder has been sent to the customer.",
        )
    }
}

impl From<&DomainError> for Notice {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(_) | DomainError::InvalidId(_) => Self::error(
                "Invalid Input",
                "Please fill in all fields with valid information.",
            ),
            DomainError::NotFound => {
                Self::error("Not Found", "No record with that id exists.")
            }
        }
    }
}
