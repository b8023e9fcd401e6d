use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use creditdesk_core::{Entity, RecordId};
use creditdesk_core::text::{contains_ci, format_cents};

/// Payment reminder identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(pub RecordId);

impl ReminderId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReminderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Stored reminder status.
///
/// Distinct from the derived overdue flag: a record can sit at `Pending` while
/// already past its due date. Views that care about actionability use
/// [`PaymentReminder::is_effectively_overdue`], not this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Overdue,
}

impl core::fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ReminderStatus::Pending => "Pending",
            ReminderStatus::Sent => "Sent",
            ReminderStatus::Overdue => "Overdue",
        };
        f.write_str(s)
    }
}

/// A record tracking whether a customer has been prompted about an upcoming
/// or missed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReminder {
    pub id: ReminderId,
    pub customer_name: String,
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: u64,
    pub due_date: NaiveDate,
    pub status: ReminderStatus,
}

impl PaymentReminder {
    /// Build a reminder with a fresh id, for seeding the queue.
    pub fn new(
        customer_name: impl Into<String>,
        amount_cents: u64,
        due_date: NaiveDate,
        status: ReminderStatus,
    ) -> Self {
        Self {
            id: ReminderId::new(RecordId::new()),
            customer_name: customer_name.into(),
            amount_cents,
            due_date,
            status,
        }
    }

    /// The authoritative "is this actionable" predicate.
    ///
    /// True when the stored status says overdue OR the clock has passed the
    /// start of the due day, independent of the stored status. A reminder
    /// therefore counts as effectively overdue from the first instant of its
    /// due date.
    pub fn is_effectively_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == ReminderStatus::Overdue || now > self.due_start()
    }

    fn due_start(&self) -> DateTime<Utc> {
        self.due_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Search facade predicate: OR across name (case-insensitive), amount as
    /// decimal text, and the due date in raw ISO form (`2023-07-05`).
    ///
    /// The date is matched against the ISO form, not the long display form the
    /// invoice facade uses.
    pub fn matches_term(&self, term: &str) -> bool {
        contains_ci(&self.customer_name, term)
            || format_cents(self.amount_cents).contains(term)
            || self.due_date.to_string().contains(term)
    }
}

impl Entity for PaymentReminder {
    type Id = ReminderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
