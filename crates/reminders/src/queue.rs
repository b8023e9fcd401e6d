use chrono::{DateTime, Utc};

use creditdesk_core::{DomainError, DomainResult, InMemoryRecordStore, RecordStore};

use crate::reminder::{PaymentReminder, ReminderId, ReminderStatus};

/// Reminder Scheduler: owns the payment-reminder collection.
///
/// There is no per-record creation command; the collection is bulk-seeded
/// (fixture loading today, ingestion from the invoice lifecycle in a future
/// wiring). Generic over the backing store; defaults to the in-memory,
/// insertion-ordered store.
pub struct ReminderQueue<S = InMemoryRecordStore<ReminderId, PaymentReminder>>
where
    S: RecordStore<ReminderId, PaymentReminder>,
{
    store: S,
}

impl ReminderQueue {
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::new())
    }
}

impl Default for ReminderQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ReminderQueue<S>
where
    S: RecordStore<ReminderId, PaymentReminder>,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Bulk-initialize the collection, preserving the given order. A record
    /// whose id is already present is replaced in place.
    pub fn seed(&self, records: impl IntoIterator<Item = PaymentReminder>) {
        for reminder in records {
            self.store.upsert(reminder.id, reminder);
        }
    }

    /// Mark a reminder as sent.
    ///
    /// Idempotent at the core level: sending an already-`Sent` reminder leaves
    /// state unchanged and returns the existing record, not an error. The
    /// "sending" here is a logical transition only; delivery belongs to an
    /// external collaborator.
    pub fn send(&self, id: ReminderId) -> DomainResult<PaymentReminder> {
        let mut reminder = self.store.get(&id).ok_or_else(DomainError::not_found)?;
        if reminder.status == ReminderStatus::Sent {
            return Ok(reminder);
        }
        reminder.status = ReminderStatus::Sent;
        self.store.upsert(id, reminder.clone());
        Ok(reminder)
    }

    pub fn get(&self, id: ReminderId) -> Option<PaymentReminder> {
        self.store.get(&id)
    }

    /// Read-only search view: OR across customer name, amount text, and the
    /// raw ISO due date. Empty term matches all; insertion order preserved.
    pub fn search(&self, term: &str) -> Vec<PaymentReminder> {
        self.store
            .list()
            .into_iter()
            .filter(|reminder| reminder.matches_term(term))
            .collect()
    }

    /// The searched view narrowed to records whose STORED status is pending.
    ///
    /// Note this filters on the stored field only: a pending-stored, past-due
    /// record shows up here AND in [`Self::overdue`]. The two partitions
    /// intentionally overlap.
    pub fn pending(&self, term: &str) -> Vec<PaymentReminder> {
        self.search(term)
            .into_iter()
            .filter(|reminder| reminder.status == ReminderStatus::Pending)
            .collect()
    }

    /// The searched view narrowed by the derived overdue predicate.
    pub fn overdue(&self, term: &str, now: DateTime<Utc>) -> Vec<PaymentReminder> {
        self.search(term)
            .into_iter()
            .filter(|reminder| reminder.is_effectively_overdue(now))
            .collect()
    }

    /// Banner trigger: does the searched view contain anything actionable?
    pub fn has_overdue(&self, term: &str, now: DateTime<Utc>) -> bool {
        self.search(term)
            .iter()
            .any(|reminder| reminder.is_effectively_overdue(now))
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
