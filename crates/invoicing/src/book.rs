use creditdesk_core::{DomainError, DomainResult, InMemoryRecordStore, RecordId, RecordStore};

use crate::invoice::{CreateInvoice, Invoice, InvoiceId, InvoiceResolution, InvoiceStatus};

/// Invoice Lifecycle: owns the invoice collection.
///
/// Generic over the backing store; defaults to the in-memory,
/// insertion-ordered store.
pub struct InvoiceBook<S = InMemoryRecordStore<InvoiceId, Invoice>>
where
    S: RecordStore<InvoiceId, Invoice>,
{
    store: S,
}

impl InvoiceBook {
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::new())
    }
}

impl Default for InvoiceBook {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> InvoiceBook<S>
where
    S: RecordStore<InvoiceId, Invoice>,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Create a new invoice in `Pending` status.
    ///
    /// Fails with the first violated constraint; on failure the collection is
    /// unchanged.
    pub fn create_invoice(&self, cmd: CreateInvoice) -> DomainResult<Invoice> {
        if cmd.customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        if cmd.amount_cents == 0 {
            return Err(DomainError::validation("invoice amount must be positive"));
        }

        let invoice = Invoice {
            id: InvoiceId::new(RecordId::new()),
            customer_name: cmd.customer_name,
            amount_cents: cmd.amount_cents,
            due_date: cmd.due_date,
            status: InvoiceStatus::Pending,
        };
        self.store.upsert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    /// Replace the invoice's status with the given resolution.
    ///
    /// Only the status field changes; nothing cascades to the customer ledger.
    /// The transition performs no guard on the current status: an already-paid
    /// invoice can be re-marked overdue and vice versa. Callers that want
    /// one-way semantics restrict which resolutions they offer.
    pub fn advance_status(
        &self,
        id: InvoiceId,
        resolution: InvoiceResolution,
    ) -> DomainResult<Invoice> {
        let mut invoice = self.store.get(&id).ok_or_else(DomainError::not_found)?;
        invoice.status = resolution.into();
        self.store.upsert(id, invoice.clone());
        Ok(invoice)
    }

    pub fn get(&self, id: InvoiceId) -> Option<Invoice> {
        self.store.get(&id)
    }

    /// Read-only search view: OR across customer name, amount text, and the
    /// long-form due date. Empty term matches all; insertion order preserved.
    pub fn search(&self, term: &str) -> Vec<Invoice> {
        self.store
            .list()
            .into_iter()
            .filter(|invoice| invoice.matches_term(term))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn due(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_cmd(name: &str, amount_cents: u64) -> CreateInvoice {
        CreateInvoice {
            customer_name: name.to_string(),
            amount_cents,
            due_date: due(2023, 7, 5),
        }
    }

    #[test]
    fn created_invoice_is_pending() {
        let book = InvoiceBook::new();
        let invoice = book.create_invoice(create_cmd("Jane Smith", 20_000)).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert_eq!(book.get(invoice.id), Some(invoice));
    }

    #[test]
    fn empty_customer_name_is_rejected() {
        let book = InvoiceBook::new();
        let err = book.create_invoice(create_cmd("", 20_000)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(book.count(), 0);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let book = InvoiceBook::new();
        let err = book.create_invoice(create_cmd("Jane Smith", 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(book.count(), 0);
    }

    #[test]
    fn advance_status_replaces_only_the_status() {
        let book = InvoiceBook::new();
        let created = book.create_invoice(create_cmd("Jane Smith", 20_000)).unwrap();

        let paid = book.advance_status(created.id, InvoiceResolution::Paid).unwrap();
        assert_eq!(paid.status, InvoiceStatus::Paid);
        assert_eq!(paid.customer_name, created.customer_name);
        assert_eq!(paid.amount_cents, created.amount_cents);
        assert_eq!(paid.due_date, created.due_date);
    }

    #[test]
    fn transition_is_unguarded() {
        // Regression test for the documented no-guard contract: a paid
        // invoice can still be re-marked overdue.
        let book = InvoiceBook::new();
        let created = book.create_invoice(create_cmd("Jane Smith", 20_000)).unwrap();

        book.advance_status(created.id, InvoiceResolution::Paid).unwrap();
        let reverted = book
            .advance_status(created.id, InvoiceResolution::Overdue)
            .unwrap();
        assert_eq!(reverted.status, InvoiceStatus::Overdue);
    }

    #[test]
    fn advancing_a_missing_invoice_fails_with_not_found() {
        let book = InvoiceBook::new();
        let err = book
            .advance_status(InvoiceId::new(RecordId::new()), InvoiceResolution::Paid)
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn search_matches_name_amount_and_display_date() {
        let book = InvoiceBook::new();
        book.create_invoice(create_cmd("Jane Smith", 20_000)).unwrap();

        assert_eq!(book.search("jane").len(), 1);
        assert_eq!(book.search("200").len(), 1);
        assert_eq!(book.search("july 5th").len(), 1);
        assert!(book.search("zzz").is_empty());
    }

    proptest! {
        #[test]
        fn any_positive_amount_creates_a_pending_invoice(amount_cents in 1u64..10_000_000) {
            let book = InvoiceBook::new();
            let invoice = book
                .create_invoice(create_cmd("Jane Smith", amount_cents))
                .unwrap();
            prop_assert_eq!(invoice.status, InvoiceStatus::Pending);
            prop_assert_eq!(invoice.amount_cents, amount_cents);
        }

        #[test]
        fn full_customer_name_always_matches_search(name in "[A-Za-z][A-Za-z ]{0,20}") {
            prop_assume!(!name.trim().is_empty());
            let book = InvoiceBook::new();
            let invoice = book
                .create_invoice(CreateInvoice {
                    customer_name: name.clone(),
                    amount_cents: 100,
                    due_date: due(2023, 7, 5),
                })
                .unwrap();
            let found = book.search(&name);
            prop_assert!(found.iter().any(|i| i.id == invoice.id));
        }
    }
}
