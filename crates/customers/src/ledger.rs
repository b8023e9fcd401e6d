use creditdesk_core::{DomainError, DomainResult, InMemoryRecordStore, RecordId, RecordStore};

use crate::customer::{AddCustomer, CreditCustomer, CustomerId};

/// Customer Ledger: owns the credit-customer collection.
///
/// Generic over the backing store so a persistent backend can be substituted;
/// defaults to the in-memory, insertion-ordered store.
pub struct CustomerLedger<S = InMemoryRecordStore<CustomerId, CreditCustomer>>
where
    S: RecordStore<CustomerId, CreditCustomer>,
{
    store: S,
}

impl CustomerLedger {
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::new())
    }
}

impl Default for CustomerLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CustomerLedger<S>
where
    S: RecordStore<CustomerId, CreditCustomer>,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Register a new credit customer with a zero opening balance.
    ///
    /// Fails with the first violated constraint; on failure the collection is
    /// unchanged.
    pub fn add_customer(&self, cmd: AddCustomer) -> DomainResult<CreditCustomer> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        if cmd.email.trim().is_empty() {
            return Err(DomainError::validation("customer email must not be empty"));
        }
        if cmd.credit_limit_cents == 0 {
            return Err(DomainError::validation("credit limit must be positive"));
        }

        let customer = CreditCustomer {
            id: CustomerId::new(RecordId::new()),
            name: cmd.name,
            email: cmd.email,
            credit_limit_cents: cmd.credit_limit_cents,
            balance_cents: 0,
        };
        self.store.upsert(customer.id, customer.clone());
        Ok(customer)
    }

    pub fn get(&self, id: CustomerId) -> Option<CreditCustomer> {
        self.store.get(&id)
    }

    /// Read-only search view: case-insensitive substring on name OR email.
    /// An empty term matches all; records come back in insertion order.
    pub fn search(&self, term: &str) -> Vec<CreditCustomer> {
        self.store
            .list()
            .into_iter()
            .filter(|customer| customer.matches_term(term))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
