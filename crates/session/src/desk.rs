use chrono::{DateTime, Utc};

use creditdesk_core::DomainResult;
use creditdesk_customers::{AddCustomer, CreditCustomer, CustomerLedger};
use creditdesk_invoicing::{CreateInvoice, Invoice, InvoiceBook, InvoiceId, InvoiceResolution};
use creditdesk_reminders::{PaymentReminder, ReminderId, ReminderQueue};

/// Root application context for one credit & billing session.
///
/// Owns the three sub-domain stores; everything lives and dies with this
/// value (no persistence). Tests construct a fresh desk per case for full
/// isolation. Each command delegates to its sub-domain and adds structured
/// tracing; no error is swallowed on the way through.
pub struct CreditDesk {
    customers: CustomerLedger,
    invoices: InvoiceBook,
    reminders: ReminderQueue,
}

impl CreditDesk {
    pub fn new() -> Self {
        Self {
            customers: CustomerLedger::new(),
            invoices: InvoiceBook::new(),
            reminders: ReminderQueue::new(),
        }
    }

    pub fn customers(&self) -> &CustomerLedger {
        &self.customers
    }

    pub fn invoices(&self) -> &InvoiceBook {
        &self.invoices
    }

    pub fn reminders(&self) -> &ReminderQueue {
        &self.reminders
    }

    // Commands

    pub fn add_customer(&self, cmd: AddCustomer) -> DomainResult<CreditCustomer> {
        match self.customers.add_customer(cmd) {
            Ok(customer) => {
                tracing::info!(customer_id = %customer.id, name = %customer.name, "customer added");
                Ok(customer)
            }
            Err(err) => {
                tracing::warn!(error = %err, "add customer rejected");
                Err(err)
            }
        }
    }

    pub fn create_invoice(&self, cmd: CreateInvoice) -> DomainResult<Invoice> {
        match self.invoices.create_invoice(cmd) {
            Ok(invoice) => {
                tracing::info!(invoice_id = %invoice.id, customer = %invoice.customer_name, "invoice created");
                Ok(invoice)
            }
            Err(err) => {
                tracing::warn!(error = %err, "create invoice rejected");
                Err(err)
            }
        }
    }

    pub fn advance_invoice_status(
        &self,
        id: InvoiceId,
        resolution: InvoiceResolution,
    ) -> DomainResult<Invoice> {
        match self.invoices.advance_status(id, resolution) {
            Ok(invoice) => {
                tracing::info!(invoice_id = %invoice.id, status = %invoice.status, "invoice status advanced");
                Ok(invoice)
            }
            Err(err) => {
                tracing::warn!(invoice_id = %id, error = %err, "advance invoice status failed");
                Err(err)
            }
        }
    }

    pub fn seed_reminders(&self, records: impl IntoIterator<Item = PaymentReminder>) {
        self.reminders.seed(records);
        tracing::info!(count = self.reminders.count(), "reminder queue seeded");
    }

    pub fn send_reminder(&self, id: ReminderId) -> DomainResult<PaymentReminder> {
        match self.reminders.send(id) {
            Ok(reminder) => {
                tracing::info!(reminder_id = %reminder.id, "reminder sent");
                Ok(reminder)
            }
            Err(err) => {
                tracing::warn!(reminder_id = %id, error = %err, "send reminder failed");
                Err(err)
            }
        }
    }

    // Queries

    pub fn search_customers(&self, term: &str) -> Vec<CreditCustomer> {
        self.customers.search(term)
    }

    pub fn search_invoices(&self, term: &str) -> Vec<Invoice> {
        self.invoices.search(term)
    }

    pub fn search_reminders(&self, term: &str) -> Vec<PaymentReminder> {
        self.reminders.search(term)
    }

    pub fn pending_reminders(&self, term: &str) -> Vec<PaymentReminder> {
        self.reminders.pending(term)
    }

    pub fn overdue_reminders(&self, term: &str, now: DateTime<Utc>) -> Vec<PaymentReminder> {
        self.reminders.overdue(term, now)
    }

    pub fn has_overdue_reminders(&self, term: &str, now: DateTime<Utc>) -> bool {
        self.reminders.has_overdue(term, now)
    }
}

impl Default for CreditDesk {
    fn default() -> Self {
        Self::new()
    }
}
