//! Invoicing domain module (invoice lifecycle).
//!
//! This crate contains business rules for invoices, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod book;
pub mod invoice;

pub use book::InvoiceBook;
pub use invoice::{CreateInvoice, Invoice, InvoiceId, InvoiceResolution, InvoiceStatus};
