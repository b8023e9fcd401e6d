//! Customers domain module (credit customer ledger).
//!
//! This crate contains business rules for credit customers, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;
pub mod ledger;

pub use customer::{AddCustomer, CreditCustomer, CustomerId};
pub use ledger::CustomerLedger;
