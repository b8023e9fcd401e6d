//! Reminders domain module (payment reminder scheduler).
//!
//! This crate contains business rules for payment reminders, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! wall clock is always injected, never read.

pub mod queue;
pub mod reminder;

pub use queue::ReminderQueue;
pub use reminder::{PaymentReminder, ReminderId, ReminderStatus};
