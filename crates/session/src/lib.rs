//! Session layer: the root application context.
//!
//! Owns one store per sub-domain as explicit objects (never ambient globals),
//! exposes the full command/query surface with structured tracing
//! around every command, and provides the [`Notice`] shape the presentation
//! layer surfaces as non-blocking notifications.

pub mod desk;
pub mod notice;


pub use desk::CreditDesk;
pub use notice::{Notice, Severity};

/// Initialize process-wide tracing for hosts that do not install their own
/// subscriber. Safe to call multiple times.
pub fn init_observability() {
    creditdesk_observability::init();
}
