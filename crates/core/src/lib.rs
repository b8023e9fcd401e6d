//! `creditdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed record identifiers, the domain error model, the ordered record-store
//! abstraction, and the display-text helpers shared by the search facades.

pub mod entity;
pub mod error;
pub mod id;
pub mod store;
pub mod text;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use store::{InMemoryRecordStore, RecordStore};
