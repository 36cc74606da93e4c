//! Common types and traits shared by the event and category records

pub mod aggregate_id;
pub mod serde_helpers;

// Re-exports
pub use aggregate_id::AggregateId;
