//! Invoicing input entities.
//!
//! An invoice is one customer's ordered list of performances, already
//! materialized in memory by the caller. Immutable once constructed; the
//! statement module consumes it read-only.

pub mod invoice;

pub use invoice::{Invoice, Performance};
