//! `stagebill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the billing
//! modules (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{BillingError, BillingResult};
pub use id::PlayId;
