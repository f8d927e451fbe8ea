//! Pricing and credit-award rule engine.
//!
//! This crate contains the billing rules for performances, implemented purely
//! as deterministic domain logic (no IO, no storage): the recognized play
//! kinds, the configurable rate table, and the per-performance amount and
//! volume-credit policies.

pub mod policy;
pub mod rates;

pub use policy::PlayKind;
pub use rates::PricingRates;
