//! Statement aggregation and rendering.
//!
//! The aggregator walks an invoice in performance order, resolves each play
//! against the catalog, applies the pricing and credit policies, and folds
//! the results into an immutable `Statement`. The renderer turns that
//! statement into the line-oriented text bill.

pub mod render;
pub mod statement;

pub use statement::{LineItem, Statement, build_statement};
