//! Builds and prints the canonical BigCo statement.
//!
//! Run with `cargo run --example bigco` (set `RUST_LOG=debug` to see the
//! aggregation event).

use stagebill_catalog::{Play, PlayCatalog};
use stagebill_core::PlayId;
use stagebill_invoicing::{Invoice, Performance};
use stagebill_pricing::PricingRates;
use stagebill_statement::{build_statement, render};

fn main() -> anyhow::Result<()> {
    stagebill_observability::init();

    let catalog: PlayCatalog = [
        (PlayId::from("hamlet"), Play::new("Hamlet", "tragedy")),
        (PlayId::from("as-like"), Play::new("As You Like It", "comedy")),
        (PlayId::from("othello"), Play::new("Othello", "tragedy")),
    ]
    .into_iter()
    .collect();

    let invoice = Invoice::new(
        "BigCo",
        vec![
            Performance::new("hamlet", 55),
            Performance::new("as-like", 35),
            Performance::new("othello", 40),
        ],
    );

    let statement = build_statement(&invoice, &catalog, &PricingRates::default())?;
    print!("{}", render::plain_text(&statement));
    Ok(())
}
