//! End-to-end flow: JSON-materialized catalog and invoice through the
//! aggregator and renderer.

use stagebill_catalog::PlayCatalog;
use stagebill_invoicing::Invoice;
use stagebill_pricing::PricingRates;
use stagebill_statement::{build_statement, render};

const PLAYS_JSON: &str = r#"{
    "hamlet": { "name": "Hamlet", "type": "tragedy" },
    "as-like": { "name": "As You Like It", "type": "comedy" },
    "othello": { "name": "Othello", "type": "tragedy" }
}"#;

const INVOICE_JSON: &str = r#"{
    "customer": "BigCo",
    "performances": [
        { "playID": "hamlet", "audience": 55 },
        { "playID": "as-like", "audience": 35 },
        { "playID": "othello", "audience": 40 }
    ]
}"#;

#[test]
fn big_co_invoice_renders_the_full_bill() {
    stagebill_observability::init();

    let catalog: PlayCatalog = serde_json::from_str(PLAYS_JSON).unwrap();
    let invoice: Invoice = serde_json::from_str(INVOICE_JSON).unwrap();
    let rates = PricingRates::default();

    let statement = build_statement(&invoice, &catalog, &rates).unwrap();
    assert_eq!(statement.total_amount, 173_000);
    assert_eq!(statement.total_credits, 47);

    let expected = "\
Statement for BigCo
  Hamlet: $650.00 (55 seats)
  As You Like It: $580.00 (35 seats)
  Othello: $500.00 (40 seats)
Amount owed is $1,730.00
You earned 47 credits
";
    assert_eq!(render::plain_text(&statement), expected);
}

#[test]
fn statement_round_trips_through_json() {
    let catalog: PlayCatalog = serde_json::from_str(PLAYS_JSON).unwrap();
    let invoice: Invoice = serde_json::from_str(INVOICE_JSON).unwrap();

    let statement = build_statement(&invoice, &catalog, &PricingRates::default()).unwrap();
    let json = serde_json::to_string(&statement).unwrap();
    let back: stagebill_statement::Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, statement);
}

#[test]
fn overridden_rates_flow_through_the_bill() {
    let catalog: PlayCatalog = serde_json::from_str(PLAYS_JSON).unwrap();
    let invoice: Invoice = serde_json::from_str(INVOICE_JSON).unwrap();

    // Double the tragedy base; everything else stays at the defaults.
    let rates: PricingRates =
        serde_json::from_str(r#"{ "tragedy_base_amount": 80000 }"#).unwrap();

    let statement = build_statement(&invoice, &catalog, &rates).unwrap();
    // Two tragedies gain 40_000 each over the default table.
    assert_eq!(statement.total_amount, 173_000 + 80_000);
    // Credits are untouched by amount rates.
    assert_eq!(statement.total_credits, 47);
}
