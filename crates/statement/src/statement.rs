use serde::{Deserialize, Serialize};

use stagebill_catalog::PlayCatalog;
use stagebill_core::{BillingError, BillingResult};
use stagebill_invoicing::Invoice;
use stagebill_pricing::PricingRates;

/// One computed line of a statement (immutable once built).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub play_name: String,
    pub play_type: String,
    pub audience: u32,
    /// Charge in smallest currency unit.
    pub amount: u64,
}

/// Aggregated statement for one invoice.
///
/// Invariant: `total_amount` is exactly the sum of the line amounts and
/// `total_credits` the sum of the per-performance credit awards. All
/// arithmetic is integer-valued; dividing into display units is the
/// renderer's concern and never feeds back into these totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<LineItem>,
    /// Total charge in smallest currency unit.
    pub total_amount: u64,
    pub total_credits: u64,
}

/// Compute the statement for an invoice against a catalog and rate table.
///
/// Pure function of its inputs. Fails fast with `UnknownPlay` when a
/// performance references a play id the catalog cannot resolve (checked
/// before pricing), and propagates `UnknownPlayType` from the pricing
/// policy unchanged; the first offending performance in invoice order
/// determines the error, and no partial statement is produced.
pub fn build_statement(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    rates: &PricingRates,
) -> BillingResult<Statement> {
    tracing::debug!(
        customer = invoice.customer(),
        performances = invoice.performances().len(),
        "building statement"
    );

    let mut lines = Vec::with_capacity(invoice.performances().len());
    let mut total_amount: u64 = 0;
    let mut total_credits: u64 = 0;

    for performance in invoice.performances() {
        let play = catalog
            .lookup(&performance.play_id)
            .ok_or_else(|| BillingError::unknown_play(performance.play_id.as_str()))?;

        let amount = rates.amount(&play.play_type, performance.audience)?;
        // Credits never fail; the pricing call above validated the type.
        let credits = rates.credits(&play.play_type, performance.audience);

        total_amount = total_amount.saturating_add(amount);
        total_credits = total_credits.saturating_add(credits);
        lines.push(LineItem {
            play_name: play.name.clone(),
            play_type: play.play_type.clone(),
            audience: performance.audience,
            amount,
        });
    }

    Ok(Statement {
        customer: invoice.customer().to_string(),
        lines,
        total_amount,
        total_credits,
    })
}
