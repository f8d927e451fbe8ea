use serde::{Deserialize, Serialize};

/// Rate table for the pricing and credit policies.
///
/// Every rule constant is a configuration value, never computed. All
/// amounts are in smallest currency unit (e.g., cents); audience
/// thresholds and counts are head counts. Missing fields deserialize to
/// the defaults, so partial rate overrides are valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRates {
    /// Flat charge for any tragedy performance.
    pub tragedy_base_amount: u64,
    /// Audience size a tragedy seats before the per-person surcharge.
    pub tragedy_audience_threshold: u32,
    /// Surcharge per attendee above the tragedy threshold.
    pub tragedy_over_capacity_per_person: u64,

    /// Flat charge for any comedy performance.
    pub comedy_base_amount: u64,
    /// Audience size a comedy seats before over-capacity charges.
    pub comedy_audience_threshold: u32,
    /// Flat over-capacity charge once the comedy threshold is exceeded.
    pub comedy_over_capacity_amount: u64,
    /// Surcharge per attendee above the comedy threshold.
    pub comedy_over_capacity_per_person: u64,
    /// Charge per attendee, applied to the full comedy audience.
    pub comedy_amount_per_attendee: u64,

    /// Audience size above which volume credits accrue, any play kind.
    pub base_volume_credit_threshold: u32,
    /// Divisor for the comedy bonus credit term (integer division).
    pub comedy_extra_credit_divisor: u32,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            tragedy_base_amount: 40_000,
            tragedy_audience_threshold: 30,
            tragedy_over_capacity_per_person: 1_000,
            comedy_base_amount: 30_000,
            comedy_audience_threshold: 20,
            comedy_over_capacity_amount: 10_000,
            comedy_over_capacity_per_person: 500,
            comedy_amount_per_attendee: 300,
            base_volume_credit_threshold: 30,
            comedy_extra_credit_divisor: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let rates: PricingRates =
            serde_json::from_str(r#"{ "tragedy_base_amount": 50000 }"#).unwrap();
        assert_eq!(rates.tragedy_base_amount, 50_000);
        assert_eq!(rates.comedy_base_amount, 30_000);
        assert_eq!(rates.comedy_extra_credit_divisor, 5);
    }

    #[test]
    fn empty_config_is_the_default_table() {
        let rates: PricingRates = serde_json::from_str("{}").unwrap();
        assert_eq!(rates, PricingRates::default());
    }
}
