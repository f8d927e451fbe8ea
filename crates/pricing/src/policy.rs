use stagebill_core::{BillingError, BillingResult};

use crate::rates::PricingRates;

/// Recognized play kinds (the closed set of pricing categories).
///
/// Catalog data carries the type as an open string; `parse` is the single
/// place that decides membership, so adding a play kind is a localized
/// change: one variant, one parse arm, one arm in each policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayKind {
    Tragedy,
    Comedy,
}

impl PlayKind {
    /// Parse a catalog type tag, rejecting anything outside the recognized
    /// set. A hard error: silently charging nothing for an unrecognized
    /// category would corrupt the invoice total.
    pub fn parse(tag: &str) -> BillingResult<Self> {
        match tag {
            "tragedy" => Ok(Self::Tragedy),
            "comedy" => Ok(Self::Comedy),
            other => Err(BillingError::unknown_play_type(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tragedy => "tragedy",
            Self::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for PlayKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PricingRates {
    /// Charge for one performance, in smallest currency unit.
    ///
    /// Deterministic and side-effect free. Fails with `UnknownPlayType`
    /// when the tag is outside the recognized set.
    pub fn amount(&self, play_type: &str, audience: u32) -> BillingResult<u64> {
        Ok(match PlayKind::parse(play_type)? {
            PlayKind::Tragedy => self.tragedy_amount(audience),
            PlayKind::Comedy => self.comedy_amount(audience),
        })
    }

    /// Volume credits awarded for one performance.
    ///
    /// Never fails: the pricing policy has already validated the type for
    /// the same performance, and the base term applies to any kind. The
    /// comedy bonus uses integer (floor) division.
    pub fn credits(&self, play_type: &str, audience: u32) -> u64 {
        let base = u64::from(audience.saturating_sub(self.base_volume_credit_threshold));
        let bonus = match PlayKind::parse(play_type) {
            // A zero divisor is degenerate config; it awards no bonus
            // rather than breaking the never-fails contract.
            Ok(PlayKind::Comedy) => audience
                .checked_div(self.comedy_extra_credit_divisor)
                .map_or(0, u64::from),
            _ => 0,
        };
        base + bonus
    }

    // Saturating arithmetic throughout: absurd configured rates clamp at
    // u64::MAX instead of wrapping or panicking.
    fn tragedy_amount(&self, audience: u32) -> u64 {
        let mut amount = self.tragedy_base_amount;
        // audience == threshold does not trigger the surcharge.
        if audience > self.tragedy_audience_threshold {
            amount = amount.saturating_add(
                self.tragedy_over_capacity_per_person
                    .saturating_mul(u64::from(audience - self.tragedy_audience_threshold)),
            );
        }
        amount
    }

    fn comedy_amount(&self, audience: u32) -> u64 {
        let mut amount = self.comedy_base_amount;
        if audience > self.comedy_audience_threshold {
            amount = amount.saturating_add(self.comedy_over_capacity_amount).saturating_add(
                self.comedy_over_capacity_per_person
                    .saturating_mul(u64::from(audience - self.comedy_audience_threshold)),
            );
        }
        // Per-attendee term applies to the full audience, threshold or not.
        amount.saturating_add(self.comedy_amount_per_attendee.saturating_mul(u64::from(audience)))
    }
}
