use serde::{Deserialize, Serialize};

use stagebill_core::PlayId;

/// One staged showing of a play, as recorded on an invoice.
///
/// Audience zero is valid input and prices at the base amount only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's bill: customer name plus an ordered performance list.
///
/// Performance order is significant for the rendered statement's line
/// items (not for the totals) and is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}
