//! Billing error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-level error.
///
/// Both variants are deterministic data errors: they abort the whole
/// statement computation (no partial statement, no zero-charge fallback)
/// and are never retried inside the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A performance references a play id absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// A resolved play's type is outside the recognized set.
    #[error("unknown play type: {0}")]
    UnknownPlayType(String),
}

impl BillingError {
    pub fn unknown_play(id: impl Into<String>) -> Self {
        Self::UnknownPlay(id.into())
    }

    pub fn unknown_play_type(kind: impl Into<String>) -> Self {
        Self::UnknownPlayType(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_carry_the_offending_tag() {
        let err = BillingError::unknown_play_type("opera");
        assert_eq!(err, BillingError::UnknownPlayType("opera".to_string()));
        assert_eq!(err.to_string(), "unknown play type: opera");

        let err = BillingError::unknown_play("hamlet-2");
        assert_eq!(err.to_string(), "unknown play: hamlet-2");
    }
}
