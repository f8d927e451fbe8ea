//! Strongly-typed identifiers used across the billing domain.

use serde::{Deserialize, Serialize};

/// Identifier of a play in the catalog.
///
/// Play ids are caller-supplied slugs (e.g. `"hamlet"`), not generated
/// identifiers; the newtype keeps them from mixing with other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_id_is_serde_transparent() {
        let id = PlayId::new("as-like");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"as-like\"");
        let back: PlayId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn play_id_displays_its_slug() {
        assert_eq!(PlayId::from("othello").to_string(), "othello");
    }
}
