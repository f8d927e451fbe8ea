use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stagebill_core::PlayId;

/// Play metadata: display name plus its pricing category.
///
/// `play_type` is an open string here on purpose: the catalog carries
/// whatever the caller materialized, and the pricing policy rejects
/// unrecognized types with a hard error instead of a zero charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub play_type: String,
}

impl Play {
    pub fn new(name: impl Into<String>, play_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            play_type: play_type.into(),
        }
    }
}

/// Immutable lookup table from play id to play metadata.
///
/// Serializes as a plain JSON object keyed by play id, matching the shape
/// callers materialize invoices against (`{"hamlet": {"name": ..., "type": ...}}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a play id; `None` when the id is absent.
    pub fn lookup(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    pub fn insert(&mut self, id: PlayId, play: Play) {
        self.plays.insert(id, play);
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<T: IntoIterator<Item = (PlayId, Play)>>(iter: T) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
