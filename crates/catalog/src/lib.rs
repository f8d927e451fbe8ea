//! Play catalog module (immutable reference data).
//!
//! Pure domain data only: the catalog maps play ids to play metadata and is
//! read-only for the duration of a statement computation. It does not
//! validate play types; the pricing policy owns the recognized set.

pub mod play;

pub use play::{Play, PlayCatalog};
