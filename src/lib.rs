//! # quill
//!
//! Weighted edit distances between two strings.
//!
//! A [`DistanceEngine`] owns four operation costs (addition, deletion,
//! substitution, transposition) and a table of per-character-pair
//! substitution overrides, and computes one of four distances with them:
//!
//! - [`Variant::Lcs`]: longest-common-subsequence weight
//! - [`Variant::Levenshtein`]: insertions, deletions, substitutions
//! - [`Variant::OptimalStringAlignment`]: Levenshtein plus non-overlapping swaps
//! - [`Variant::DamerauLevenshtein`]: Levenshtein plus adjacent swaps
//!
//! ## Example
//!
//! ```rust
//! use quill::prelude::*;
//!
//! let mut engine = DistanceEngine::new();
//! engine.set_addition_cost(0.2)?;
//! engine.set_deletion_cost(0.2)?;
//! engine.set_transposition_cost(0.5)?;
//!
//! assert_eq!(engine.compute("ogat", "goat", Variant::DamerauLevenshtein)?, 0.4);
//! # Ok::<(), DistanceError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cost;
pub mod distance;
pub mod engine;
pub mod error;
pub mod query;
pub mod substitution;
pub mod variant;

/// JSON engine configuration
#[cfg(feature = "serialization")]
pub mod config;

pub use cost::{CostProfile, Operation};
pub use engine::{DistanceEngine, EngineBuilder};
pub use error::{DistanceError, ParseVariantError, Result};
pub use query::{DistanceQuery, DistanceQueryBuilder};
pub use substitution::SubstitutionOverrides;
pub use variant::Variant;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cost::{CostProfile, Operation};
    pub use crate::engine::{DistanceEngine, EngineBuilder};
    pub use crate::error::{DistanceError, ParseVariantError};
    pub use crate::query::DistanceQuery;
    pub use crate::substitution::SubstitutionOverrides;
    pub use crate::variant::Variant;

    #[cfg(feature = "serialization")]
    pub use crate::config::{ConfigError, EngineConfig, OverrideRule};
}
