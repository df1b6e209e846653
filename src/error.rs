//! Error types for cost configuration and distance computation.

use thiserror::Error;

use crate::cost::Operation;

/// Errors that can occur while configuring an engine or computing a distance.
///
/// All of these are deterministic usage errors: retrying the same call with
/// the same configuration fails the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistanceError {
    /// A cost was zero, negative, or not a finite number.
    ///
    /// Returned by every cost setter and by
    /// [`add_substitution_override`](crate::DistanceEngine::add_substitution_override).
    /// The previous configuration is left untouched.
    #[error("{operation} cost must be positive, got {cost}")]
    InvalidCost {
        /// The operation whose cost was rejected.
        operation: Operation,
        /// The rejected value.
        cost: f64,
    },

    /// The transposition cost is cheaper than half of an addition plus a deletion.
    ///
    /// Checked on every computation rather than on assignment, since the three
    /// costs involved can be set in any order.
    #[error(
        "transposition cost {transposition} must be at least the average of the \
         addition cost {addition} and deletion cost {deletion}"
    )]
    InconsistentCosts {
        /// Current transposition cost.
        transposition: f64,
        /// Current addition cost.
        addition: f64,
        /// Current deletion cost.
        deletion: f64,
    },

    /// A required input sequence was not supplied.
    #[error("missing input: {0} is required")]
    InvalidInput(&'static str),
}

/// A string that names no [`Variant`](crate::Variant).
///
/// Returned by `str::parse::<Variant>`; holds the rejected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown variant: {0}. Valid options: lcs, levenshtein, osa, damerau-levenshtein")]
pub struct ParseVariantError(pub String);

/// A specialized `Result` type for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;
