//! Operation costs shared by every distance variant.

use std::fmt;

use crate::error::{DistanceError, Result};

/// An edit operation that carries a configurable cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Operation {
    /// Insert a character into the source.
    Addition,
    /// Remove a character from the source.
    Deletion,
    /// Replace one character with another.
    Substitution,
    /// Swap two adjacent characters.
    Transposition,
    /// Replace a specific pair of characters (see [`SubstitutionOverrides`](crate::SubstitutionOverrides)).
    SubstitutionOverride,
}

impl Operation {
    /// Get a human-readable name for this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Deletion => "deletion",
            Operation::Substitution => "substitution",
            Operation::Transposition => "transposition",
            Operation::SubstitutionOverride => "substitution override",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject anything that is not a finite, strictly positive cost.
#[inline]
pub(crate) fn check_cost(operation: Operation, cost: f64) -> Result<f64> {
    if cost.is_finite() && cost > 0.0 {
        Ok(cost)
    } else {
        Err(DistanceError::InvalidCost { operation, cost })
    }
}

/// The four weights used by the distance algorithms.
///
/// Every weight is strictly positive; the setters enforce this. The
/// combined constraint `2 * transposition >= addition + deletion` is only
/// checked by [`validate`](Self::validate), since it spans three
/// independently settable values.
///
/// # Example
///
/// ```rust
/// use quill::CostProfile;
///
/// let mut costs = CostProfile::default();
/// costs.set_addition_cost(2.0)?;
/// assert_eq!(costs.addition(), 2.0);
///
/// // Cheaper than the average of addition and deletion.
/// costs.set_transposition_cost(1.0)?;
/// assert!(costs.validate().is_err());
/// # Ok::<(), quill::DistanceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CostProfile {
    addition: f64,
    deletion: f64,
    substitution: f64,
    transposition: f64,
}

impl Default for CostProfile {
    fn default() -> Self {
        Self {
            addition: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            transposition: 1.0,
        }
    }
}

impl CostProfile {
    /// Create a profile from explicit weights, rejecting non-positive values.
    ///
    /// The transposition constraint is not checked here.
    pub fn new(addition: f64, deletion: f64, substitution: f64, transposition: f64) -> Result<Self> {
        Ok(Self {
            addition: check_cost(Operation::Addition, addition)?,
            deletion: check_cost(Operation::Deletion, deletion)?,
            substitution: check_cost(Operation::Substitution, substitution)?,
            transposition: check_cost(Operation::Transposition, transposition)?,
        })
    }

    /// Cost of inserting one character.
    #[inline]
    pub fn addition(&self) -> f64 {
        self.addition
    }

    /// Cost of removing one character.
    #[inline]
    pub fn deletion(&self) -> f64 {
        self.deletion
    }

    /// Default cost of replacing one character with another.
    #[inline]
    pub fn substitution(&self) -> f64 {
        self.substitution
    }

    /// Cost of swapping two adjacent characters.
    #[inline]
    pub fn transposition(&self) -> f64 {
        self.transposition
    }

    /// Cost of a given operation.
    ///
    /// [`Operation::SubstitutionOverride`] has no scalar weight and resolves
    /// to the default substitution cost.
    pub fn get(&self, operation: Operation) -> f64 {
        match operation {
            Operation::Addition => self.addition,
            Operation::Deletion => self.deletion,
            Operation::Substitution | Operation::SubstitutionOverride => self.substitution,
            Operation::Transposition => self.transposition,
        }
    }

    /// Replace the cost of `operation`.
    ///
    /// [`Operation::SubstitutionOverride`] is per pair and has no slot in the
    /// profile, so it is always rejected as
    /// [`InvalidCost`](DistanceError::InvalidCost). On error the profile is
    /// unchanged.
    pub fn set(&mut self, operation: Operation, cost: f64) -> Result<()> {
        let cost = check_cost(operation, cost)?;
        match operation {
            Operation::Addition => self.addition = cost,
            Operation::Deletion => self.deletion = cost,
            Operation::Substitution => self.substitution = cost,
            Operation::Transposition => self.transposition = cost,
            Operation::SubstitutionOverride => {
                return Err(DistanceError::InvalidCost { operation, cost })
            }
        }
        Ok(())
    }

    /// Replace the addition cost.
    pub fn set_addition_cost(&mut self, cost: f64) -> Result<()> {
        self.set(Operation::Addition, cost)
    }

    /// Replace the deletion cost.
    pub fn set_deletion_cost(&mut self, cost: f64) -> Result<()> {
        self.set(Operation::Deletion, cost)
    }

    /// Replace the default substitution cost.
    pub fn set_substitution_cost(&mut self, cost: f64) -> Result<()> {
        self.set(Operation::Substitution, cost)
    }

    /// Replace the transposition cost.
    ///
    /// A value below the average of addition and deletion is accepted here
    /// and reported by [`validate`](Self::validate).
    pub fn set_transposition_cost(&mut self, cost: f64) -> Result<()> {
        self.set(Operation::Transposition, cost)
    }

    /// Check every weight, plus `2 * transposition >= addition + deletion`.
    pub fn validate(&self) -> Result<()> {
        check_cost(Operation::Addition, self.addition)?;
        check_cost(Operation::Deletion, self.deletion)?;
        check_cost(Operation::Substitution, self.substitution)?;
        check_cost(Operation::Transposition, self.transposition)?;

        if 2.0 * self.transposition < self.addition + self.deletion {
            return Err(DistanceError::InconsistentCosts {
                transposition: self.transposition,
                addition: self.addition,
                deletion: self.deletion,
            });
        }
        Ok(())
    }
}
