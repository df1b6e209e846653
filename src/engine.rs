//! The configurable distance engine.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::cost::{CostProfile, Operation};
use crate::distance;
use crate::error::Result;
use crate::query::DistanceQuery;
use crate::substitution::SubstitutionOverrides;
use crate::variant::Variant;

/// Computes weighted edit distances with one long-lived cost configuration.
///
/// The engine owns a [`CostProfile`] and a [`SubstitutionOverrides`] table.
/// Both persist across computations until changed; computing never mutates
/// them, so a shared `&DistanceEngine` can serve any number of threads.
///
/// # Example
///
/// ```rust
/// use quill::{DistanceEngine, Variant};
///
/// let mut engine = DistanceEngine::new();
/// assert_eq!(engine.compute("kitten", "sitting", Variant::Levenshtein)?, 3.0);
///
/// engine.add_substitution_override('g', 'b', 0.5)?;
/// assert_eq!(engine.compute("goat", "boat", Variant::Levenshtein)?, 0.5);
/// # Ok::<(), quill::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceEngine {
    costs: CostProfile,
    overrides: SubstitutionOverrides,
}

impl DistanceEngine {
    /// Create an engine with unit costs and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from an existing configuration.
    pub fn with_config(costs: CostProfile, overrides: SubstitutionOverrides) -> Self {
        Self { costs, overrides }
    }

    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Current cost weights.
    pub fn costs(&self) -> &CostProfile {
        &self.costs
    }

    /// Current substitution overrides.
    pub fn overrides(&self) -> &SubstitutionOverrides {
        &self.overrides
    }

    fn set_cost(&mut self, operation: Operation, cost: f64) -> Result<()> {
        self.costs.set(operation, cost)?;
        debug!("{} cost set to {}", operation, cost);
        Ok(())
    }

    /// Replace the addition cost. Fails if `cost` is not strictly positive.
    pub fn set_addition_cost(&mut self, cost: f64) -> Result<()> {
        self.set_cost(Operation::Addition, cost)
    }

    /// Replace the deletion cost. Fails if `cost` is not strictly positive.
    pub fn set_deletion_cost(&mut self, cost: f64) -> Result<()> {
        self.set_cost(Operation::Deletion, cost)
    }

    /// Replace the default substitution cost. Fails if `cost` is not strictly positive.
    pub fn set_substitution_cost(&mut self, cost: f64) -> Result<()> {
        self.set_cost(Operation::Substitution, cost)
    }

    /// Replace the transposition cost. Fails if `cost` is not strictly positive.
    ///
    /// A cost below the average of addition and deletion is accepted here;
    /// the next [`compute`](Self::compute) reports it.
    pub fn set_transposition_cost(&mut self, cost: f64) -> Result<()> {
        self.set_cost(Operation::Transposition, cost)
    }

    /// Register a symmetric substitution cost for the pair `(a, b)`.
    ///
    /// Overrides apply to [`Variant::Levenshtein`] and
    /// [`Variant::OptimalStringAlignment`].
    pub fn add_substitution_override(&mut self, a: char, b: char, cost: f64) -> Result<()> {
        let previous = self.overrides.insert(a, b, cost)?;
        match previous {
            Some(old) => debug!("substitution override {:?}/{:?}: {} -> {}", a, b, old, cost),
            None => debug!("substitution override {:?}/{:?} = {}", a, b, cost),
        }
        Ok(())
    }

    /// Compute the `variant` distance from `source` to `target`.
    ///
    /// # Errors
    ///
    /// [`DistanceError::InconsistentCosts`](crate::DistanceError::InconsistentCosts)
    /// when `2 * transposition < addition + deletion`. This is checked on
    /// every call, before anything else, including for identical inputs.
    pub fn compute(&self, source: &str, target: &str, variant: Variant) -> Result<f64> {
        self.costs.validate()?;

        if source == target {
            return Ok(0.0);
        }

        let source_chars: SmallVec<[char; 32]> = source.chars().collect();
        let target_chars: SmallVec<[char; 32]> = target.chars().collect();
        trace!(
            "computing {} over {}x{} characters",
            variant,
            source_chars.len(),
            target_chars.len()
        );

        let distance = match variant {
            Variant::Lcs => distance::lcs(&source_chars, &target_chars, &self.costs),
            Variant::Levenshtein => {
                distance::levenshtein(&source_chars, &target_chars, &self.costs, &self.overrides)
            }
            Variant::OptimalStringAlignment => {
                distance::osa(&source_chars, &target_chars, &self.costs, &self.overrides)
            }
            Variant::DamerauLevenshtein => {
                distance::damerau_levenshtein(&source_chars, &target_chars, &self.costs)
            }
        };

        Ok(distance)
    }

    /// Compute the distance described by `query`.
    pub fn evaluate(&self, query: &DistanceQuery<'_>) -> Result<f64> {
        self.compute(query.source(), query.target(), query.variant())
    }
}

/// Builder for constructing a [`DistanceEngine`] with a fluent API.
///
/// Costs are validated on [`build`](Self::build); unset costs default to 1.
///
/// # Example
///
/// ```rust
/// use quill::{DistanceEngine, Variant};
///
/// let engine = DistanceEngine::builder()
///     .addition(0.2)
///     .deletion(0.2)
///     .transposition(0.5)
///     .build()?;
/// assert_eq!(engine.compute("ogat", "goat", Variant::DamerauLevenshtein)?, 0.4);
/// # Ok::<(), quill::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    costs: Vec<(Operation, f64)>,
    overrides: Vec<(char, char, f64)>,
}

impl EngineBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the addition cost.
    pub fn addition(mut self, cost: f64) -> Self {
        self.costs.push((Operation::Addition, cost));
        self
    }

    /// Set the deletion cost.
    pub fn deletion(mut self, cost: f64) -> Self {
        self.costs.push((Operation::Deletion, cost));
        self
    }

    /// Set the default substitution cost.
    pub fn substitution(mut self, cost: f64) -> Self {
        self.costs.push((Operation::Substitution, cost));
        self
    }

    /// Set the transposition cost.
    pub fn transposition(mut self, cost: f64) -> Self {
        self.costs.push((Operation::Transposition, cost));
        self
    }

    /// Add a symmetric substitution override.
    pub fn substitution_override(mut self, a: char, b: char, cost: f64) -> Self {
        self.overrides.push((a, b, cost));
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    ///
    /// [`DistanceError::InvalidCost`](crate::DistanceError::InvalidCost) for
    /// the first non-positive cost or override.
    pub fn build(self) -> Result<DistanceEngine> {
        let mut costs = CostProfile::default();
        for (operation, cost) in self.costs {
            costs.set(operation, cost)?;
        }
        let overrides = SubstitutionOverrides::from_rules(&self.overrides)?;

        Ok(DistanceEngine::with_config(costs, overrides))
    }
}
