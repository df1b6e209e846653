//! Per-character-pair substitution costs.
//!
//! [`SubstitutionOverrides`] replaces the scalar substitution weight of a
//! [`CostProfile`](crate::CostProfile) for specific pairs of characters.
//! Rules are symmetric: a rule for `('g', 'b')` also applies to `('b', 'g')`.
//!
//! ## Example
//!
//! ```rust
//! use quill::SubstitutionOverrides;
//!
//! let mut overrides = SubstitutionOverrides::new();
//! overrides.insert('g', 'b', 0.5)?;
//!
//! assert_eq!(overrides.get('b', 'g'), Some(0.5));
//! assert_eq!(overrides.cost('g', 'b', 1.0), 0.5);
//! assert_eq!(overrides.cost('g', 'x', 1.0), 1.0); // no rule, default weight
//! assert_eq!(overrides.cost('g', 'g', 1.0), 0.0); // identical characters
//! # Ok::<(), quill::DistanceError>(())
//! ```

use rustc_hash::FxHashMap;

use crate::cost::{check_cost, Operation};
use crate::error::Result;

/// Order a pair so that `(a, b)` and `(b, a)` share one key.
#[inline(always)]
fn key(a: char, b: char) -> (char, char) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A symmetric table of substitution costs keyed by unordered character pairs.
///
/// Lookups for pairs without a rule fall back to the caller's default
/// substitution weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubstitutionOverrides {
    /// Costs keyed by `(min, max)` of the pair.
    rules: FxHashMap<(char, char), f64>,
}

impl SubstitutionOverrides {
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }

    /// Build a table from `(a, b, cost)` rules.
    ///
    /// Later rules for the same pair replace earlier ones.
    ///
    /// ```rust
    /// # use quill::SubstitutionOverrides;
    /// let overrides = SubstitutionOverrides::from_rules(&[('m', 'n', 0.3), ('i', 'l', 0.4)])?;
    /// assert_eq!(overrides.len(), 2);
    /// # Ok::<(), quill::DistanceError>(())
    /// ```
    pub fn from_rules(rules: &[(char, char, f64)]) -> Result<Self> {
        let mut overrides = Self::new();
        for &(a, b, cost) in rules {
            overrides.insert(a, b, cost)?;
        }
        Ok(overrides)
    }

    /// Register `cost` for substituting `a` with `b` (and `b` with `a`).
    ///
    /// Returns the previous cost for the pair, if any. A non-positive cost is
    /// rejected and leaves the table unchanged.
    pub fn insert(&mut self, a: char, b: char, cost: f64) -> Result<Option<f64>> {
        let cost = check_cost(Operation::SubstitutionOverride, cost)?;
        Ok(self.rules.insert(key(a, b), cost))
    }

    /// Remove the rule for a pair, returning its cost.
    pub fn remove(&mut self, a: char, b: char) -> Option<f64> {
        self.rules.remove(&key(a, b))
    }

    /// The registered cost for a pair, in either order.
    #[inline]
    pub fn get(&self, a: char, b: char) -> Option<f64> {
        self.rules.get(&key(a, b)).copied()
    }

    /// Cost of substituting `a` with `b`.
    ///
    /// Zero for identical characters, the registered rule if there is one,
    /// `default` otherwise.
    #[inline]
    pub fn cost(&self, a: char, b: char, default: f64) -> f64 {
        if a == b {
            return 0.0;
        }
        if self.rules.is_empty() {
            return default;
        }
        self.get(a, b).unwrap_or(default)
    }

    /// Number of registered pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove every rule.
    #[inline]
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Iterate over `(a, b, cost)` with `a <= b`, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char, f64)> + '_ {
        self.rules.iter().map(|(&(a, b), &cost)| (a, b, cost))
    }
}
