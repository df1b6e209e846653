//! A single distance request: two sequences and a variant.

use crate::error::{DistanceError, Result};
use crate::variant::Variant;

/// Two input sequences plus the [`Variant`] to compare them with.
///
/// Built directly with [`DistanceQuery::new`] or through
/// [`DistanceQuery::builder`], which reports a missing input as
/// [`DistanceError::InvalidInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceQuery<'a> {
    source: &'a str,
    target: &'a str,
    variant: Variant,
}

impl<'a> DistanceQuery<'a> {
    /// Create a query.
    pub fn new(source: &'a str, target: &'a str, variant: Variant) -> Self {
        Self {
            source,
            target,
            variant,
        }
    }

    /// Start building a query.
    pub fn builder() -> DistanceQueryBuilder<'a> {
        DistanceQueryBuilder::new()
    }

    /// The sequence being transformed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The sequence to transform into.
    pub fn target(&self) -> &'a str {
        self.target
    }

    /// The distance variant to compute.
    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// Builder for [`DistanceQuery`].
///
/// # Example
///
/// ```rust
/// use quill::{DistanceError, DistanceQuery, Variant};
///
/// let query = DistanceQuery::builder()
///     .source("ogat")
///     .target("goat")
///     .variant(Variant::DamerauLevenshtein)
///     .build()?;
/// assert_eq!(query.variant(), Variant::DamerauLevenshtein);
///
/// let missing = DistanceQuery::builder().source("ogat").build();
/// assert_eq!(missing, Err(DistanceError::InvalidInput("target")));
/// # Ok::<(), DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceQueryBuilder<'a> {
    source: Option<&'a str>,
    target: Option<&'a str>,
    variant: Variant,
}

impl<'a> DistanceQueryBuilder<'a> {
    /// Create a new empty builder using [`Variant::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sequence being transformed.
    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the sequence to transform into.
    pub fn target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the distance variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Build the query.
    ///
    /// # Errors
    ///
    /// [`DistanceError::InvalidInput`] naming the first missing sequence.
    pub fn build(self) -> Result<DistanceQuery<'a>> {
        let source = self.source.ok_or(DistanceError::InvalidInput("source"))?;
        let target = self.target.ok_or(DistanceError::InvalidInput("target"))?;

        Ok(DistanceQuery::new(source, target, self.variant))
    }
}
