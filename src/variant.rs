//! Edit distance variants.

use crate::error::ParseVariantError;

/// Which edit distance to compute.
///
/// All variants share the engine's [`CostProfile`](crate::CostProfile);
/// they differ in the operations they count and in how they combine costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Variant {
    /// Longest-common-subsequence weight.
    ///
    /// Every shared character contributes `addition + deletion`, so the
    /// result grows with similarity rather than with the number of edits.
    #[default]
    Lcs,

    /// Weighted Levenshtein distance.
    ///
    /// Counts insertions, deletions and substitutions. Substitutions honor
    /// the engine's per-pair overrides.
    Levenshtein,

    /// Optimal string alignment.
    ///
    /// Levenshtein plus adjacent transpositions, where no character may take
    /// part in more than one edit.
    OptimalStringAlignment,

    /// Damerau-Levenshtein distance with adjacent transpositions.
    ///
    /// Unlike [`OptimalStringAlignment`](Variant::OptimalStringAlignment),
    /// characters between a transposed pair may still be edited.
    DamerauLevenshtein,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 4] = [
        Variant::Lcs,
        Variant::Levenshtein,
        Variant::OptimalStringAlignment,
        Variant::DamerauLevenshtein,
    ];

    /// Get a human-readable name for this variant
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Lcs => "lcs",
            Variant::Levenshtein => "levenshtein",
            Variant::OptimalStringAlignment => "osa",
            Variant::DamerauLevenshtein => "damerau-levenshtein",
        }
    }

    /// Check if this variant counts transpositions
    pub fn supports_transposition(&self) -> bool {
        matches!(
            self,
            Variant::OptimalStringAlignment | Variant::DamerauLevenshtein
        )
    }

    /// Check if this variant consults per-pair substitution overrides
    pub fn uses_substitution_overrides(&self) -> bool {
        matches!(
            self,
            Variant::Levenshtein | Variant::OptimalStringAlignment
        )
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lcs" | "default" => Ok(Variant::Lcs),
            "levenshtein" | "substitution" | "standard" => Ok(Variant::Levenshtein),
            "osa" | "optimal-string-alignment" => Ok(Variant::OptimalStringAlignment),
            "damerau-levenshtein" | "damerau" | "transposition" | "trans" => {
                Ok(Variant::DamerauLevenshtein)
            }
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lcs() {
        assert_eq!(Variant::default(), Variant::Lcs);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
            assert_eq!(variant.to_string(), variant.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("default".parse::<Variant>(), Ok(Variant::Lcs));
        assert_eq!("Substitution".parse::<Variant>(), Ok(Variant::Levenshtein));
        assert_eq!("TRANSPOSITION".parse::<Variant>(), Ok(Variant::DamerauLevenshtein));
    }

    #[test]
    fn test_unknown_variant_keeps_input() {
        let err = "Merge-And-Split".parse::<Variant>().unwrap_err();
        assert_eq!(err, ParseVariantError("Merge-And-Split".to_string()));
        assert!(err.to_string().contains("damerau-levenshtein"));
    }

    #[test]
    fn test_capabilities() {
        assert!(!Variant::Lcs.supports_transposition());
        assert!(!Variant::Levenshtein.supports_transposition());
        assert!(Variant::OptimalStringAlignment.supports_transposition());
        assert!(Variant::DamerauLevenshtein.supports_transposition());

        assert!(Variant::Levenshtein.uses_substitution_overrides());
        assert!(!Variant::DamerauLevenshtein.uses_substitution_overrides());
    }
}
