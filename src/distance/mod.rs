//! Weighted distance algorithms.
//!
//! Each function fills a dynamic-programming table over the characters of
//! `source` and `target` and reads the result from its last cell:
//! - **LCS**: shared-subsequence weight, rolling two rows
//! - **Levenshtein**: insert/delete/substitute, rolling two rows
//! - **OSA**: Levenshtein plus adjacent transpositions, rolling three rows
//! - **Damerau-Levenshtein**: full table with last-occurrence bookkeeping
//!
//! These functions trust their [`CostProfile`]; validation and the
//! identical-input shortcut live in [`DistanceEngine`](crate::DistanceEngine).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cost::CostProfile;
use crate::substitution::SubstitutionOverrides;

mod table;

use table::Table;

type Chars = SmallVec<[char; 32]>;

#[inline(always)]
fn min_of<const N: usize>(candidates: [f64; N]) -> f64 {
    candidates.into_iter().fold(f64::INFINITY, f64::min)
}

/// Longest-common-subsequence weight of `source` and `target`.
///
/// Each character of the common subsequence contributes
/// `addition + deletion`; unmatched characters contribute nothing. The
/// result therefore grows with similarity.
///
/// # Example
///
/// ```rust
/// use quill::{distance::lcs_distance, CostProfile};
///
/// let mut costs = CostProfile::default();
/// costs.set_addition_cost(10.0)?;
///
/// // "oat" is shared: 3 * (10 + 1)
/// assert_eq!(lcs_distance("oat", "boat", &costs), 33.0);
/// # Ok::<(), quill::DistanceError>(())
/// ```
pub fn lcs_distance(source: &str, target: &str, costs: &CostProfile) -> f64 {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();
    lcs(&source_chars, &target_chars, costs)
}

pub(crate) fn lcs(source: &[char], target: &[char], costs: &CostProfile) -> f64 {
    let n = target.len();
    let shared = costs.addition() + costs.deletion();

    // Row 0 and column 0 stay zero
    let mut prev_row = vec![0.0; n + 1];
    let mut curr_row = vec![0.0; n + 1];

    for &a in source {
        curr_row[0] = 0.0;

        for j in 1..=n {
            curr_row[j] = if a == target[j - 1] {
                prev_row[j - 1] + shared
            } else {
                prev_row[j].max(curr_row[j - 1])
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Weighted Levenshtein distance from `source` to `target`.
///
/// Substituting two different characters costs the pair's rule in
/// `overrides` when one is registered, the profile's substitution weight
/// otherwise. Row 0 and column 0 of the table hold plain character counts;
/// the addition and deletion weights apply to interior cells only.
///
/// # Example
///
/// ```rust
/// use quill::{distance::levenshtein_distance, CostProfile, SubstitutionOverrides};
///
/// let costs = CostProfile::default();
/// let mut overrides = SubstitutionOverrides::new();
/// assert_eq!(levenshtein_distance("kitten", "sitting", &costs, &overrides), 3.0);
///
/// overrides.insert('g', 'b', 0.5)?;
/// assert_eq!(levenshtein_distance("goat", "boat", &costs, &overrides), 0.5);
/// # Ok::<(), quill::DistanceError>(())
/// ```
pub fn levenshtein_distance(
    source: &str,
    target: &str,
    costs: &CostProfile,
    overrides: &SubstitutionOverrides,
) -> f64 {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();
    levenshtein(&source_chars, &target_chars, costs, overrides)
}

pub(crate) fn levenshtein(
    source: &[char],
    target: &[char],
    costs: &CostProfile,
    overrides: &SubstitutionOverrides,
) -> f64 {
    let n = target.len();
    let (addition, deletion) = (costs.addition(), costs.deletion());

    // Borders count characters; the operation costs only weight interior cells.
    let mut prev_row: Vec<f64> = (0..=n).map(|j| j as f64).collect();
    let mut curr_row = vec![0.0; n + 1];

    for (i, &a) in source.iter().enumerate() {
        curr_row[0] = (i + 1) as f64;

        for j in 1..=n {
            let substitution = overrides.cost(a, target[j - 1], costs.substitution());

            curr_row[j] = min_of([
                prev_row[j - 1] + substitution,
                prev_row[j] + deletion,
                curr_row[j - 1] + addition,
            ]);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Optimal string alignment distance from `source` to `target`.
///
/// Levenshtein plus swaps of two adjacent characters, under the restriction
/// that a swapped pair is never edited again. Overrides apply to
/// substitutions as in [`levenshtein_distance`].
///
/// # Example
///
/// ```rust
/// use quill::{distance::osa_distance, CostProfile, SubstitutionOverrides};
///
/// let costs = CostProfile::default();
/// let overrides = SubstitutionOverrides::new();
/// assert_eq!(osa_distance("test", "tset", &costs, &overrides), 1.0);
/// // The swapped pair cannot also receive an insertion.
/// assert_eq!(osa_distance("ca", "abc", &costs, &overrides), 3.0);
/// ```
pub fn osa_distance(
    source: &str,
    target: &str,
    costs: &CostProfile,
    overrides: &SubstitutionOverrides,
) -> f64 {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();
    osa(&source_chars, &target_chars, costs, overrides)
}

pub(crate) fn osa(
    source: &[char],
    target: &[char],
    costs: &CostProfile,
    overrides: &SubstitutionOverrides,
) -> f64 {
    let n = target.len();
    let (addition, deletion) = (costs.addition(), costs.deletion());

    // Need three rows for transposition
    let mut two_ago = vec![0.0; n + 1];
    let mut prev_row: Vec<f64> = (0..=n).map(|j| j as f64).collect();
    let mut curr_row = vec![0.0; n + 1];

    for i in 1..=source.len() {
        curr_row[0] = i as f64;

        for j in 1..=n {
            let substitution = overrides.cost(source[i - 1], target[j - 1], costs.substitution());

            curr_row[j] = min_of([
                prev_row[j] + deletion,
                curr_row[j - 1] + addition,
                prev_row[j - 1] + substitution,
            ]);

            if i > 1
                && j > 1
                && source[i - 1] == target[j - 2]
                && source[i - 2] == target[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + costs.transposition());
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Damerau-Levenshtein distance from `source` to `target`.
///
/// Counts insertions, deletions, substitutions and swaps of adjacent
/// characters, allowing edits between the two halves of a swap. Only the
/// profile's scalar substitution weight is used.
///
/// # Example
///
/// ```rust
/// use quill::{distance::damerau_levenshtein_distance, CostProfile};
///
/// let costs = CostProfile::default();
/// assert_eq!(damerau_levenshtein_distance("ab", "ba", &costs), 1.0);
/// // Swap "ca" -> "ac", then insert 'b'.
/// assert_eq!(damerau_levenshtein_distance("ca", "abc", &costs), 2.0);
/// ```
pub fn damerau_levenshtein_distance(source: &str, target: &str, costs: &CostProfile) -> f64 {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();
    damerau_levenshtein(&source_chars, &target_chars, costs)
}

pub(crate) fn damerau_levenshtein(source: &[char], target: &[char], costs: &CostProfile) -> f64 {
    let m = source.len();
    let n = target.len();
    let addition = costs.addition();
    let deletion = costs.deletion();
    let substitution = costs.substitution();
    let transposition = costs.transposition();

    // Handle edge cases
    if m == 0 {
        return n as f64 * addition;
    }
    if n == 0 {
        return m as f64 * deletion;
    }

    let mismatch = |a: char, b: char| if a == b { 0.0 } else { substitution };

    // Cell (i, j) holds the distance between source[..=i] and target[..=j].
    let mut table = Table::new(m, n);
    if source[0] != target[0] {
        table[(0, 0)] = substitution.min(addition + deletion);
    }

    for i in 1..m {
        table[(i, 0)] = min_of([
            table[(i - 1, 0)] + deletion,
            (i + 1) as f64 * deletion + addition,
            i as f64 * deletion + mismatch(source[i], target[0]),
        ]);
    }
    for j in 1..n {
        table[(0, j)] = min_of([
            (j + 1) as f64 * addition + deletion,
            table[(0, j - 1)] + addition,
            j as f64 * addition + mismatch(source[0], target[j]),
        ]);
    }

    // Last row of source in which each character was seen, rows < i.
    let mut last_row: FxHashMap<char, usize> = FxHashMap::default();
    last_row.insert(source[0], 0);

    for i in 1..m {
        // Last column < j whose character matched source[i].
        let mut last_match_col = (source[i] == target[0]).then_some(0);

        for j in 1..n {
            let i_swap = last_row.get(&target[j]).copied();
            let j_swap = last_match_col;

            let mut replace = table[(i - 1, j - 1)];
            if source[i] == target[j] {
                last_match_col = Some(j);
            } else {
                replace += substitution;
            }

            let swap = match (i_swap, j_swap) {
                (Some(i_swap), Some(j_swap)) => {
                    let before = if i_swap == 0 && j_swap == 0 {
                        0.0
                    } else {
                        table[(i_swap.saturating_sub(1), j_swap.saturating_sub(1))]
                    };
                    before
                        + (i - i_swap - 1) as f64 * deletion
                        + (j - j_swap - 1) as f64 * addition
                        + transposition
                }
                _ => f64::INFINITY,
            };

            table[(i, j)] = min_of([
                table[(i - 1, j)] + deletion,
                table[(i, j - 1)] + addition,
                replace,
                swap,
            ]);
        }

        last_row.insert(source[i], i);
    }

    table[(m - 1, n - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> CostProfile {
        CostProfile::default()
    }

    fn no_overrides() -> SubstitutionOverrides {
        SubstitutionOverrides::new()
    }

    #[test]
    fn test_lcs_counts_shared_characters() {
        let costs = unit();
        assert_eq!(lcs_distance("abcde", "ace", &costs), 6.0);
        assert_eq!(lcs_distance("abc", "xyz", &costs), 0.0);
        assert_eq!(lcs_distance("", "abc", &costs), 0.0);
        assert_eq!(lcs_distance("abc", "", &costs), 0.0);
    }

    #[test]
    fn test_lcs_scaled_by_addition_and_deletion() {
        let costs = CostProfile::new(10.0, 1.0, 1.0, 6.0).unwrap();
        assert_eq!(lcs_distance("oat", "boat", &costs), 33.0);

        let costs = CostProfile::new(1.0, 10.0, 1.0, 6.0).unwrap();
        assert_eq!(lcs_distance("oats", "oat", &costs), 33.0);
    }

    #[test]
    fn test_levenshtein_unit_costs() {
        let (costs, overrides) = (unit(), no_overrides());
        assert_eq!(levenshtein_distance("kitten", "sitting", &costs, &overrides), 3.0);
        assert_eq!(levenshtein_distance("saturday", "sunday", &costs, &overrides), 3.0);
        assert_eq!(levenshtein_distance("test", "tset", &costs, &overrides), 2.0);
        assert_eq!(levenshtein_distance("", "test", &costs, &overrides), 4.0);
        assert_eq!(levenshtein_distance("test", "", &costs, &overrides), 4.0);
    }

    #[test]
    fn test_levenshtein_borders_count_characters() {
        let costs = CostProfile::new(10.0, 1.0, 1.0, 6.0).unwrap();
        let overrides = no_overrides();
        assert_eq!(levenshtein_distance("", "ab", &costs, &overrides), 2.0);
        assert_eq!(levenshtein_distance("ab", "", &costs, &overrides), 2.0);
        // Leading 'x' matches, then the border column supplies "ab".
        assert_eq!(levenshtein_distance("x", "xab", &costs, &overrides), 3.0);
        assert_eq!(osa_distance("", "ab", &costs, &overrides), 2.0);
        assert_eq!(osa_distance("x", "xab", &costs, &overrides), 3.0);
    }

    #[test]
    fn test_levenshtein_prefers_cheaper_path() {
        // Substitution dearer than delete + insert.
        let costs = CostProfile::new(1.0, 1.0, 5.0, 1.0).unwrap();
        assert_eq!(levenshtein_distance("a", "b", &costs, &no_overrides()), 2.0);
    }

    #[test]
    fn test_levenshtein_override() {
        let costs = unit();
        let overrides = SubstitutionOverrides::from_rules(&[('g', 'b', 0.5)]).unwrap();
        assert_eq!(levenshtein_distance("goat", "boat", &costs, &overrides), 0.5);
        assert_eq!(levenshtein_distance("boat", "goat", &costs, &overrides), 0.5);
        assert_eq!(levenshtein_distance("coat", "boat", &costs, &overrides), 1.0);
    }

    #[test]
    fn test_osa_transpositions() {
        let (costs, overrides) = (unit(), no_overrides());
        assert_eq!(osa_distance("ab", "ba", &costs, &overrides), 1.0);
        assert_eq!(osa_distance("abc", "acb", &costs, &overrides), 1.0);
        assert_eq!(osa_distance("abcd", "badc", &costs, &overrides), 2.0);
        assert_eq!(osa_distance("ca", "abc", &costs, &overrides), 3.0);
    }

    #[test]
    fn test_osa_transposition_cost() {
        let costs = CostProfile::new(1.0, 1.0, 1.0, 1.5).unwrap();
        assert_eq!(osa_distance("ab", "ba", &costs, &no_overrides()), 1.5);

        // Two substitutions are cheaper than a swap here.
        let costs = CostProfile::new(1.0, 1.0, 0.5, 1.5).unwrap();
        assert_eq!(osa_distance("ab", "ba", &costs, &no_overrides()), 1.0);
    }

    #[test]
    fn test_damerau_levenshtein_unit_costs() {
        let costs = unit();
        assert_eq!(damerau_levenshtein_distance("ab", "ba", &costs), 1.0);
        assert_eq!(damerau_levenshtein_distance("test", "tset", &costs), 1.0);
        assert_eq!(damerau_levenshtein_distance("abc", "acb", &costs), 1.0);
        assert_eq!(damerau_levenshtein_distance("abcd", "badc", &costs), 2.0);
        assert_eq!(damerau_levenshtein_distance("ca", "abc", &costs), 2.0);
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting", &costs), 3.0);
    }

    #[test]
    fn test_damerau_levenshtein_empty_and_single() {
        let costs = CostProfile::new(2.0, 3.0, 1.0, 3.0).unwrap();
        assert_eq!(damerau_levenshtein_distance("", "abc", &costs), 6.0);
        assert_eq!(damerau_levenshtein_distance("abc", "", &costs), 9.0);
        assert_eq!(damerau_levenshtein_distance("a", "b", &costs), 1.0);
        assert_eq!(damerau_levenshtein_distance("a", "a", &costs), 0.0);
    }

    #[test]
    fn test_damerau_levenshtein_weighted() {
        let costs = CostProfile::new(0.2, 0.2, 1.0, 0.5).unwrap();
        assert_eq!(damerau_levenshtein_distance("ogat", "goat", &costs), 0.4);
    }

    #[test]
    fn test_damerau_levenshtein_ignores_overrides() {
        let costs = unit();
        assert_eq!(damerau_levenshtein_distance("goat", "boat", &costs), 1.0);
    }

    #[test]
    fn test_damerau_levenshtein_no_state_between_calls() {
        let costs = unit();
        let first = damerau_levenshtein_distance("ca", "abc", &costs);
        damerau_levenshtein_distance("zyxwvcba", "abcvwxyz", &costs);
        assert_eq!(damerau_levenshtein_distance("ca", "abc", &costs), first);
    }

    #[test]
    fn test_unicode_characters() {
        let (costs, overrides) = (unit(), no_overrides());
        assert_eq!(levenshtein_distance("café", "cafe", &costs, &overrides), 1.0);
        assert_eq!(osa_distance("日本", "本日", &costs, &overrides), 1.0);
        assert_eq!(damerau_levenshtein_distance("日本", "本日", &costs), 1.0);
        assert_eq!(lcs_distance("日本語", "日本", &costs), 4.0);
    }
}
