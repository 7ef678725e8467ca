//! Candidate partitions by feedback
//!
//! A guess splits the candidate set into groups that would all return the same
//! transform sequence. Group sizes drive the strategies: Shannon entropy for
//! expected information, the largest group for the worst case.

use crate::core::{Transform, transform_sequence};
use rustc_hash::FxHashMap;

/// Metrics describing how well a guess splits the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy of the partition (bits)
    pub entropy: f64,
    /// Expected number of candidates left after the guess
    pub expected_remaining: f64,
    /// Size of the largest group (worst case)
    pub max_partition: usize,
}

/// Count candidates per transform sequence produced by `guess`
#[must_use]
pub fn group_by_transforms(
    guess: &str,
    candidates: &[String],
) -> FxHashMap<Vec<Transform>, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts
            .entry(transform_sequence(guess, candidate))
            .or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a guess against the candidates
///
/// # Examples
/// ```
/// use distle::player::calculate_entropy;
///
/// let candidates: Vec<String> = ["cats", "at"].map(String::from).to_vec();
/// // [I] and [D] are different feedback: one bit
/// assert!((calculate_entropy("cat", &candidates) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &str, candidates: &[String]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&group_by_transforms(guess, candidates))
}

/// Worst-case number of candidates left after `guess`
#[must_use]
pub fn calculate_max_remaining(guess: &str, candidates: &[String]) -> usize {
    group_by_transforms(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// H = -Σ p · log₂(p) over the group sizes
#[must_use]
pub fn shannon_entropy(counts: &FxHashMap<Vec<Transform>, usize>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy, expected remaining, and worst case in one pass
#[must_use]
pub fn calculate_metrics(guess: &str, candidates: &[String]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = group_by_transforms(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().max().copied().unwrap_or(0),
    }
}
