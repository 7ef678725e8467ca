//! Guess selection strategies
//!
//! Every strategy scores a guess by how it partitions the candidates under
//! transform-sequence feedback. Scoring runs in parallel; ties go to the
//! earliest guess in the pool so repeated runs agree.

use super::partition::{calculate_entropy, calculate_max_remaining};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select a guess from `guess_pool` given the remaining `candidates`
    ///
    /// Returns `None` if nothing can be guessed.
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [String],
        candidates: &[String],
    ) -> Option<&'a String>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Entropy while many candidates remain, minimax near the end (default)
    Hybrid(HybridStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [String],
        candidates: &[String],
    ) -> Option<&'a String> {
        match self {
            Self::Hybrid(s) => s.select_guess(guess_pool, candidates),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "hybrid", "entropy", "minimax", "random".
    /// Defaults to hybrid if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy(EntropyStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Hybrid(HybridStrategy::default()),
        }
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hybrid(_) => "hybrid",
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Guess with the highest entropy; the earliest pool entry wins ties
#[must_use]
pub fn select_max_entropy<'a>(
    guess_pool: &'a [String],
    candidates: &[String],
) -> Option<(&'a String, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, calculate_entropy(guess, candidates)))
        .min_by(|(i1, _, e1), (i2, _, e2)| e2.total_cmp(e1).then(i1.cmp(i2)))
        .map(|(_, guess, entropy)| {
            debug!(%guess, entropy, pool = guess_pool.len(), "picked max-entropy guess");
            (guess, entropy)
        })
}

/// Guess with the smallest worst case; the earliest pool entry wins ties
#[must_use]
pub fn select_min_worst_case<'a>(
    guess_pool: &'a [String],
    candidates: &[String],
) -> Option<(&'a String, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, calculate_max_remaining(guess, candidates)))
        .min_by(|(i1, _, m1), (i2, _, m2)| match m1.cmp(m2) {
            Ordering::Equal => i1.cmp(i2),
            other => other,
        })
        .map(|(_, guess, max_remaining)| {
            debug!(%guess, max_remaining, pool = guess_pool.len(), "picked minimax guess");
            (guess, max_remaining)
        })
}

/// Highest expected information per guess
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [String],
        candidates: &[String],
    ) -> Option<&'a String> {
        select_max_entropy(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Smallest largest feedback group
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [String],
        candidates: &[String],
    ) -> Option<&'a String> {
        select_min_worst_case(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Entropy for the opening, minimax once few candidates are left
pub struct HybridStrategy {
    /// Switch to minimax when candidates <= this threshold
    pub minimax_threshold: usize,
}

impl HybridStrategy {
    /// Minimax takes over at `minimax_threshold` candidates or fewer
    #[must_use]
    pub const fn new(minimax_threshold: usize) -> Self {
        Self { minimax_threshold }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Strategy for HybridStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [String],
        candidates: &[String],
    ) -> Option<&'a String> {
        let endgame = candidates.len() <= self.minimax_threshold;
        debug!(
            candidates = candidates.len(),
            threshold = self.minimax_threshold,
            endgame,
            "hybrid mode"
        );

        if endgame {
            select_min_worst_case(guess_pool, candidates).map(|(best, _)| best)
        } else {
            select_max_entropy(guess_pool, candidates).map(|(best, _)| best)
        }
    }
}

/// Random strategy
///
/// Randomly selects one of the remaining candidates that is also guessable.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [String],
        candidates: &[String],
    ) -> Option<&'a String> {
        use rand::prelude::IndexedRandom;

        let valid_candidates: Vec<&'a String> = guess_pool
            .iter()
            .filter(|g| candidates.contains(*g))
            .collect();

        valid_candidates
            .choose(&mut rand::rng())
            .copied()
            .or_else(|| guess_pool.first())
    }
}
