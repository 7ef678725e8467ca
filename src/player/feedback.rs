//! Distle feedback and candidate filtering
//!
//! After an incorrect guess the game reports the guess, its edit distance to
//! the secret word, and the top-down transform sequence from guess to secret.
//! A candidate stays in play only if it would have produced the same
//! transform sequence.

use crate::core::{
    DistanceTable, Transform, format_sequence, transform_sequence, transform_sequence_with_table,
};
use rayon::prelude::*;
use std::fmt;
use tracing::debug;

/// Feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub guess: String,
    pub distance: usize,
    pub transforms: Vec<Transform>,
}

impl Feedback {
    /// Create feedback from already-known parts
    #[must_use]
    pub const fn new(guess: String, distance: usize, transforms: Vec<Transform>) -> Self {
        Self {
            guess,
            distance,
            transforms,
        }
    }

    /// Compute the feedback the game gives when `guess` is played against `target`
    ///
    /// One table serves both the distance and the transform sequence.
    ///
    /// # Examples
    /// ```
    /// use distle::core::Transform;
    /// use distle::player::Feedback;
    ///
    /// let feedback = Feedback::calculate("cat", "cats");
    /// assert_eq!(feedback.distance, 1);
    /// assert_eq!(feedback.transforms, vec![Transform::Insertion]);
    /// assert!(!feedback.is_solved());
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Self {
        if guess == target {
            return Self::new(guess.to_string(), 0, Vec::new());
        }

        let table = DistanceTable::build(guess, target);
        let transforms = transform_sequence_with_table(guess, target, &table);
        Self::new(guess.to_string(), table.distance(), transforms)
    }

    /// The guess was the secret word
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.distance == 0
    }

    /// Would `candidate` have produced this feedback?
    ///
    /// Only the transform sequence is compared, in order.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        transform_sequence(&self.guess, candidate) == self.transforms
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (distance {}, transforms [{}])",
            self.guess,
            self.distance,
            format_sequence(&self.transforms)
        )
    }
}

/// Keep the candidates consistent with `feedback`
///
/// Order of the surviving candidates follows `candidates`.
///
/// # Examples
/// ```
/// use distle::player::{Feedback, filter_candidates};
///
/// let words: Vec<String> = ["cats", "at", "act", "scat"].map(String::from).to_vec();
/// let feedback = Feedback::calculate("cat", "act");
///
/// assert_eq!(filter_candidates(&words, &feedback), vec!["act".to_string()]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[String], feedback: &Feedback) -> Vec<String> {
    let kept: Vec<String> = candidates
        .par_iter()
        .filter(|candidate| feedback.matches(candidate))
        .cloned()
        .collect();

    debug!(
        guess = %feedback.guess,
        transforms = %format_sequence(&feedback.transforms),
        before = candidates.len(),
        after = kept.len(),
        "filtered candidates"
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Transform, distance};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    const DICTIONARY: &[&str] = &[
        "cat", "cats", "at", "act", "bat", "tac", "cast", "coat", "chat", "scat",
    ];

    #[test]
    fn calculate_matches_core() {
        for &target in DICTIONARY {
            let feedback = Feedback::calculate("cast", target);
            assert_eq!(feedback.distance, distance("cast", target));
            assert_eq!(feedback.transforms, transform_sequence("cast", target));
        }
    }

    #[test]
    fn solved_when_guess_is_target() {
        let feedback = Feedback::calculate("coat", "coat");
        assert!(feedback.is_solved());
        assert!(feedback.transforms.is_empty());
    }

    #[test]
    fn filter_keeps_identical_sequences() {
        let dictionary = words(DICTIONARY);
        let feedback = Feedback::calculate("cat", "cats");

        // All one-insertion neighbours of CAT look the same
        assert_eq!(
            filter_candidates(&dictionary, &feedback),
            words(&["cats", "cast", "coat", "chat", "scat"])
        );
    }

    #[test]
    fn filter_is_order_sensitive() {
        // CAST -> COAT and CAST -> CHAT are both [R, R]
        let dictionary = words(DICTIONARY);
        let feedback = Feedback::calculate("cast", "coat");
        assert_eq!(
            filter_candidates(&dictionary, &feedback),
            words(&["coat", "chat"])
        );

        // [D, R] and [R, D] are different feedback
        let dr = Feedback::new(
            "cast".to_string(),
            2,
            vec![Transform::Deletion, Transform::Replacement],
        );
        let rd = Feedback::new(
            "cast".to_string(),
            2,
            vec![Transform::Replacement, Transform::Deletion],
        );
        assert_eq!(filter_candidates(&dictionary, &dr), words(&["bat"]));
        assert_eq!(filter_candidates(&dictionary, &rd), words(&["act"]));
    }

    #[test]
    fn filter_never_drops_true_target() {
        let dictionary = words(DICTIONARY);
        for &guess in DICTIONARY {
            for &target in DICTIONARY {
                let feedback = Feedback::calculate(guess, target);
                let kept = filter_candidates(&dictionary, &feedback);
                assert!(kept.iter().any(|w| w == target), "{guess} -> {target}");
            }
        }
    }

    #[test]
    fn filter_drops_the_wrong_guess() {
        let dictionary = words(DICTIONARY);
        let feedback = Feedback::calculate("bat", "chat");
        let kept = filter_candidates(&dictionary, &feedback);
        assert!(!kept.iter().any(|w| w == "bat"));
    }

    #[test]
    fn filter_empty_candidates() {
        let feedback = Feedback::calculate("cat", "at");
        assert!(filter_candidates(&[], &feedback).is_empty());
    }

    #[test]
    fn display_shows_letter_codes() {
        let feedback = Feedback::calculate("kitten", "sitting");
        assert_eq!(
            feedback.to_string(),
            "kitten (distance 3, transforms [IRR])"
        );
    }
}
