//! Suggest command
//!
//! Applies one round of feedback to a word list and asks the player for the
//! next guess.

use super::CommandError;
use crate::core::parse_sequence;
use crate::player::{
    Feedback, GuessMetrics, Player, PlayerConfig, Strategy, calculate_metrics,
};

/// Where the feedback for the guess comes from
pub enum FeedbackSource {
    /// Compute it against a known secret word
    Target(String),
    /// Use observed letter codes, e.g. `"RRI"`
    Transforms(String),
}

/// Configuration for one suggestion round
pub struct SuggestConfig {
    pub guess: String,
    pub source: FeedbackSource,
    pub words: Vec<String>,
    pub max_guesses: usize,
}

impl SuggestConfig {
    #[must_use]
    pub fn new(guess: String, source: FeedbackSource, words: Vec<String>) -> Self {
        Self {
            guess,
            source,
            words,
            max_guesses: PlayerConfig::default().max_guesses,
        }
    }
}

/// Result of a suggestion round
pub struct SuggestResult {
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub remaining: Vec<String>,
    pub next_guess: Option<String>,
    /// No guess was made because the game allows no more guesses
    pub budget_exhausted: bool,
    /// How the next guess splits the remaining words (when more than one)
    pub metrics: Option<GuessMetrics>,
}

/// Filter `config.words` with the feedback for `config.guess` and pick a next guess
///
/// # Errors
///
/// Returns an error if:
/// - The guess is empty
/// - The word list is empty
/// - Observed transform codes cannot be parsed
pub fn run_suggest<S: Strategy>(
    config: SuggestConfig,
    strategy: S,
) -> Result<SuggestResult, CommandError> {
    if config.guess.is_empty() {
        return Err(CommandError::EmptyGuess);
    }
    if config.words.is_empty() {
        return Err(CommandError::NoCandidates);
    }

    let feedback = match config.source {
        FeedbackSource::Target(target) => Feedback::calculate(&config.guess, &target),
        FeedbackSource::Transforms(codes) => {
            let transforms = parse_sequence(&codes)?;
            Feedback::new(config.guess.clone(), transforms.len(), transforms)
        }
    };

    let mut player = Player::new(strategy);
    player.start_new_game(config.words, config.max_guesses);
    let candidates_before = player.candidates().len();

    player.apply_feedback(&feedback);
    let budget_exhausted = player.guesses_remaining() == 0;
    let next_guess = player.make_guess();
    let remaining = player.candidates().to_vec();

    let metrics = match &next_guess {
        Some(guess) if remaining.len() > 1 => Some(calculate_metrics(guess, &remaining)),
        _ => None,
    };

    Ok(SuggestResult {
        feedback,
        candidates_before,
        remaining,
        next_guess,
        budget_exhausted,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transform;
    use crate::player::{EntropyStrategy, MinimaxStrategy};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    const DICTIONARY: &[&str] = &[
        "cat", "cats", "at", "act", "bat", "tac", "cast", "coat", "chat", "scat",
    ];

    #[test]
    fn suggest_with_target() {
        let config = SuggestConfig::new(
            "cast".to_string(),
            FeedbackSource::Target("coat".to_string()),
            words(DICTIONARY),
        );
        let result = run_suggest(config, MinimaxStrategy).unwrap();

        assert_eq!(result.feedback.distance, 2);
        assert_eq!(result.candidates_before, DICTIONARY.len());
        assert_eq!(result.remaining, words(&["coat", "chat"]));

        let next = result.next_guess.unwrap();
        assert!(next == "coat" || next == "chat");
        assert_eq!(result.metrics.map(|m| m.max_partition), Some(1));
        assert!(!result.budget_exhausted);
    }

    #[test]
    fn suggest_with_observed_codes() {
        let config = SuggestConfig::new(
            "cat".to_string(),
            FeedbackSource::Transforms("T".to_string()),
            words(DICTIONARY),
        );
        let result = run_suggest(config, EntropyStrategy).unwrap();

        assert_eq!(result.feedback.transforms, vec![Transform::Transposition]);
        assert_eq!(result.feedback.distance, 1);
        assert_eq!(result.remaining, words(&["act"]));
        assert_eq!(result.next_guess.as_deref(), Some("act"));
        assert!(result.metrics.is_none());
    }

    #[test]
    fn suggest_keeps_target() {
        for &target in DICTIONARY {
            let config = SuggestConfig::new(
                "scat".to_string(),
                FeedbackSource::Target(target.to_string()),
                words(DICTIONARY),
            );
            let result = run_suggest(config, EntropyStrategy).unwrap();
            assert!(result.remaining.iter().any(|w| w == target), "{target}");
        }
    }

    #[test]
    fn suggest_rejects_bad_codes() {
        let config = SuggestConfig::new(
            "cat".to_string(),
            FeedbackSource::Transforms("RX".to_string()),
            words(DICTIONARY),
        );
        assert!(matches!(
            run_suggest(config, EntropyStrategy),
            Err(CommandError::InvalidTransforms(_))
        ));
    }

    #[test]
    fn suggest_rejects_empty_inputs() {
        let config = SuggestConfig::new(
            "cat".to_string(),
            FeedbackSource::Target("at".to_string()),
            Vec::new(),
        );
        assert!(matches!(
            run_suggest(config, EntropyStrategy),
            Err(CommandError::NoCandidates)
        ));

        let config = SuggestConfig::new(
            String::new(),
            FeedbackSource::Target("at".to_string()),
            words(DICTIONARY),
        );
        assert!(matches!(
            run_suggest(config, EntropyStrategy),
            Err(CommandError::EmptyGuess)
        ));
    }

    #[test]
    fn suggest_with_impossible_feedback() {
        let config = SuggestConfig::new(
            "cat".to_string(),
            FeedbackSource::Transforms("TTTT".to_string()),
            words(DICTIONARY),
        );
        let result = run_suggest(config, EntropyStrategy).unwrap();
        assert!(result.remaining.is_empty());
        assert!(result.next_guess.is_none());
        assert!(!result.budget_exhausted);
    }

    #[test]
    fn suggest_with_no_guesses_left() {
        let mut config = SuggestConfig::new(
            "cat".to_string(),
            FeedbackSource::Target("cats".to_string()),
            words(&["cats", "cast", "coat"]),
        );
        config.max_guesses = 0;
        let result = run_suggest(config, EntropyStrategy).unwrap();

        assert_eq!(result.remaining, words(&["cats", "cast", "coat"]));
        assert!(result.next_guess.is_none());
        assert!(result.budget_exhausted);
        assert!(result.metrics.is_none());
    }

    #[test]
    fn suggest_with_last_guess_available() {
        let mut config = SuggestConfig::new(
            "cat".to_string(),
            FeedbackSource::Target("cats".to_string()),
            words(&["cats", "cast", "coat"]),
        );
        config.max_guesses = 1;
        let result = run_suggest(config, EntropyStrategy).unwrap();

        assert!(result.next_guess.is_some());
        assert!(!result.budget_exhausted);
    }
}
