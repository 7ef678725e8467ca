//! Distle player
//!
//! Keeps the candidate set for one game and narrows it with every piece of
//! feedback. The game itself (secret word, turn loop) lives elsewhere; the
//! player only answers "what next?" and listens.

use super::feedback::{Feedback, filter_candidates};
use super::strategy::{Strategy, StrategyType};
use crate::core::Transform;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Per-game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Guesses allowed per game
    pub max_guesses: usize,
    /// Strategy name, resolved by [`StrategyType::from_name`]
    pub strategy: String,
}

impl PlayerConfig {
    /// Settings with an explicit guess budget and strategy name
    #[must_use]
    pub const fn new(max_guesses: usize, strategy: String) -> Self {
        Self {
            max_guesses,
            strategy,
        }
    }

    /// Instantiate the configured strategy
    #[must_use]
    pub fn strategy(&self) -> StrategyType {
        StrategyType::from_name(&self.strategy)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new(10, "hybrid".to_string())
    }
}

/// Automated Distle player
pub struct Player<S: Strategy> {
    strategy: S,
    dictionary: Vec<String>,
    candidates: Vec<String>,
    max_guesses: usize,
    guesses_made: usize,
}

impl<S: Strategy> Player<S> {
    /// Create a player with no game in progress
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            dictionary: Vec::new(),
            candidates: Vec::new(),
            max_guesses: 0,
            guesses_made: 0,
        }
    }

    /// Reset for a new game over `dictionary`
    ///
    /// Empty words and repeats are dropped; the first occurrence keeps its
    /// position.
    pub fn start_new_game<I, W>(&mut self, dictionary: I, max_guesses: usize)
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut seen = FxHashSet::default();
        self.dictionary = dictionary
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| !word.is_empty() && seen.insert(word.clone()))
            .collect();
        self.candidates = self.dictionary.clone();
        self.max_guesses = max_guesses;
        self.guesses_made = 0;

        debug!(
            words = self.dictionary.len(),
            max_guesses, "started new game"
        );
    }

    /// Next guess, or `None` when out of guesses or candidates
    ///
    /// # Examples
    /// ```
    /// use distle::player::{Player, MinimaxStrategy};
    ///
    /// let mut player = Player::new(MinimaxStrategy);
    /// player.start_new_game(["cat", "cats", "at"], 3);
    ///
    /// let guess = player.make_guess().unwrap();
    /// assert!(["cat", "cats", "at"].contains(&guess.as_str()));
    /// ```
    pub fn make_guess(&mut self) -> Option<String> {
        if self.guesses_made >= self.max_guesses {
            debug!(max_guesses = self.max_guesses, "guess budget spent");
            return None;
        }

        let guess = match self.candidates.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            candidates => self
                .strategy
                .select_guess(candidates, candidates)
                .cloned(),
        }?;

        self.guesses_made += 1;
        debug!(
            %guess,
            turn = self.guesses_made,
            candidates = self.candidates.len(),
            "made guess"
        );

        Some(guess)
    }

    /// Narrow the candidates with the game's response to an incorrect guess
    ///
    /// Keeps exactly the words whose transform sequence from `guess` equals
    /// `transforms`.
    pub fn record_feedback(
        &mut self,
        guess: &str,
        edit_distance: usize,
        transforms: &[Transform],
    ) {
        let feedback = Feedback::new(guess.to_string(), edit_distance, transforms.to_vec());
        self.apply_feedback(&feedback);
    }

    /// Same as [`Player::record_feedback`] with a prepared `Feedback`
    pub fn apply_feedback(&mut self, feedback: &Feedback) {
        self.candidates = filter_candidates(&self.candidates, feedback);
    }

    /// Words still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The deduplicated dictionary of the current game
    #[must_use]
    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses_made)
    }
}
