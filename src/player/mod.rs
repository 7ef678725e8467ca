//! Distle player
//!
//! The guessing side of the game: feedback filtering, candidate partitions,
//! guess selection strategies, and the stateful `Player` tying them together.

mod engine;
pub mod feedback;
pub mod partition;
pub mod strategy;

pub use engine::{Player, PlayerConfig};
pub use feedback::{Feedback, filter_candidates};
pub use partition::{GuessMetrics, calculate_entropy, calculate_max_remaining, calculate_metrics};
pub use strategy::{
    EntropyStrategy, HybridStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};
