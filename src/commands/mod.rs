//! Command implementations

pub mod compare;
pub mod suggest;

pub use compare::{ComparisonResult, compare_words};
pub use suggest::{FeedbackSource, SuggestConfig, SuggestResult, run_suggest};

use crate::core::TransformError;
use thiserror::Error;

/// Errors surfaced by command implementations
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid transform sequence: {0}")]
    InvalidTransforms(#[from] TransformError),
    #[error("no candidate words given")]
    NoCandidates,
    #[error("guess must not be empty")]
    EmptyGuess,
}
