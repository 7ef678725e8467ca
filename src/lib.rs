//! Distle
//!
//! Damerau-Levenshtein style edit distance with canonical transform
//! reconstruction, plus a player that narrows a word list from
//! `(guess, distance, transforms)` feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use distle::core::{DistanceTable, Transform, distance, transform_sequence_with_table};
//!
//! assert_eq!(distance("kitten", "sitting"), 3);
//!
//! // Build once, reuse for both the distance and the sequence
//! let table = DistanceTable::build("ab", "ba");
//! let transforms = transform_sequence_with_table("ab", "ba", &table);
//! assert_eq!(table.distance(), 1);
//! assert_eq!(transforms, vec![Transform::Transposition]);
//! ```

// Edit distance engine
pub mod core;

// Guessing strategy and candidate filtering
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
