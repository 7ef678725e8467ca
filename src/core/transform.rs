//! Transform sequence reconstruction
//!
//! Walks a completed `DistanceTable` from the full-string cell back to a
//! zero-cost cell and records one canonical minimal sequence of operations.
//!
//! # Tie-breaking
//! At every step the reachable predecessors are scanned in the fixed order
//! Replacement → Transposition → Insertion → Deletion, and the first one with
//! a strictly smaller table value wins. A replacement whose two characters
//! already agree is a free match and is never recorded.

use super::{DistanceTable, Transform};
use tracing::trace;

/// Edit distance between `source` and `target`
///
/// Counts insertions, deletions, replacements and adjacent transpositions.
///
/// # Examples
/// ```
/// use distle::core::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("ab", "ba"), 1);
/// assert_eq!(distance("", ""), 0);
/// ```
#[must_use]
pub fn distance(source: &str, target: &str) -> usize {
    if source == target {
        return 0;
    }
    DistanceTable::build(source, target).distance()
}

/// Top-down transform sequence turning `source` into `target`
///
/// Builds the table internally. Use [`transform_sequence_with_table`] when the
/// table is already at hand.
///
/// # Examples
/// ```
/// use distle::core::{Transform, transform_sequence};
///
/// assert_eq!(transform_sequence("cat", "cats"), vec![Transform::Insertion]);
/// assert!(transform_sequence("cat", "cat").is_empty());
/// ```
#[must_use]
pub fn transform_sequence(source: &str, target: &str) -> Vec<Transform> {
    let s0: Vec<char> = source.chars().collect();
    let s1: Vec<char> = target.chars().collect();
    let table = DistanceTable::from_chars(&s0, &s1);
    reconstruct(&s0, &s1, &table)
}

/// Top-down transform sequence using a table built for this exact pair
///
/// The order is the order steps are found walking backward from the
/// bottom-right cell, i.e. largest subproblem first.
///
/// `table` must come from `DistanceTable::build(source, target)`. Passing a
/// table for any other pair is a caller bug: debug builds assert the
/// dimensions, release builds return an unspecified sequence or panic.
///
/// # Examples
/// ```
/// use distle::core::{DistanceTable, Transform, transform_sequence_with_table};
///
/// let table = DistanceTable::build("ab", "ba");
/// let seq = transform_sequence_with_table("ab", "ba", &table);
/// assert_eq!(seq, vec![Transform::Transposition]);
/// assert_eq!(table.distance(), 1);
/// ```
#[must_use]
pub fn transform_sequence_with_table(
    source: &str,
    target: &str,
    table: &DistanceTable,
) -> Vec<Transform> {
    let s0: Vec<char> = source.chars().collect();
    let s1: Vec<char> = target.chars().collect();
    reconstruct(&s0, &s1, table)
}

/// One move of the backward walk through the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Cursor row before the move
    pub row: usize,
    /// Cursor column before the move
    pub col: usize,
    /// Cursor row after the move
    pub next_row: usize,
    /// Cursor column after the move
    pub next_col: usize,
    /// Kind of edit the move stands for
    pub transform: Transform,
    /// Replacement of a character by itself; not part of the sequence
    pub free_match: bool,
}

/// Every move of the reconstruction walk, free matches included
///
/// Same preconditions as [`transform_sequence_with_table`].
///
/// # Examples
/// ```
/// use distle::core::{DistanceTable, Transform, reconstruction_steps};
///
/// let table = DistanceTable::build("cat", "at");
/// let steps = reconstruction_steps("cat", "at", &table);
///
/// // t=t and a=a ride along for free, then the c is dropped
/// assert_eq!(steps.len(), 3);
/// assert!(steps[0].free_match && steps[1].free_match);
/// assert_eq!(steps[2].transform, Transform::Deletion);
/// ```
#[must_use]
pub fn reconstruction_steps(source: &str, target: &str, table: &DistanceTable) -> Vec<Step> {
    let s0: Vec<char> = source.chars().collect();
    let s1: Vec<char> = target.chars().collect();
    walk(&s0, &s1, table)
}

fn reconstruct(s0: &[char], s1: &[char], table: &DistanceTable) -> Vec<Transform> {
    walk(s0, s1, table)
        .into_iter()
        .filter(|step| !step.free_match)
        .map(|step| step.transform)
        .collect()
}

fn walk(s0: &[char], s1: &[char], table: &DistanceTable) -> Vec<Step> {
    debug_assert_eq!(
        (table.rows(), table.cols()),
        (s0.len() + 1, s1.len() + 1),
        "table does not belong to this string pair"
    );

    let mut steps = Vec::with_capacity(table.distance());
    let mut row = s0.len();
    let mut col = s1.len();

    while table.get(row, col) != 0 {
        let Some((transform, next_row, next_col)) = best_step(s0, s1, table, row, col) else {
            break;
        };

        let free_match = transform == Transform::Replacement && s0[row - 1] == s1[col - 1];
        trace!(row, col, ?transform, free_match, "reconstruction step");

        steps.push(Step {
            row,
            col,
            next_row,
            next_col,
            transform,
            free_match,
        });

        row = next_row;
        col = next_col;
    }

    steps
}

/// Pick the predecessor of `(row, col)` with the smallest table value
///
/// Earlier kinds in scan order keep ties. Returns `None` only at `(0, 0)`.
fn best_step(
    s0: &[char],
    s1: &[char],
    table: &DistanceTable,
    row: usize,
    col: usize,
) -> Option<(Transform, usize, usize)> {
    let mut candidates: [Option<(Transform, usize, usize)>; 4] = [None; 4];

    if row >= 1 && col >= 1 {
        candidates[0] = Some((Transform::Replacement, row - 1, col - 1));
    }
    if row >= 2 && col >= 2 && s0[row - 1] == s1[col - 2] && s0[row - 2] == s1[col - 1] {
        candidates[1] = Some((Transform::Transposition, row - 2, col - 2));
    }
    if col >= 1 {
        candidates[2] = Some((Transform::Insertion, row, col - 1));
    }
    if row >= 1 {
        candidates[3] = Some((Transform::Deletion, row - 1, col));
    }

    let mut best: Option<(usize, (Transform, usize, usize))> = None;
    for step in candidates.into_iter().flatten() {
        let value = table.get(step.1, step.2);
        if best.is_none_or(|(best_value, _)| value < best_value) {
            best = Some((value, step));
        }
    }

    best.map(|(_, step)| step)
}
