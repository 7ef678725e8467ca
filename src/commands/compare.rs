//! Word comparison command
//!
//! Computes the distance table, the transform sequence, and the walk that
//! produced it for one source/target pair.

use crate::core::{
    DistanceTable, Step, Transform, reconstruction_steps, transform_sequence_with_table,
};

/// Result of comparing two words
pub struct ComparisonResult {
    pub source: String,
    pub target: String,
    pub distance: usize,
    pub transforms: Vec<Transform>,
    pub table: DistanceTable,
    pub steps: Vec<Step>,
}

impl ComparisonResult {
    /// Was cell `(row, col)` visited by the reconstruction walk?
    ///
    /// The final zero-cost cell counts as visited.
    #[must_use]
    pub fn on_path(&self, row: usize, col: usize) -> bool {
        let end = self.steps.last().map_or(
            (self.table.rows() - 1, self.table.cols() - 1),
            |last| (last.next_row, last.next_col),
        );
        end == (row, col) || self.steps.iter().any(|s| (s.row, s.col) == (row, col))
    }
}

/// Compare `source` against `target`
///
/// One table is built and reused for both the sequence and the walk.
#[must_use]
pub fn compare_words(source: &str, target: &str) -> ComparisonResult {
    let table = DistanceTable::build(source, target);
    let transforms = transform_sequence_with_table(source, target, &table);
    let steps = reconstruction_steps(source, target, &table);

    ComparisonResult {
        source: source.to_string(),
        target: target.to_string(),
        distance: table.distance(),
        transforms,
        table,
        steps,
    }
}
