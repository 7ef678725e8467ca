//! Edit distance memoization table
//!
//! `DistanceTable` holds the minimal edit cost between every prefix pair of a
//! source and a target string. Rows index the source, columns the target;
//! row and column 0 stand for the empty prefix.

use std::fmt;
use std::ops::Index;
use tracing::trace;

/// Dense row-major table of prefix edit distances
///
/// Dimensions are `(len(source) + 1) × (len(target) + 1)`, measured in
/// characters. The table is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    /// Build the complete table for transforming `source` into `target`
    ///
    /// Every interior cell is the minimum over deletion, insertion,
    /// replacement (free when the characters agree) and, where the last two
    /// source characters are the last two target characters swapped,
    /// transposition.
    ///
    /// # Examples
    /// ```
    /// use distle::core::DistanceTable;
    ///
    /// let table = DistanceTable::build("ab", "ba");
    /// assert_eq!(table.rows(), 3);
    /// assert_eq!(table.cols(), 3);
    /// assert_eq!(table.distance(), 1); // one transposition
    /// ```
    #[must_use]
    pub fn build(source: &str, target: &str) -> Self {
        let s0: Vec<char> = source.chars().collect();
        let s1: Vec<char> = target.chars().collect();
        Self::from_chars(&s0, &s1)
    }

    /// Build the table from pre-split character slices
    #[must_use]
    pub fn from_chars(s0: &[char], s1: &[char]) -> Self {
        let rows = s0.len() + 1;
        let cols = s1.len() + 1;
        let mut table = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };

        // Gutters: pure deletions / insertions against the empty prefix
        for r in 0..rows {
            table.set(r, 0, r);
        }
        for c in 0..cols {
            table.set(0, c, c);
        }

        for r in 1..rows {
            for c in 1..cols {
                let deletion = table.get(r - 1, c) + 1;
                let insertion = table.get(r, c - 1) + 1;
                let replacement = if s0[r - 1] == s1[c - 1] {
                    table.get(r - 1, c - 1)
                } else {
                    table.get(r - 1, c - 1) + 1
                };

                let mut best = deletion.min(insertion).min(replacement);

                if r >= 2 && c >= 2 && s0[r - 1] == s1[c - 2] && s0[r - 2] == s1[c - 1] {
                    best = best.min(table.get(r - 2, c - 2) + 1);
                }

                table.set(r, c, best);
            }
        }

        trace!(
            rows,
            cols,
            distance = table.distance(),
            "built edit distance table"
        );

        table
    }

    /// Number of rows (`len(source) + 1`)
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(target) + 1`)
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of transforming the first `row` source characters into the first
    /// `col` target characters
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// The full-string distance (bottom-right cell)
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Iterate over the rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols)
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }
}

impl Index<(usize, usize)> for DistanceTable {
    type Output = usize;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(table: &DistanceTable) -> Vec<Vec<usize>> {
        table.iter_rows().map(<[usize]>::to_vec).collect()
    }

    #[test]
    fn empty_strings_single_cell() {
        let table = DistanceTable::build("", "");
        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 1);
        assert_eq!(table.distance(), 0);
    }

    #[test]
    fn empty_source_is_pure_insertion() {
        let table = DistanceTable::build("", "abc");
        assert_eq!(rows_of(&table), vec![vec![0, 1, 2, 3]]);
        assert_eq!(table.distance(), 3);
    }

    #[test]
    fn empty_target_is_pure_deletion() {
        let table = DistanceTable::build("abc", "");
        assert_eq!(rows_of(&table), vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(table.distance(), 3);
    }

    #[test]
    fn gutters_count_prefix_length() {
        let table = DistanceTable::build("kitten", "sitting");
        for r in 0..table.rows() {
            assert_eq!(table.get(r, 0), r);
        }
        for c in 0..table.cols() {
            assert_eq!(table.get(0, c), c);
        }
    }

    #[test]
    fn kitten_sitting_full_table() {
        let table = DistanceTable::build("kitten", "sitting");
        let expected = vec![
            vec![0, 1, 2, 3, 4, 5, 6, 7],
            vec![1, 1, 2, 3, 4, 5, 6, 7],
            vec![2, 2, 1, 2, 3, 4, 5, 6],
            vec![3, 3, 2, 1, 2, 3, 4, 5],
            vec![4, 4, 3, 2, 1, 2, 3, 4],
            vec![5, 5, 4, 3, 2, 2, 3, 4],
            vec![6, 6, 5, 4, 3, 3, 2, 3],
        ];
        assert_eq!(rows_of(&table), expected);
        assert_eq!(table.distance(), 3);
    }

    #[test]
    fn transposition_costs_one() {
        let table = DistanceTable::build("ab", "ba");
        assert_eq!(rows_of(&table), vec![vec![0, 1, 2], vec![1, 1, 1], vec![2, 1, 1]]);
    }

    #[test]
    fn transposition_requires_swapped_pair() {
        // "ab" -> "bc" has no swapped pair, so it stays at two replacements
        let table = DistanceTable::build("ab", "bc");
        assert_eq!(table.distance(), 2);
    }

    #[test]
    fn matching_characters_are_free() {
        let table = DistanceTable::build("cat", "cat");
        for i in 0..table.rows() {
            assert_eq!(table[(i, i)], 0);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let table = DistanceTable::build("café", "cafe");
        assert_eq!(table.rows(), 5);
        assert_eq!(table.distance(), 1);
    }

    #[test]
    fn index_matches_get() {
        let table = DistanceTable::build("flaw", "lawn");
        for r in 0..table.rows() {
            for c in 0..table.cols() {
                assert_eq!(table[(r, c)], table.get(r, c));
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn get_out_of_range_panics() {
        let table = DistanceTable::build("ab", "ba");
        let _ = table.get(3, 0);
    }

    #[test]
    fn display_renders_rows() {
        let table = DistanceTable::build("a", "ab");
        assert_eq!(table.to_string(), "0 1 2\n1 0 1\n");
    }
}
