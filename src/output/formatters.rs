//! Formatting utilities for terminal output

use crate::core::{DistanceTable, Transform};

/// Format a sequence as a bracketed list, e.g. `[R, T, I]`
#[must_use]
pub fn bracketed_sequence(transforms: &[Transform]) -> String {
    let codes: Vec<String> = transforms.iter().map(ToString::to_string).collect();
    format!("[{}]", codes.join(", "))
}

/// Describe a sequence in words, e.g. `2 replacements, 1 insertion`
///
/// Kinds appear in tie-break order; kinds that do not occur are left out.
#[must_use]
pub fn describe_sequence(transforms: &[Transform]) -> String {
    if transforms.is_empty() {
        return "no edits".to_string();
    }

    Transform::ALL
        .iter()
        .filter_map(|&kind| {
            let count = transforms.iter().filter(|&&t| t == kind).count();
            match count {
                0 => None,
                1 => Some(format!("1 {}", kind.name())),
                n => Some(format!("{n} {}s", kind.name())),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Width of the widest cell value in the table
#[must_use]
pub fn cell_width(table: &DistanceTable) -> usize {
    table
        .iter_rows()
        .flat_map(|row| row.iter())
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1)
}

/// Column header labels: the empty prefix followed by each target character
#[must_use]
pub fn header_labels(word: &str) -> Vec<String> {
    std::iter::once("ε".to_string())
        .chain(word.chars().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transform::{Deletion, Insertion, Replacement, Transposition};

    #[test]
    fn bracketed_sequence_lists_codes() {
        assert_eq!(
            bracketed_sequence(&[Replacement, Transposition, Insertion]),
            "[R, T, I]"
        );
        assert_eq!(bracketed_sequence(&[]), "[]");
    }

    #[test]
    fn describe_sequence_counts_kinds() {
        assert_eq!(
            describe_sequence(&[Insertion, Replacement, Replacement]),
            "2 replacements, 1 insertion"
        );
        assert_eq!(describe_sequence(&[Deletion]), "1 deletion");
        assert_eq!(describe_sequence(&[]), "no edits");
    }

    #[test]
    fn cell_width_tracks_largest_value() {
        assert_eq!(cell_width(&DistanceTable::build("ab", "ba")), 1);
        assert_eq!(cell_width(&DistanceTable::build("abcdefghijk", "")), 2);
    }

    #[test]
    fn header_labels_start_with_empty_prefix() {
        assert_eq!(header_labels("ab"), vec!["ε", "a", "b"]);
        assert_eq!(header_labels(""), vec!["ε"]);
    }
}
