//! Edit operation tags
//!
//! The four operation kinds a transformation sequence is made of. Inside the
//! crate they are a closed enum; the historical single-letter codes
//! (`R`, `T`, `I`, `D`) only appear at the text boundary.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One step of a transformation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transform {
    /// Substitute one character for another
    Replacement,
    /// Swap two adjacent characters
    Transposition,
    /// Insert a character of the target
    Insertion,
    /// Drop a character of the source
    Deletion,
}

/// Error type for malformed letter codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("unknown transform code '{0}', expected one of R, T, I, D")]
    UnknownCode(char),
    #[error("expected a single transform code, got \"{0}\"")]
    NotSingleCode(String),
}

impl Transform {
    /// All kinds, in tie-break priority order
    pub const ALL: [Self; 4] = [
        Self::Replacement,
        Self::Transposition,
        Self::Insertion,
        Self::Deletion,
    ];

    /// The single-letter code for this operation
    ///
    /// # Examples
    /// ```
    /// use distle::core::Transform;
    ///
    /// assert_eq!(Transform::Transposition.letter(), 'T');
    /// ```
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Replacement => 'R',
            Self::Transposition => 'T',
            Self::Insertion => 'I',
            Self::Deletion => 'D',
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Replacement => "replacement",
            Self::Transposition => "transposition",
            Self::Insertion => "insertion",
            Self::Deletion => "deletion",
        }
    }
}

impl TryFrom<char> for Transform {
    type Error = TransformError;

    /// Codes are case-insensitive
    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_uppercase() {
            'R' => Ok(Self::Replacement),
            'T' => Ok(Self::Transposition),
            'I' => Ok(Self::Insertion),
            'D' => Ok(Self::Deletion),
            _ => Err(TransformError::UnknownCode(code)),
        }
    }
}

impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::try_from(code),
            _ => Err(TransformError::NotSingleCode(s.to_string())),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Render a sequence as its letter codes, e.g. `"RRTI"`
///
/// # Examples
/// ```
/// use distle::core::{Transform, format_sequence};
///
/// let seq = [Transform::Insertion, Transform::Replacement];
/// assert_eq!(format_sequence(&seq), "IR");
/// ```
#[must_use]
pub fn format_sequence(transforms: &[Transform]) -> String {
    transforms.iter().map(|t| t.letter()).collect()
}

/// Parse a sequence of letter codes
///
/// Commas and whitespace between codes are ignored, so `"RRTI"`,
/// `"R,R,T,I"` and `"R R T I"` all parse to the same sequence.
///
/// # Errors
/// Returns `TransformError::UnknownCode` for the first character that is not
/// a code or a separator.
///
/// # Examples
/// ```
/// use distle::core::{Transform, parse_sequence};
///
/// let seq = parse_sequence("R, T").unwrap();
/// assert_eq!(seq, vec![Transform::Replacement, Transform::Transposition]);
/// assert!(parse_sequence("RX").is_err());
/// ```
pub fn parse_sequence(codes: &str) -> Result<Vec<Transform>, TransformError> {
    codes
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Transform::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_match_historical_codes() {
        let letters: String = Transform::ALL.iter().map(|t| t.letter()).collect();
        assert_eq!(letters, "RTID");
    }

    #[test]
    fn try_from_is_case_insensitive() {
        assert_eq!(Transform::try_from('r'), Ok(Transform::Replacement));
        assert_eq!(Transform::try_from('D'), Ok(Transform::Deletion));
        assert_eq!(
            Transform::try_from('x'),
            Err(TransformError::UnknownCode('x'))
        );
    }

    #[test]
    fn from_str_requires_single_code() {
        assert_eq!("I".parse::<Transform>(), Ok(Transform::Insertion));
        assert_eq!(" t ".parse::<Transform>(), Ok(Transform::Transposition));
        assert!(matches!(
            "RI".parse::<Transform>(),
            Err(TransformError::NotSingleCode(_))
        ));
        assert!("".parse::<Transform>().is_err());
    }

    #[test]
    fn display_uses_letter() {
        assert_eq!(Transform::Replacement.to_string(), "R");
        assert_eq!(format!("{}", Transform::Deletion), "D");
    }

    #[test]
    fn parse_sequence_accepts_separators() {
        let expected = vec![
            Transform::Replacement,
            Transform::Replacement,
            Transform::Transposition,
            Transform::Insertion,
        ];
        assert_eq!(parse_sequence("RRTI").unwrap(), expected);
        assert_eq!(parse_sequence("R,R,T,I").unwrap(), expected);
        assert_eq!(parse_sequence("r r t i").unwrap(), expected);
    }

    #[test]
    fn parse_sequence_empty_is_empty() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence(" , ").unwrap().is_empty());
    }

    #[test]
    fn parse_sequence_reports_first_bad_code() {
        assert_eq!(
            parse_sequence("RIZQ"),
            Err(TransformError::UnknownCode('Z'))
        );
    }

    #[test]
    fn format_sequence_empty() {
        assert_eq!(format_sequence(&[]), "");
    }
}
