//! Four-letter type codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::letter::{Axis, Letter, LetterParseError};

/// A derived personality code: one letter per axis in canonical order.
///
/// The only constructors either validate each position against its axis or
/// pick between an axis's own two letters, so a `TypeCode` is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode([Letter; 4]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeCodeParseError {
    #[error("type code must be exactly 4 letters, got {len}")]
    WrongLength { len: usize },
    #[error("invalid letter at position {position}: {source}")]
    InvalidLetter {
        position: usize,
        #[source]
        source: LetterParseError,
    },
    #[error("'{letter}' at position {position} does not belong to axis {expected}")]
    WrongAxis {
        position: usize,
        letter: Letter,
        expected: Axis,
    },
}

impl TypeCode {
    /// Build a code by deciding, per axis, whether its primary letter wins.
    pub fn from_primary_wins(mut primary_wins: impl FnMut(Axis) -> bool) -> Self {
        Self(Axis::ALL.map(|axis| {
            if primary_wins(axis) {
                axis.primary()
            } else {
                axis.secondary()
            }
        }))
    }

    /// `ESTJ`.
    #[must_use]
    pub fn all_primary() -> Self {
        Self::from_primary_wins(|_| true)
    }

    /// `INFP`.
    #[must_use]
    pub fn all_secondary() -> Self {
        Self::from_primary_wins(|_| false)
    }

    pub fn new(letters: [Letter; 4]) -> Result<Self, TypeCodeParseError> {
        for (position, (letter, axis)) in letters.iter().zip(Axis::ALL).enumerate() {
            if !axis.contains(*letter) {
                return Err(TypeCodeParseError::WrongAxis {
                    position,
                    letter: *letter,
                    expected: axis,
                });
            }
        }
        Ok(Self(letters))
    }

    /// Every one of the 16 codes, in lexicographic axis order (primary first).
    pub fn all() -> impl Iterator<Item = TypeCode> {
        (0u8..16).map(|bits| Self::from_primary_wins(|axis| bits & (8 >> axis.index()) == 0))
    }

    #[must_use]
    pub const fn letters(self) -> [Letter; 4] {
        self.0
    }

    #[must_use]
    pub const fn letter(self, axis: Axis) -> Letter {
        self.0[axis.index()]
    }
}

impl FromStr for TypeCode {
    type Err = TypeCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 4 {
            return Err(TypeCodeParseError::WrongLength { len });
        }

        let mut letters = [Letter::E; 4];
        for (position, c) in s.chars().enumerate() {
            letters[position] = Letter::try_from(c)
                .map_err(|source| TypeCodeParseError::InvalidLetter { position, source })?;
        }
        Self::new(letters)
    }
}

impl TryFrom<String> for TypeCode {
    type Error = TypeCodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
