//! Axes and the eight letters they partition into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four binary dimensions of a type code.
///
/// Declaration order is the canonical order letters appear in a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion / Introversion.
    #[serde(rename = "EI")]
    Energy,
    /// Sensing / Intuition.
    #[serde(rename = "SN")]
    Perception,
    /// Thinking / Feeling.
    #[serde(rename = "TF")]
    Judgment,
    /// Judging / Perceiving.
    #[serde(rename = "JP")]
    Lifestyle,
}

impl Axis {
    /// All axes in canonical code order.
    pub const ALL: [Axis; 4] = [
        Axis::Energy,
        Axis::Perception,
        Axis::Judgment,
        Axis::Lifestyle,
    ];

    /// Position of this axis inside a type code.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::Energy => 0,
            Axis::Perception => 1,
            Axis::Judgment => 2,
            Axis::Lifestyle => 3,
        }
    }

    /// The tie-break winner for this axis.
    #[must_use]
    pub const fn primary(self) -> Letter {
        match self {
            Axis::Energy => Letter::E,
            Axis::Perception => Letter::S,
            Axis::Judgment => Letter::T,
            Axis::Lifestyle => Letter::J,
        }
    }

    #[must_use]
    pub const fn secondary(self) -> Letter {
        match self {
            Axis::Energy => Letter::I,
            Axis::Perception => Letter::N,
            Axis::Judgment => Letter::F,
            Axis::Lifestyle => Letter::P,
        }
    }

    /// `[primary, secondary]`.
    #[must_use]
    pub const fn letters(self) -> [Letter; 2] {
        [self.primary(), self.secondary()]
    }

    #[must_use]
    pub fn contains(self, letter: Letter) -> bool {
        letter.axis() == self
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Energy => "EI",
            Axis::Perception => "SN",
            Axis::Judgment => "TF",
            Axis::Lifestyle => "JP",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Axis::Energy => "Energy",
            Axis::Perception => "Perception",
            Axis::Judgment => "Judgment",
            Axis::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single answer value: one side of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not one of E, I, S, N, T, F, J, P")]
pub struct LetterParseError(pub char);

impl Letter {
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::S,
        Letter::N,
        Letter::T,
        Letter::F,
        Letter::J,
        Letter::P,
    ];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::Energy,
            Letter::S | Letter::N => Axis::Perception,
            Letter::T | Letter::F => Axis::Judgment,
            Letter::J | Letter::P => Axis::Lifestyle,
        }
    }

    /// Dense index into per-letter tables, matching [`Letter::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Letter::E => 0,
            Letter::I => 1,
            Letter::S => 2,
            Letter::N => 3,
            Letter::T => 4,
            Letter::F => 5,
            Letter::J => 6,
            Letter::P => 7,
        }
    }

    /// The other letter on the same axis.
    #[must_use]
    pub const fn opposite(self) -> Letter {
        match self {
            Letter::E => Letter::I,
            Letter::I => Letter::E,
            Letter::S => Letter::N,
            Letter::N => Letter::S,
            Letter::T => Letter::F,
            Letter::F => Letter::T,
            Letter::J => Letter::P,
            Letter::P => Letter::J,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Letter::E => "Extraversion",
            Letter::I => "Introversion",
            Letter::S => "Sensing",
            Letter::N => "Intuition",
            Letter::T => "Thinking",
            Letter::F => "Feeling",
            Letter::J => "Judging",
            Letter::P => "Perceiving",
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'E' => Ok(Letter::E),
            'I' => Ok(Letter::I),
            'S' => Ok(Letter::S),
            'N' => Ok(Letter::N),
            'T' => Ok(Letter::T),
            'F' => Ok(Letter::F),
            'J' => Ok(Letter::J),
            'P' => Ok(Letter::P),
            other => Err(LetterParseError(other)),
        }
    }
}

impl FromStr for Letter {
    type Err = LetterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c),
            (Some(c), Some(_)) => Err(LetterParseError(c)),
            (None, _) => Err(LetterParseError('\0')),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Letter};

    #[test]
    fn every_letter_belongs_to_exactly_one_axis() {
        for letter in Letter::ALL {
            let owners: Vec<Axis> = Axis::ALL
                .into_iter()
                .filter(|axis| axis.letters().contains(&letter))
                .collect();
            assert_eq!(owners, vec![letter.axis()], "letter {letter}");
        }
    }

    #[test]
    fn primaries_are_e_s_t_j() {
        let primaries: String = Axis::ALL.iter().map(|a| a.primary().as_char()).collect();
        assert_eq!(primaries, "ESTJ");
        let secondaries: String = Axis::ALL.iter().map(|a| a.secondary().as_char()).collect();
        assert_eq!(secondaries, "INFP");
    }

    #[test]
    fn opposite_stays_on_axis() {
        for letter in Letter::ALL {
            assert_eq!(letter.opposite().axis(), letter.axis());
            assert_ne!(letter.opposite(), letter);
            assert_eq!(letter.opposite().opposite(), letter);
        }
    }

    #[test]
    fn index_matches_all_table() {
        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn parse_rejects_lowercase_and_multi_char() {
        assert_eq!("E".parse::<Letter>(), Ok(Letter::E));
        assert!("e".parse::<Letter>().is_err());
        assert!("EI".parse::<Letter>().is_err());
        assert!("".parse::<Letter>().is_err());
        assert!(Letter::try_from('X').is_err());
    }

    #[test]
    fn axis_serializes_as_letter_pair() {
        let json = serde_json::to_string(&Axis::Perception).expect("serialize");
        assert_eq!(json, "\"SN\"");
        let axis: Axis = serde_json::from_str("\"JP\"").expect("deserialize");
        assert_eq!(axis, Axis::Lifestyle);
    }
}
