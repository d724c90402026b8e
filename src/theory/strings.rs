use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pitch::PitchEntry;
use crate::error::DrillError;

/// Frets practiced on each string.
pub const FRETS_PER_STRING: usize = 12;

/// The six strings of a guitar in standard tuning, low to high.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuitarString {
    #[default]
    LowE,
    A,
    D,
    G,
    B,
    HighE,
}

impl GuitarString {
    pub const ALL: [GuitarString; 6] = [
        GuitarString::LowE,
        GuitarString::A,
        GuitarString::D,
        GuitarString::G,
        GuitarString::B,
        GuitarString::HighE,
    ];

    /// Parse a string identifier. Unknown identifiers select the low E string.
    ///
    /// Case-sensitive: `E` is the low string and `e` the high one, so a
    /// lowercase `b` is unknown.
    pub fn from_id(id: &str) -> Self {
        match id.trim() {
            "e" | "high-e" => GuitarString::HighE,
            "B" => GuitarString::B,
            "G" => GuitarString::G,
            "D" => GuitarString::D,
            "A" => GuitarString::A,
            _ => GuitarString::LowE,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            GuitarString::LowE => "E",
            GuitarString::A => "A",
            GuitarString::D => "D",
            GuitarString::G => "G",
            GuitarString::B => "B",
            GuitarString::HighE => "e",
        }
    }

    /// Window into the 4-octave pitch table covering the practiced frets.
    pub fn range(self) -> Range<usize> {
        let start = match self {
            GuitarString::HighE => 32,
            GuitarString::B => 27,
            GuitarString::G => 23,
            GuitarString::D => 18,
            GuitarString::A => 13,
            GuitarString::LowE => 8,
        };
        start..start + FRETS_PER_STRING
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next string up, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next string down, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Slice of `table` reachable on `string`.
pub fn select_range(string: GuitarString, table: &[PitchEntry]) -> Result<&[PitchEntry], DrillError> {
    let range = string.range();
    let needed = range.end;
    table.get(range).ok_or(DrillError::TableTooShort {
        needed,
        len: table.len(),
    })
}
