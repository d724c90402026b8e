#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Equal-Tempered Pitch Table
==========================

The drill works over a small, fixed table of pitches starting at A1 (55 Hz)
and climbing one semitone per entry:

    semitone_index   0     1      2    3    ...  12     ...  47
    pitch            A1    A#1    B1   C1   ...  A2     ...  G#4
    frequency (Hz)   55.0  58.27  61.74 65.41 ... 110.0 ...  830.61

Octave numbers count from the reference A, not from C: every run of twelve
entries starting at an A is one "octave" here. This matches how the drill
slices string ranges and is not the scientific pitch notation used for MIDI.

The frequency law is plain 12-TET:

    f(n) = 55.0 * 2^(n / 12)

rounded to two decimal places, so values compare exactly in tests
(n = 12 gives 110.00, n = 24 gives 220.00).

Sharps carry a second spelling: the flat of the next pitch class up
(A# / Bb, C# / Db, ...). The table stores both and never picks one; display
spelling is chosen later by a `Speller`.
*/

/// Frequency of semitone index 0 (A1).
pub const REFERENCE_HZ: f64 = 55.0;

/// Number of pitch classes in an octave.
pub const SEMITONES_PER_OCTAVE: usize = 12;

/// Octaves generated for the drill's table (48 entries).
pub const DRILL_OCTAVES: u32 = 4;

/// One of the twelve pitch classes, in table order starting from A.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    A,
    As,
    B,
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
}

impl PitchClass {
    /// Fixed generation order: A, A#, B, C, ... G#.
    pub const ALL: [PitchClass; SEMITONES_PER_OCTAVE] = [
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
    ];

    /// Pitch class for a table position (wraps every 12).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SEMITONES_PER_OCTAVE]
    }

    /// Sharp (canonical) spelling.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
        }
    }

    /// All spellings of this class: `[sharp, flat]` for accidentals, `[name]` otherwise.
    ///
    /// The flat spelling is the next class up with a `b` suffix.
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            PitchClass::As => &["A#", "Bb"],
            PitchClass::Cs => &["C#", "Db"],
            PitchClass::Ds => &["D#", "Eb"],
            PitchClass::Fs => &["F#", "Gb"],
            PitchClass::Gs => &["G#", "Ab"],
            PitchClass::A => &["A"],
            PitchClass::B => &["B"],
            PitchClass::C => &["C"],
            PitchClass::D => &["D"],
            PitchClass::E => &["E"],
            PitchClass::F => &["F"],
            PitchClass::G => &["G"],
        }
    }

    pub fn is_accidental(self) -> bool {
        self.variants().len() > 1
    }
}

/// One row of the pitch table. Immutable once generated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchEntry {
    pub pitch_class: PitchClass,
    /// 1-based octave, counted from the reference A.
    pub octave: u32,
    /// Absolute chromatic step from A1.
    pub semitone_index: u32,
    /// Rounded to two decimals.
    pub frequency_hz: f64,
}

impl PitchEntry {
    pub fn new(semitone_index: u32) -> Self {
        Self {
            pitch_class: PitchClass::from_index(semitone_index as usize),
            octave: semitone_index / SEMITONES_PER_OCTAVE as u32 + 1,
            semitone_index,
            frequency_hz: frequency_for(semitone_index),
        }
    }

    /// Canonical (sharp) spelling.
    pub fn pitch_name(&self) -> &'static str {
        self.pitch_class.name()
    }

    pub fn enharmonic_variants(&self) -> &'static [&'static str] {
        self.pitch_class.variants()
    }
}

/// `55 * 2^(n/12)` rounded to two decimals.
pub fn frequency_for(semitone_index: u32) -> f64 {
    let raw = REFERENCE_HZ * 2.0_f64.powf(semitone_index as f64 / SEMITONES_PER_OCTAVE as f64);
    round_cents(raw)
}

#[inline]
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the pitch table for `octaves` octaves from A1 upward.
///
/// Zero octaves produce an empty table.
pub fn generate_table(octaves: u32) -> Vec<PitchEntry> {
    let len = octaves * SEMITONES_PER_OCTAVE as u32;
    let table: Vec<PitchEntry> = (0..len).map(PitchEntry::new).collect();

    for entry in &table {
        tracing::debug!(
            pitch = entry.pitch_name(),
            variants = ?entry.enharmonic_variants(),
            octave = entry.octave,
            semitone = entry.semitone_index,
            hz = entry.frequency_hz,
            "pitch table entry"
        );
    }

    table
}
