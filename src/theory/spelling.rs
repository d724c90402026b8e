//! Enharmonic spelling policy.
//!
//! The pitch table stores both spellings of every accidental. A `Speller`
//! picks the one to display when a note set is built, so the table itself
//! stays deterministic and randomness is confined to an explicitly seeded
//! stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pitch::PitchEntry;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    /// Always A#, C#, ...
    Sharps,
    /// Always Bb, Db, ...
    Flats,
    /// Uniform choice between the two spellings for each accidental.
    #[default]
    Mixed,
}

pub struct Speller {
    policy: Spelling,
    rng: Pcg32,
}

impl Speller {
    pub fn new(policy: Spelling, seed: u64) -> Self {
        Self {
            policy,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> Spelling {
        self.policy
    }

    /// Display name for `entry` under this policy.
    pub fn spell(&mut self, entry: &PitchEntry) -> &'static str {
        let variants = entry.enharmonic_variants();
        match self.policy {
            Spelling::Sharps => variants[0],
            Spelling::Flats => variants[variants.len() - 1],
            Spelling::Mixed => variants[self.rng.gen_range(0..variants.len())],
        }
    }
}
