//! Static music theory for the drill: the pitch table, string windows into
//! it, and the playable note set derived for one string.

/// Playable note names and the name-to-fret lookup for one string.
pub mod note_set;
/// Equal-tempered pitch table generation.
pub mod pitch;
/// Enharmonic display policy.
pub mod spelling;
/// Guitar strings and their fret windows.
pub mod strings;

pub use note_set::{build_note_set, FretInfo, PlayableNotes};
pub use pitch::{generate_table, PitchClass, PitchEntry, DRILL_OCTAVES};
pub use spelling::{Speller, Spelling};
pub use strings::{select_range, GuitarString, FRETS_PER_STRING};
