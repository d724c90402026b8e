use std::collections::HashMap;

use super::{pitch::PitchEntry, spelling::Speller};

/// Where a displayed pitch name sounds on the selected string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretInfo {
    pub frequency_hz: f64,
    /// 1-based.
    pub fret: u32,
}

/// Notes reachable on the selected string, in fret order, plus a name lookup.
///
/// Built in one go by [`build_note_set`] and replaced wholesale when the
/// string changes.
#[derive(Debug, Clone, Default)]
pub struct PlayableNotes {
    names: Vec<&'static str>,
    frequencies: HashMap<&'static str, FretInfo>,
}

impl PlayableNotes {
    /// Display names, index `i` is fret `i + 1`.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<FretInfo> {
        self.frequencies.get(name).copied()
    }

    /// Entries of the frequency map, sorted by fret.
    pub fn frequency_map(&self) -> Vec<(&'static str, FretInfo)> {
        let mut entries: Vec<_> = self.frequencies.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(_, info)| info.fret);
        entries
    }
}

/// Spell each entry of `slice` and index it by display name.
///
/// Two frets spelled the same way share one map entry; the higher fret wins.
pub fn build_note_set(slice: &[PitchEntry], speller: &mut Speller) -> PlayableNotes {
    let names: Vec<&'static str> = slice.iter().map(|entry| speller.spell(entry)).collect();

    let mut frequencies = HashMap::with_capacity(names.len());
    for (i, (name, entry)) in names.iter().zip(slice).enumerate() {
        frequencies.insert(
            *name,
            FretInfo {
                frequency_hz: entry.frequency_hz,
                fret: i as u32 + 1,
            },
        );
    }

    PlayableNotes { names, frequencies }
}
