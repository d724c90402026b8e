//! Drill - the session sequencer
//!
//! Owns the selection context (string, tempo, playable notes) and at most one
//! running session. Everything happens on the caller's thread: `start`,
//! `stop` and `poll` are handed the current time and run whatever the
//! scheduler says is due.
//!
//! ```text
//!            start                         queue empty on tick
//!   Idle ───────────────→ Running ──────────────────────────→ (Completed) ─→ Idle
//!    ↑                     │  ↺ tick: announce next note
//!    └──────── stop ───────┘
//! ```

use std::{collections::VecDeque, time::Instant};

use rand::{seq::SliceRandom, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::{
    scheduler::{Scheduler, SessionId, Task},
    surface::{ControlSurface, COMPLETE_MESSAGE, START_LABEL, STOP_LABEL},
    tempo::Tempo,
};
use crate::{
    error::DrillError,
    speech::{speech_text, Announcer},
    theory::{
        build_note_set, generate_table, select_range, GuitarString, PitchEntry, PlayableNotes,
        Speller, Spelling, DRILL_OCTAVES,
    },
    tone::{ToneSink, TONE_SECONDS},
    TONE_DELAY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

/// Settings a drill starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillConfig {
    pub tempo: Tempo,
    pub string: GuitarString,
    pub spelling: Spelling,
    /// Seeds shuffling and mixed spelling. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            tempo: Tempo::DEFAULT,
            string: GuitarString::LowE,
            spelling: Spelling::Mixed,
            seed: None,
        }
    }
}

/// One run from start to stop or completion.
#[derive(Debug)]
struct Session {
    id: SessionId,
    queue: VecDeque<&'static str>,
    tempo: Tempo,
}

pub struct Drill<S: ControlSurface, A: Announcer, T: ToneSink> {
    table: Vec<PitchEntry>,
    string: GuitarString,
    tempo: Tempo,
    speller: Speller,
    notes: PlayableNotes,

    session: Option<Session>,
    next_session: SessionId,
    scheduler: Scheduler,
    rng: Pcg32,

    surface: S,
    announcer: A,
    tone: T,
}

impl<S: ControlSurface, A: Announcer, T: ToneSink> Drill<S, A, T> {
    pub fn new(config: DrillConfig, surface: S, announcer: A, tone: T) -> Result<Self, DrillError> {
        let mut rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };
        let speller = Speller::new(config.spelling, rng.next_u64());

        let mut drill = Self {
            table: generate_table(DRILL_OCTAVES),
            string: config.string,
            tempo: config.tempo,
            speller,
            notes: PlayableNotes::default(),
            session: None,
            next_session: 1,
            scheduler: Scheduler::new(),
            rng,
            surface,
            announcer,
            tone,
        };

        drill.notes = drill.compute_notes(config.string)?;
        drill.surface.show("");
        drill.surface.set_string_selector_enabled(true);
        drill.surface.set_toggle_label(START_LABEL);
        Ok(drill)
    }

    fn compute_notes(&mut self, string: GuitarString) -> Result<PlayableNotes, DrillError> {
        let slice = select_range(string, &self.table)?;
        let notes = build_note_set(slice, &mut self.speller);

        tracing::debug!(string = %string, notes = ?notes.names(), "playable notes");
        tracing::debug!(string = %string, map = ?notes.frequency_map(), "frequency map");
        Ok(notes)
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn string(&self) -> GuitarString {
        self.string
    }

    /// Tempo the next session will use.
    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// Tempo of the running session, if any.
    pub fn session_tempo(&self) -> Option<Tempo> {
        self.session.as_ref().map(|s| s.tempo)
    }

    pub fn notes(&self) -> &PlayableNotes {
        &self.notes
    }

    /// Notes still waiting in the running session.
    pub fn remaining(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.queue.len())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    /// Choose a string and rebuild its note set. Rejected while running.
    pub fn select_string(&mut self, string: GuitarString) -> Result<(), DrillError> {
        if self.is_running() {
            return Err(DrillError::SessionRunning("string"));
        }
        let notes = self.compute_notes(string)?;
        self.string = string;
        self.notes = notes;
        Ok(())
    }

    /// Set the tempo for the next session; a running session keeps its own.
    pub fn set_tempo(&mut self, tempo: Tempo) {
        if self.is_running() {
            tracing::debug!(%tempo, "tempo change deferred to next session");
        }
        self.tempo = tempo;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Shuffle the note set and announce the first note right away.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }

        let mut queue = self.notes.names().to_vec();
        queue.shuffle(&mut self.rng);

        let id = self.next_session;
        self.next_session += 1;
        self.session = Some(Session {
            id,
            queue: queue.into(),
            tempo: self.tempo,
        });
        tracing::info!(session = id, string = %self.string, tempo = %self.tempo, "session started");

        self.surface.set_string_selector_enabled(false);
        self.surface.set_toggle_label(STOP_LABEL);
        self.surface.show("");

        self.advance(now);
        self.scheduler.enqueue(now + self.tempo.interval(), id, Task::Announce);
    }

    /// End the session early; its pending tones never sound.
    pub fn stop(&mut self) {
        if self.end_session() {
            self.surface.show("");
        }
    }

    /// Run every task due at `now`. Ticks missed by a late poll collapse
    /// into a single announcement.
    pub fn poll(&mut self, now: Instant) {
        while let Some(scheduled) = self.scheduler.pop_due(now) {
            let current = self.session.as_ref().map(|s| s.id);
            if current != Some(scheduled.session) {
                continue;
            }

            match scheduled.task {
                Task::Announce => {
                    let Some(interval) = self.session.as_ref().map(|s| s.tempo.interval()) else {
                        continue;
                    };
                    // A tick that a later one would already have replaced is
                    // late: announce once now and restart the beat from here.
                    let at = if scheduled.due + interval <= now {
                        tracing::debug!(late_by = ?(now - scheduled.due), "skipping missed ticks");
                        now
                    } else {
                        scheduled.due
                    };
                    if self.advance(at) {
                        self.scheduler
                            .enqueue(at + interval, scheduled.session, Task::Announce);
                    } else {
                        self.complete();
                    }
                }
                Task::SoundTone { pitch } => self.sound(pitch),
            }
        }
    }

    /// When the next task is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Announce the next queued note. Returns false when the queue is empty.
    fn advance(&mut self, at: Instant) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(pitch) = session.queue.pop_front() else {
            return false;
        };
        let id = session.id;

        self.surface.show(pitch);
        let text = speech_text(pitch);
        tracing::debug!(pitch, text = %text, "announce");
        self.announcer.speak(&text);
        self.scheduler
            .enqueue(at + TONE_DELAY, id, Task::SoundTone { pitch });
        true
    }

    fn sound(&mut self, pitch: &'static str) {
        match self.notes.lookup(pitch) {
            Some(info) => {
                self.surface.append(&format!(" (Fret {})", info.fret));
                self.tone.play(info.frequency_hz, TONE_SECONDS);
            }
            None => tracing::debug!(pitch, "no frequency for pitch, tone skipped"),
        }
    }

    fn complete(&mut self) {
        if self.end_session() {
            self.surface.show(COMPLETE_MESSAGE);
        }
    }

    /// Back to Idle. Returns false if nothing was running.
    fn end_session(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        let cancelled = self.scheduler.cancel(session.id);
        tracing::info!(session = session.id, cancelled, "session ended");

        self.surface.set_string_selector_enabled(true);
        self.surface.set_toggle_label(START_LABEL);
        true
    }
}
