use crate::MIN_TIME;

/*
Tone Envelope
=============

Linear ADSR shaping for the reference tone. Without it the sine would start
and stop with an audible click.

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release

Each stage converts its duration into a per-sample step:

    step = change / (seconds * sample_rate)

Gate off moves to Release from whatever stage is current, starting at the
current level, so a tone cut short during its attack still fades to zero
instead of jumping. Release is precomputed as a sample count at gate off and
interpolated, which lands exactly on 0.0.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    attack: f32,
    decay: f32,
    sustain: f32,
    release: f32,

    stage: Stage,
    level: f32,

    release_from: f32,
    release_samples: u32,
    release_elapsed: u32,
}

impl Envelope {
    /// Times in seconds, sustain as a level in `0.0..=1.0`.
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack: attack.max(MIN_TIME),
            decay: decay.max(MIN_TIME),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(MIN_TIME),
            stage: Stage::Idle,
            level: 0.0,
            release_from: 0.0,
            release_samples: 1,
            release_elapsed: 0,
        }
    }

    /// Short pluck-like shape used for reference tones.
    pub fn tone() -> Self {
        Self::adsr(0.01, 0.15, 0.6, 0.25)
    }

    /// Start (or restart) from silence.
    pub fn gate_on(&mut self) {
        self.level = 0.0;
        self.stage = Stage::Attack;
        self.release_elapsed = 0;
    }

    pub fn gate_off(&mut self, sample_rate: f32) {
        if self.stage == Stage::Idle {
            return;
        }
        self.release_from = self.level;
        self.release_samples = (self.release * sample_rate).round().max(1.0) as u32;
        self.release_elapsed = 0;
        self.stage = Stage::Release;
    }

    /// Advance one sample and return the new level.
    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        match self.stage {
            Stage::Idle => self.level = 0.0,
            Stage::Attack => {
                self.level += 1.0 / (self.attack * sample_rate);
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = Stage::Decay;
                }
            }
            Stage::Decay => {
                self.level -= (1.0 - self.sustain) / (self.decay * sample_rate);
                if self.level <= self.sustain {
                    self.level = self.sustain;
                    self.stage = Stage::Sustain;
                }
            }
            Stage::Sustain => self.level = self.sustain,
            Stage::Release => {
                let progress = self.release_elapsed as f32 / self.release_samples as f32;
                self.level = (self.release_from * (1.0 - progress)).max(0.0);
                self.release_elapsed = self.release_elapsed.saturating_add(1);
                if self.release_elapsed >= self.release_samples {
                    self.level = 0.0;
                    self.stage = Stage::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level
    }

    pub fn is_active(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
}
