use std::time::Duration;

pub mod dsp; // Oscillator and envelope for reference tones
pub mod error;
pub mod session; // Drill state machine and scheduling
pub mod speech;
pub mod theory; // Pitch table, strings, playable notes
pub mod tone;

pub use error::DrillError;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;

/// Gap between announcing a note and sounding it.
pub const TONE_DELAY: Duration = Duration::from_millis(3000);
