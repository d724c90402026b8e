//! Low-level DSP primitives behind the reference tone.
//!
//! Allocation-free and realtime-safe, so they can live inside the audio
//! callback.

/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Sine oscillator.
pub mod oscillator;

pub use envelope::{Envelope, Stage};
pub use oscillator::Oscillator;
