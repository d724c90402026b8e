//! Tone sink: sounds the reference pitch after each announcement.
//!
//! The drill only sees [`ToneSink`]. The realtime side is a [`ToneVoice`]
//! fed through a lock-free ring, so the audio callback never blocks on the
//! drill.

/// Messages sent to the audio thread.
pub mod message;
/// Realtime renderer for reference tones.
pub mod voice;

pub use message::{MessageReceiver, ToneMessage};
pub use voice::{ToneVoice, VoiceState};

#[cfg(feature = "rtrb")]
use rtrb::Producer;

/// How long each reference tone sounds.
pub const TONE_SECONDS: f32 = 1.0;

/// Fire-and-forget tone output.
pub trait ToneSink {
    fn play(&mut self, frequency_hz: f64, duration_secs: f32);
}

impl<T: ToneSink + ?Sized> ToneSink for Box<T> {
    fn play(&mut self, frequency_hz: f64, duration_secs: f32) {
        (**self).play(frequency_hz, duration_secs)
    }
}

#[cfg(feature = "rtrb")]
impl ToneSink for Producer<ToneMessage> {
    fn play(&mut self, frequency_hz: f64, duration_secs: f32) {
        let message = ToneMessage::Play {
            frequency_hz: frequency_hz as f32,
            duration_secs,
        };
        if self.push(message).is_err() {
            tracing::warn!(frequency_hz, "tone queue full, dropping tone");
        }
    }
}

/// Discards tones; used when no output device is available.
#[derive(Debug, Default)]
pub struct NoTone;

impl ToneSink for NoTone {
    fn play(&mut self, frequency_hz: f64, _duration_secs: f32) {
        tracing::debug!(frequency_hz, "no audio output, tone skipped");
    }
}
