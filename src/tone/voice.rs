//! ToneVoice - renders reference tones on the audio thread
//!
//! Monophonic: a new `Play` retriggers the envelope at the new pitch. The gate
//! stays open for the requested duration (counted in samples), then the
//! envelope releases.

use super::message::{MessageReceiver, ToneMessage};
use crate::dsp::{envelope::Envelope, oscillator::Oscillator};

/// Output level, keeps the sine well clear of clipping.
const GAIN: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Silent,
    /// Gate open.
    Sounding,
    Releasing,
}

pub struct ToneVoice<R: MessageReceiver> {
    osc: Oscillator,
    env: Envelope,
    sample_rate: f32,
    gate_samples: u32,
    state: VoiceState,
    receiver: R,
}

impl<R: MessageReceiver> ToneVoice<R> {
    pub fn new(sample_rate: f32, receiver: R) -> Self {
        Self {
            osc: Oscillator::sine(),
            env: Envelope::tone(),
            sample_rate,
            gate_samples: 0,
            state: VoiceState::Silent,
            receiver,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn frequency(&self) -> f32 {
        self.osc.frequency()
    }

    fn handle(&mut self, message: ToneMessage) {
        let ToneMessage::Play {
            frequency_hz,
            duration_secs,
        } = message;
        self.osc.set_frequency(frequency_hz);
        self.osc.reset();
        self.env.gate_on();
        self.gate_samples = (duration_secs.max(0.0) * self.sample_rate) as u32;
        self.state = VoiceState::Sounding;
    }

    fn release(&mut self) {
        if self.state == VoiceState::Sounding {
            self.env.gate_off(self.sample_rate);
            self.state = VoiceState::Releasing;
        }
    }

    /// Fill `out` with mono samples, applying any queued messages first.
    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Some(message) = self.receiver.pop() {
            self.handle(message);
        }

        for sample in out.iter_mut() {
            if self.state == VoiceState::Silent {
                *sample = 0.0;
                continue;
            }

            if self.state == VoiceState::Sounding {
                if self.gate_samples == 0 {
                    self.release();
                } else {
                    self.gate_samples -= 1;
                }
            }

            let level = self.env.next_sample(self.sample_rate);
            *sample = self.osc.next_sample(self.sample_rate) * level * GAIN;

            if self.state == VoiceState::Releasing && !self.env.is_active() {
                self.state = VoiceState::Silent;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    const SAMPLE_RATE: f32 = 8_000.0;

    fn voice_with(messages: &[ToneMessage]) -> ToneVoice<VecDeque<ToneMessage>> {
        ToneVoice::new(SAMPLE_RATE, messages.iter().copied().collect())
    }

    fn peak(buf: &[f32]) -> f32 {
        buf.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    #[test]
    fn silent_without_messages() {
        let mut voice = voice_with(&[]);
        let mut buf = vec![1.0; 256];
        voice.render_block(&mut buf);
        assert!(buf.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn play_sounds_then_fades_out() {
        let mut voice = voice_with(&[ToneMessage::Play {
            frequency_hz: 110.0,
            duration_secs: 0.1,
        }]);

        let mut buf = vec![0.0; 800];
        voice.render_block(&mut buf);
        assert_eq!(voice.state(), VoiceState::Sounding);
        assert_eq!(voice.frequency(), 110.0);
        assert!(peak(&buf) > 0.1);
        assert!(peak(&buf) <= GAIN);

        // Gate closes after 0.1s, release takes 0.25s.
        let mut tail = vec![0.0; 4_000];
        voice.render_block(&mut tail);
        assert_eq!(voice.state(), VoiceState::Silent);
        assert!(tail[3_000..].iter().all(|s| *s == 0.0));
    }

    #[test]
    fn new_play_retriggers_at_new_pitch() {
        let mut voice = voice_with(&[
            ToneMessage::Play {
                frequency_hz: 220.0,
                duration_secs: 10.0,
            },
            ToneMessage::Play {
                frequency_hz: 330.0,
                duration_secs: 0.5,
            },
        ]);

        let mut buf = vec![0.0; 16];
        voice.render_block(&mut buf);
        assert_eq!(voice.state(), VoiceState::Sounding);
        assert_eq!(voice.frequency(), 330.0);
    }
}
