#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Commands from the drill to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToneMessage {
    Play { frequency_hz: f32, duration_secs: f32 },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ToneMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for std::collections::VecDeque<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        self.pop_front()
    }
}
