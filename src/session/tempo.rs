use std::{fmt, time::Duration};

/// Beats between two announcements.
pub const BEATS_PER_ANNOUNCEMENT: u32 = 4;

/// Tempo in whole beats per minute, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tempo(u32);

impl Tempo {
    pub const MIN: Tempo = Tempo(1);
    pub const DEFAULT: Tempo = Tempo(60);

    /// Clamp to at least 1 BPM.
    pub fn new(bpm: u32) -> Self {
        Self(bpm.max(Self::MIN.0))
    }

    /// Parse user input; anything unusable becomes [`Tempo::MIN`].
    pub fn parse_lossy(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(bpm) if bpm > 0 => Self::new(u32::try_from(bpm).unwrap_or(u32::MAX)),
            _ => Self::MIN,
        }
    }

    pub fn bpm(self) -> u32 {
        self.0
    }

    /// Time between announcements: four beats, `(60 / bpm) * 4000` ms.
    pub fn interval(self) -> Duration {
        let beat_secs = 60.0 / self.0 as f64;
        Duration::from_secs_f64(beat_secs * BEATS_PER_ANNOUNCEMENT as f64)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_four_beats() {
        assert_eq!(Tempo::new(60).interval(), Duration::from_millis(4000));
        assert_eq!(Tempo::new(120).interval(), Duration::from_millis(2000));
        assert_eq!(Tempo::new(240).interval(), Duration::from_millis(1000));
    }

    #[test]
    fn zero_is_clamped() {
        assert_eq!(Tempo::new(0), Tempo::MIN);
        assert_eq!(Tempo::new(0).interval(), Duration::from_secs(240));
    }

    #[test]
    fn lossy_parsing() {
        assert_eq!(Tempo::parse_lossy("90"), Tempo::new(90));
        assert_eq!(Tempo::parse_lossy(" 72 "), Tempo::new(72));
        assert_eq!(Tempo::parse_lossy("fast"), Tempo::MIN);
        assert_eq!(Tempo::parse_lossy(""), Tempo::MIN);
        assert_eq!(Tempo::parse_lossy("-40"), Tempo::MIN);
        assert_eq!(Tempo::parse_lossy("0"), Tempo::MIN);
    }
}
