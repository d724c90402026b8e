use std::f32::consts::TAU;

/// Phase-accumulator sine oscillator. Phase lives in `0.0..1.0`.
#[derive(Debug, Clone)]
pub struct Oscillator {
    frequency: f32,
    phase: f32,
}

impl Oscillator {
    pub fn sine() -> Self {
        Self {
            frequency: 440.0,
            phase: 0.0,
        }
    }

    pub fn set_frequency(&mut self, hz: f32) {
        self.frequency = hz.max(0.0);
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let out = (self.phase * TAU).sin();

        self.phase += self.frequency / sample_rate;
        self.phase -= self.phase.floor();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_completes_one_cycle_per_period() {
        let mut osc = Oscillator::sine();
        osc.set_frequency(100.0);
        let samples: Vec<f32> = (0..1000).map(|_| osc.next_sample(1000.0)).collect();

        // 10 samples per period: quarter period is the peak.
        assert!(samples[0].abs() < 1e-6);
        assert!((samples[2] - 0.951).abs() < 1e-3);
        assert!((samples[10] - samples[0]).abs() < 1e-3);
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn reset_restarts_the_cycle() {
        let mut osc = Oscillator::sine();
        osc.set_frequency(55.0);
        for _ in 0..37 {
            osc.next_sample(48_000.0);
        }
        osc.reset();
        assert!(osc.next_sample(48_000.0).abs() < 1e-6);
    }
}
