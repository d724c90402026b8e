use std::time::{Duration, Instant};

use fretdrill::{
    session::{ControlSurface, Drill, DrillConfig, SessionState, Tempo, COMPLETE_MESSAGE, START_LABEL},
    speech::Announcer,
    theory::{GuitarString, Spelling},
    tone::ToneSink,
    TONE_DELAY,
};

/// Records every display write alongside the live state.
#[derive(Default)]
struct Recorder {
    display: String,
    shown: Vec<String>,
    selector_enabled: bool,
    label: String,
}

impl ControlSurface for Recorder {
    fn show(&mut self, text: &str) {
        self.display = text.to_string();
        self.shown.push(text.to_string());
    }
    fn append(&mut self, text: &str) {
        self.display.push_str(text);
    }
    fn set_string_selector_enabled(&mut self, enabled: bool) {
        self.selector_enabled = enabled;
    }
    fn set_toggle_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

#[derive(Default)]
struct Voice {
    phrases: Vec<String>,
}

impl Announcer for Voice {
    fn speak(&mut self, text: &str) {
        self.phrases.push(text.to_string());
    }
}

#[derive(Default)]
struct Speaker {
    tones: Vec<(f64, f32)>,
}

impl ToneSink for Speaker {
    fn play(&mut self, frequency_hz: f64, duration_secs: f32) {
        self.tones.push((frequency_hz, duration_secs));
    }
}

type TestDrill = Drill<Recorder, Voice, Speaker>;

fn drill(seed: u64, string: GuitarString, bpm: u32) -> TestDrill {
    let config = DrillConfig {
        tempo: Tempo::new(bpm),
        string,
        spelling: Spelling::Sharps,
        seed: Some(seed),
    };
    Drill::new(config, Recorder::default(), Voice::default(), Speaker::default()).unwrap()
}

/// Pitch names shown by announcements, ignoring clears and the completion message.
fn announced(d: &TestDrill) -> Vec<String> {
    d.surface()
        .shown
        .iter()
        .filter(|s| !s.is_empty() && s.as_str() != COMPLETE_MESSAGE)
        .cloned()
        .collect()
}

/// Poll at each deadline until nothing is left to run.
fn run_to_end(d: &mut TestDrill) {
    while let Some(due) = d.next_deadline() {
        d.poll(due);
    }
}

#[test]
fn low_e_at_60_bpm_runs_twelve_notes_four_seconds_apart() {
    let t0 = Instant::now();
    let mut d = drill(3, GuitarString::LowE, 60);
    let interval = Duration::from_millis(4000);

    d.start(t0);
    assert_eq!(d.announcer().phrases.len(), 1);

    for tick in 1..12u32 {
        d.poll(t0 + interval * tick - Duration::from_millis(1));
        assert_eq!(d.announcer().phrases.len() as u32, tick);

        d.poll(t0 + interval * tick);
        assert_eq!(d.announcer().phrases.len() as u32, tick + 1);
        assert_eq!(d.state(), SessionState::Running);
    }

    assert_eq!(d.remaining(), 0);
    d.poll(t0 + interval * 12);

    assert_eq!(d.announcer().phrases.len(), 12);
    assert_eq!(d.state(), SessionState::Idle);
    assert_eq!(d.surface().display, COMPLETE_MESSAGE);
    assert!(d.surface().selector_enabled);
    assert_eq!(d.surface().label, START_LABEL);
    assert_eq!(d.next_deadline(), None);
}

#[test]
fn every_session_is_a_permutation_of_the_string() {
    for (seed, string) in [(1, GuitarString::LowE), (2, GuitarString::G), (3, GuitarString::HighE)] {
        let t0 = Instant::now();
        let mut d = drill(seed, string, 120);
        d.start(t0);
        run_to_end(&mut d);

        let mut got = announced(&d);
        let mut expected: Vec<String> = d.notes().names().iter().map(|s| s.to_string()).collect();
        got.sort();
        expected.sort();
        assert_eq!(got, expected, "{string}");
    }
}

#[test]
fn shuffle_does_not_favour_fret_order() {
    const TRIALS: u64 = 2400;
    let mut fixed = [0u32; 12];

    for seed in 0..TRIALS {
        let mut d = drill(seed, GuitarString::LowE, 240);
        d.start(Instant::now());
        run_to_end(&mut d);

        let order = announced(&d);
        assert_eq!(order.len(), 12);
        for (index, (got, fret_order)) in order.iter().zip(d.notes().names()).enumerate() {
            if got == fret_order {
                fixed[index] += 1;
            }
        }
    }

    // Expect TRIALS / 12 = 200 at every position.
    for (index, count) in fixed.iter().enumerate() {
        assert!((130..=270).contains(count), "position {index}: {count}");
    }
}

#[test]
fn stalled_poll_announces_a_single_note() {
    let t0 = Instant::now();
    let mut d = drill(10, GuitarString::A, 60);
    d.start(t0);

    d.poll(t0 + Duration::from_secs(20));
    assert_eq!(d.announcer().phrases.len(), 2);
    assert_eq!(d.state(), SessionState::Running);

    // The beat restarts from the late poll.
    d.poll(t0 + Duration::from_secs(23));
    assert_eq!(d.announcer().phrases.len(), 2);
    d.poll(t0 + Duration::from_secs(24));
    assert_eq!(d.announcer().phrases.len(), 3);

    run_to_end(&mut d);
    assert_eq!(d.announcer().phrases.len(), 12);
    assert_eq!(d.state(), SessionState::Idle);
}

#[test]
fn each_tone_sounds_three_seconds_after_its_announcement() {
    let t0 = Instant::now();
    let mut d = drill(9, GuitarString::A, 60);
    d.start(t0);
    let first = d.surface().display.clone();

    d.poll(t0 + TONE_DELAY);
    let info = d.notes().lookup(&first).unwrap();
    assert_eq!(d.tone().tones, vec![(info.frequency_hz, 1.0)]);
    assert_eq!(d.surface().display, format!("{first} (Fret {})", info.fret));

    d.poll(t0 + Duration::from_millis(4000));
    let second = d.surface().display.clone();
    assert_ne!(second, first);
    assert_eq!(d.tone().tones.len(), 1);

    d.poll(t0 + Duration::from_millis(7000));
    assert_eq!(d.tone().tones.len(), 2);
}

#[test]
fn stop_clears_display_and_silences_pending_tone() {
    let t0 = Instant::now();
    let mut d = drill(4, GuitarString::D, 60);
    d.start(t0);
    d.poll(t0 + Duration::from_millis(1000));
    d.toggle(t0 + Duration::from_millis(1500));

    assert_eq!(d.state(), SessionState::Idle);
    assert_eq!(d.surface().display, "");
    assert!(d.surface().selector_enabled);

    d.poll(t0 + Duration::from_secs(30));
    assert!(d.tone().tones.is_empty());
    assert_eq!(d.announcer().phrases.len(), 1);
}

#[test]
fn fast_tempo_completion_cancels_last_tone() {
    // 240 BPM: one note per second, tones trail by three.
    let t0 = Instant::now();
    let mut d = drill(5, GuitarString::B, 240);
    d.start(t0);
    run_to_end(&mut d);

    assert_eq!(d.announcer().phrases.len(), 12);
    assert_eq!(d.state(), SessionState::Idle);
    // Tones for notes announced at 0s..=9s sounded by 12s; the last two were cut off.
    assert_eq!(d.tone().tones.len(), 10);
}

#[test]
fn restart_reshuffles_and_runs_again() {
    let t0 = Instant::now();
    let mut d = drill(6, GuitarString::G, 60);
    d.start(t0);
    d.stop();
    d.start(t0 + Duration::from_secs(1));

    assert_eq!(d.state(), SessionState::Running);
    assert_eq!(d.remaining(), 11);
    assert_eq!(d.announcer().phrases.len(), 2);
}

#[test]
fn unparsable_tempo_falls_back_to_minimum() {
    let t0 = Instant::now();
    let mut d = drill(7, GuitarString::LowE, 60);
    d.set_tempo(Tempo::parse_lossy("abc"));
    d.start(t0);

    d.poll(t0 + Duration::from_secs(239));
    assert_eq!(d.announcer().phrases.len(), 1);
    d.poll(t0 + Duration::from_secs(240));
    assert_eq!(d.announcer().phrases.len(), 2);
}

#[test]
fn phrases_spell_out_accidentals() {
    let t0 = Instant::now();
    let mut d = drill(8, GuitarString::LowE, 60);
    d.start(t0);
    run_to_end(&mut d);

    let phrases = &d.announcer().phrases;
    assert!(phrases.iter().any(|p| p == "F sharp"));
    assert!(phrases.iter().all(|p| !p.contains('#')));
}
