//! Benchmarks for the drill's hot spots.
//!
//! Run with: cargo bench
//!
//! Table and note-set generation run on every string change; tone rendering
//! runs inside the audio callback and must stay well under the block
//! deadline (64 samples at 48kHz = 1.33ms).

use std::{collections::VecDeque, hint::black_box};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fretdrill::{
    theory::{build_note_set, generate_table, select_range, GuitarString, Speller, Spelling, DRILL_OCTAVES},
    tone::{ToneMessage, ToneVoice},
};

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

fn bench_theory(c: &mut Criterion) {
    let mut group = c.benchmark_group("theory");

    group.bench_function("generate_table", |b| {
        b.iter(|| generate_table(black_box(DRILL_OCTAVES)))
    });

    let table = generate_table(DRILL_OCTAVES);
    let mut speller = Speller::new(Spelling::Mixed, 1);
    group.bench_function("note_set/high_e", |b| {
        b.iter(|| {
            let slice = select_range(black_box(GuitarString::HighE), &table).unwrap();
            build_note_set(slice, &mut speller)
        })
    });

    group.finish();
}

fn bench_tone(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut messages = VecDeque::new();
        messages.push_back(ToneMessage::Play {
            frequency_hz: 110.0,
            duration_secs: 3600.0,
        });
        let mut voice = ToneVoice::new(48_000.0, messages);

        group.bench_with_input(BenchmarkId::new("sounding", size), &size, |b, _| {
            b.iter(|| voice.render_block(black_box(&mut buffer)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_theory, bench_tone);
criterion_main!(benches);
