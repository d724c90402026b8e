//! fretdrill - terminal note-finding drill
//!
//! Run with: cargo run -- --string A --bpm 72

mod app;
mod audio;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::App;
use fretdrill::{
    session::{DrillConfig, Tempo},
    speech::{Announcer, MuteVoice, SystemVoice},
    theory::{GuitarString, Spelling},
};

/// Upper bound the tempo control accepts.
pub const MAX_BPM: u32 = 300;

#[derive(Parser, Debug)]
#[command(name = "fretdrill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tempo in beats per minute; one note every four beats
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=MAX_BPM as i64))]
    bpm: u32,

    /// String to drill: E, A, D, G, B or e (unknown values mean low E)
    #[arg(long, default_value = "E")]
    string: String,

    /// How sharps and flats are written
    #[arg(long, value_enum, default_value_t = SpellingArg::Mixed)]
    spelling: SpellingArg,

    /// Seed for shuffling and mixed spelling
    #[arg(long)]
    seed: Option<u64>,

    /// Speech program to use instead of auto-detection
    #[arg(long)]
    voice: Option<String>,

    /// Do not speak note names
    #[arg(long)]
    mute: bool,

    /// Diagnostic logging: pitch table, note sets, spoken phrases
    #[arg(long)]
    debug: bool,

    /// Where logs are written (the terminal belongs to the UI)
    #[arg(long, default_value = "fretdrill.log")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpellingArg {
    Sharps,
    Flats,
    Mixed,
}

impl From<SpellingArg> for Spelling {
    fn from(arg: SpellingArg) -> Self {
        match arg {
            SpellingArg::Sharps => Spelling::Sharps,
            SpellingArg::Flats => Spelling::Flats,
            SpellingArg::Mixed => Spelling::Mixed,
        }
    }
}

fn init_logging(cli: &Cli) -> EyreResult<()> {
    let filter = if cli.debug {
        EnvFilter::new("fretdrill=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let file = File::create(&cli.log_file)
        .wrap_err_with(|| format!("failed to create log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn pick_voice(cli: &Cli) -> Box<dyn Announcer> {
    if cli.mute {
        return Box::new(MuteVoice);
    }

    let voice = match &cli.voice {
        Some(program) => SystemVoice::with_program(program),
        None => SystemVoice::detect(),
    };
    match voice {
        Ok(voice) => Box::new(voice),
        Err(err) => {
            tracing::warn!(%err, "speaking disabled");
            Box::new(MuteVoice)
        }
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = DrillConfig {
        tempo: Tempo::new(cli.bpm),
        string: GuitarString::from_id(&cli.string),
        spelling: cli.spelling.into(),
        seed: cli.seed,
    };

    let announcer = pick_voice(&cli);
    let (tone, _stream) = audio::open_tone_output();

    let mut app = App::new(config, announcer, tone)?;

    let mut terminal = ratatui::init();
    let res = app.run(&mut terminal);
    ratatui::restore();
    res
}
