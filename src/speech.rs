//! Announcement sink: turns pitch names into spoken phrases.

use std::{
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

use crate::error::DrillError;

/// Programs tried, in order, when no voice is configured.
pub const DEFAULT_PROGRAMS: &[&str] = &["espeak-ng", "espeak", "say", "spd-say"];

/// Fire-and-forget speech output.
pub trait Announcer {
    fn speak(&mut self, text: &str);
}

impl<A: Announcer + ?Sized> Announcer for Box<A> {
    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}

/// Phrase for a pitch name: `C#` -> `C sharp`, `Bb` -> `B flat`, `A` -> `A`.
///
/// The first letter is uppercased; at most one accidental is spelled out,
/// `#` taking precedence over `b`.
pub fn speech_text(pitch: &str) -> String {
    let mut chars = pitch.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();

    let mut text: String = first.to_uppercase().collect();
    if !rest.is_empty() {
        text.push(' ');
        if rest.contains('#') {
            text.push_str(&rest.replacen('#', "sharp", 1));
        } else if rest.contains('b') {
            text.push_str(&rest.replacen('b', "flat", 1));
        } else {
            text.push_str(rest);
        }
    }
    text
}

/// Speaks through an installed TTS command, one child process per phrase.
pub struct SystemVoice {
    program: PathBuf,
    args: Vec<&'static str>,
    children: Vec<Child>,
}

impl SystemVoice {
    /// First program from [`DEFAULT_PROGRAMS`] found on `PATH`.
    pub fn detect() -> Result<Self, DrillError> {
        DEFAULT_PROGRAMS
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(Self::from_path)
            .ok_or_else(|| DrillError::VoiceNotFound {
                tried: DEFAULT_PROGRAMS.join(", "),
            })
    }

    /// Use a specific program (name on `PATH` or a path).
    pub fn with_program(program: &str) -> Result<Self, DrillError> {
        let path = which::which(program).map_err(|source| DrillError::VoiceUnavailable {
            program: program.to_string(),
            source,
        })?;
        Ok(Self::from_path(path))
    }

    fn from_path(program: PathBuf) -> Self {
        let args = english_voice_args(&program);
        tracing::info!(program = %program.display(), "using system voice");
        Self {
            program,
            args,
            children: Vec::new(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Drop handles of phrases that finished speaking.
    fn reap(&mut self) {
        self.children
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

fn english_voice_args(program: &Path) -> Vec<&'static str> {
    let name = program
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match name {
        "espeak-ng" | "espeak" => vec!["-v", "en-us"],
        "spd-say" => vec!["-l", "en"],
        _ => Vec::new(),
    }
}

impl Announcer for SystemVoice {
    fn speak(&mut self, text: &str) {
        self.reap();

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => self.children.push(child),
            Err(err) => tracing::warn!(program = %self.program.display(), %err, "speech failed"),
        }
    }
}

/// Speaks nowhere; phrases only reach the log.
#[derive(Debug, Default)]
pub struct MuteVoice;

impl Announcer for MuteVoice {
    fn speak(&mut self, text: &str) {
        tracing::debug!(text, "muted phrase");
    }
}
