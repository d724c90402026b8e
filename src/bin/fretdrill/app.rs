//! App - drives the drill from terminal input and the clock

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use fretdrill::{
    session::{Drill, DrillConfig, Tempo},
    speech::Announcer,
    theory::GuitarString,
    tone::ToneSink,
};

use super::{
    ui::{self, DrillView, TerminalSurface},
    MAX_BPM,
};

/// Longest wait between redraws (~60fps).
const FRAME: Duration = Duration::from_millis(16);

type TerminalDrill = Drill<TerminalSurface, Box<dyn Announcer>, Box<dyn ToneSink>>;

pub struct App {
    drill: TerminalDrill,
    /// Tempo field as typed.
    tempo_input: String,
    editing_tempo: bool,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: DrillConfig,
        announcer: Box<dyn Announcer>,
        tone: Box<dyn ToneSink>,
    ) -> EyreResult<Self> {
        let drill = Drill::new(config, TerminalSurface::new(), announcer, tone)?;
        Ok(Self {
            tempo_input: config.tempo.bpm().to_string(),
            drill,
            editing_tempo: false,
            status: None,
            should_quit: false,
        })
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.drill.poll(Instant::now());

            terminal.draw(|frame| ui::render(frame, &self.view()))?;

            let wait = self
                .drill
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()).min(FRAME))
                .unwrap_or(FRAME);

            if event::poll(wait)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.drill.stop();
        Ok(())
    }

    fn view(&self) -> DrillView<'_> {
        let session_tempo = self.drill.session_tempo();
        let tempo = session_tempo.unwrap_or(self.drill.tempo());
        let pending_tempo = session_tempo
            .filter(|running| *running != self.drill.tempo())
            .map(|_| self.drill.tempo().bpm());

        DrillView {
            surface: self.drill.surface(),
            running: self.drill.is_running(),
            string: self.drill.string(),
            tempo_input: &self.tempo_input,
            editing_tempo: self.editing_tempo,
            interval_secs: tempo.interval().as_secs_f64(),
            pending_tempo,
            remaining: self.drill.remaining(),
            total: self.drill.notes().len(),
            status: self.status.as_deref(),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        self.status = None;

        if self.editing_tempo {
            match key {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.tempo_input.len() < 3 {
                        self.tempo_input.push(c);
                        self.apply_tempo_input();
                    }
                }
                KeyCode::Backspace => {
                    self.tempo_input.pop();
                    self.apply_tempo_input();
                }
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('T') => {
                    self.editing_tempo = false;
                    self.tempo_input = self.drill.tempo().bpm().to_string();
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.drill.toggle(Instant::now()),
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.editing_tempo = true;
                self.tempo_input.clear();
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => self.nudge_tempo(1),
            KeyCode::Char('-') | KeyCode::Down => self.nudge_tempo(-1),
            KeyCode::Right => self.select_string(self.drill.string().next()),
            KeyCode::Left => self.select_string(self.drill.string().prev()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.select_string(GuitarString::ALL[index]);
            }
            _ => {}
        }
    }

    /// Typed tempo: unusable input falls back to the minimum, the field caps at `MAX_BPM`.
    fn apply_tempo_input(&mut self) {
        let tempo = Tempo::parse_lossy(&self.tempo_input);
        self.drill.set_tempo(Tempo::new(tempo.bpm().min(MAX_BPM)));
    }

    fn nudge_tempo(&mut self, delta: i64) {
        let bpm = (self.drill.tempo().bpm() as i64 + delta).clamp(1, MAX_BPM as i64) as u32;
        self.drill.set_tempo(Tempo::new(bpm));
        self.tempo_input = bpm.to_string();
    }

    fn select_string(&mut self, string: GuitarString) {
        if let Err(err) = self.drill.select_string(string) {
            self.status = Some(err.to_string());
        }
    }
}
