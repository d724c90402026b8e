//! TUI module for fretdrill
//!
//! The control surface: transport bar, string selector, and the current
//! pitch display.

pub mod surface;
mod transport;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use fretdrill::theory::GuitarString;

pub use surface::TerminalSurface;

use transport::render_transport;

/// Everything one frame needs, copied out of the drill.
pub struct DrillView<'a> {
    pub surface: &'a TerminalSurface,
    pub running: bool,
    pub string: GuitarString,
    pub tempo_input: &'a str,
    pub editing_tempo: bool,
    pub interval_secs: f64,
    /// Tempo waiting for the next session, if it differs from the running one.
    pub pending_tempo: Option<u32>,
    pub remaining: usize,
    pub total: usize,
    pub status: Option<&'a str>,
}

pub fn render(frame: &mut Frame, view: &DrillView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Length(3), // String selector
            Constraint::Min(5),    // Pitch display
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_transport(frame, chunks[0], view);
    render_selector(frame, chunks[1], view);
    render_display(frame, chunks[2], view);

    if let Some(status) = view.status {
        let status = Paragraph::new(format!(" {status}")).style(Style::default().fg(Color::Red));
        frame.render_widget(status, chunks[3]);
    }

    let help = Paragraph::new(format!(
        " [Space] {}  [←/→ 1-6] String  [T] Type tempo  [+/-] Tempo  [Q] Quit",
        view.surface.toggle_label
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

fn render_selector(frame: &mut Frame, area: Rect, view: &DrillView) {
    let titles: Vec<Line> = GuitarString::ALL
        .iter()
        .map(|s| Line::from(format!(" {} ", s.id())))
        .collect();

    let (style, highlight) = if view.surface.selector_enabled {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray).add_modifier(Modifier::UNDERLINED),
        )
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().title(" String ").borders(Borders::ALL))
        .style(style)
        .highlight_style(highlight)
        .select(view.string.index());
    frame.render_widget(tabs, area);
}

fn render_display(frame: &mut Frame, area: Rect, view: &DrillView) {
    let block = Block::default().title(" Pitch ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically center a single line.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    let pitch = Paragraph::new(view.surface.display.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(pitch, rows[1]);
}
