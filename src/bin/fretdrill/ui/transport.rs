//! Transport bar widget - tempo, session state, interval, progress

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::DrillView;

pub fn render_transport(frame: &mut Frame, area: Rect, view: &DrillView) {
    let block = Block::default().title(" fretdrill ").borders(Borders::ALL);

    let (symbol, state, color) = if view.running {
        ("▶", "Running", Color::Green)
    } else {
        ("■", "Idle", Color::Yellow)
    };

    let tempo_style = if view.editing_tempo {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![
        Span::styled(format!(" BPM: {:>3}  ", view.tempo_input), tempo_style),
        Span::styled(format!("{symbol} {state}  "), Style::default().fg(color)),
        Span::styled(
            format!("Every {:.1}s  ", view.interval_secs),
            Style::default().fg(Color::White),
        ),
    ];

    if view.running {
        spans.push(Span::styled(
            format!("{}/{} left", view.remaining, view.total),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(pending) = view.pending_tempo {
        spans.push(Span::styled(
            format!("  (next session: {pending} BPM)"),
            Style::default().fg(Color::Magenta),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
