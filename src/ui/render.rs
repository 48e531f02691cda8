//! Terminal dashboard for the demo driver.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

/// Everything the dashboard needs for one frame.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    /// One-line status: trial count, stage, rolling accuracy.
    pub hud: String,
    /// Rolling accuracy per trial, scaled to 0..=100 for the sparkline.
    pub accuracy_history: Vec<u64>,
    /// Pre-rendered memory lines: per-percept probability bars, path, counts.
    pub memory_lines: Vec<String>,
}

/// Renders one ASCII probability bar, e.g. `happy  + 0.83 |########--|`.
#[must_use]
pub fn probability_bar(label: &str, action: &str, probability: f64, width: usize) -> String {
    let clamped = probability.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (clamped * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width);
    for i in 0..width {
        bar.push(if i < filled { '#' } else { '-' });
    }
    format!("{label:>8} {action} {clamped:.2} |{bar}|")
}

/// Draws the HUD, the rolling-accuracy sparkline, and the memory panel.
pub fn draw_ui(f: &mut Frame, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Length(6), // Accuracy sparkline
            Constraint::Min(0),    // Memory panel
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        state.hud.clone(),
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Rolling accuracy (%)"),
        )
        .data(&state.accuracy_history)
        .max(100)
        .style(Style::default().fg(Color::Green));
    f.render_widget(sparkline, chunks[1]);

    let text: Vec<Line> = state
        .memory_lines
        .iter()
        .map(|s| Line::from(Span::raw(s.clone())))
        .collect();
    let memory = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Clip memory"))
        .style(Style::default().fg(Color::White));
    f.render_widget(memory, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_bar_full_and_empty() {
        let full = probability_bar("happy", "+", 1.0, 10);
        assert!(full.contains("|##########|"));
        let empty = probability_bar("sad", "+", 0.0, 10);
        assert!(empty.contains("|----------|"));
    }

    #[test]
    fn test_probability_bar_clamps() {
        let over = probability_bar("x", "+", 2.0, 4);
        assert!(over.contains("1.00"));
        assert!(over.contains("|####|"));
    }
}
