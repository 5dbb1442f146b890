use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge},
};

/// Bordered panel block with a title
pub fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Create a gauge with color based on how full it is
pub fn colored_gauge<'a>(percent: f64, label: &'a str) -> Gauge<'a> {
    Gauge::default()
        .gauge_style(Style::default().fg(usage_color(percent)).bg(Color::Black))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label)
}

/// Color for a usage percentage
pub fn usage_color(percent: f64) -> Color {
    match percent {
        p if p < 50.0 => Color::Cyan,
        p if p < 75.0 => Color::LightYellow,
        p if p < 90.0 => Color::LightRed,
        _ => Color::Red,
    }
}
