use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{meter_bar, panel_block};
use crate::app::state::AppState;

const LABEL_WIDTH: usize = 8;

/// Target channels next to the smoothed background values chasing them.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block("Channels", Color::DarkGray);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let target = state.active_snapshot().channels;
    let smoothed = state.uniforms().background;
    let bar_width = usize::from(inner.width).saturating_sub(LABEL_WIDTH + 14).max(4);

    let rows = [
        ("temp", target.temp01, smoothed.temp, Color::LightRed),
        ("precip", target.precip01, smoothed.precip, Color::LightBlue),
        ("wind", target.wind01, smoothed.wind, Color::LightCyan),
    ];
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, target, current, color)| {
            Line::from(vec![
                Span::raw(format!("{label:<LABEL_WIDTH$}")),
                Span::styled(meter_bar(current, bar_width), Style::default().fg(color)),
                Span::styled(
                    format!(" {current:.3} → {target:.2}"),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
