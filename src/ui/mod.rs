pub mod layout;
pub mod preview;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    ui::layout::{MIN_HEIGHT, MIN_WIDTH, split_body},
};

const KEY_HINTS: &str =
    "q quit  r refresh  o live/override  [ ] code  t/T p/P w/W channels  s save settings";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("skyshade"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], state);

    let body = split_body(chunks[1]);
    widgets::preview::render(frame, body.preview, state);
    widgets::channels::render(frame, body.channels, state);
    widgets::uniforms::render(frame, body.uniforms, state);

    let footer = Paragraph::new(Line::from(KEY_HINTS)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}
