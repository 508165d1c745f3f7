use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState, SourceMode},
    ui::theme::kind_accent,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let snapshot = state.active_snapshot();
    let accent = kind_accent(snapshot.kind);
    let source = match state.source {
        SourceMode::Live => Span::styled(
            " LIVE ",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        SourceMode::Override => Span::styled(
            " OVERRIDE ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
    };
    let code = snapshot
        .weathercode
        .map_or_else(|| "--".to_string(), |code| code.to_string());

    let title = Line::from(vec![
        Span::styled(
            "skyshade",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}  ", state.settings.location().display_name())),
        source,
        Span::raw("  "),
        Span::styled(
            snapshot.kind.as_str().to_uppercase(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {} (code {code})", snapshot.label())),
    ]);

    let frame_line = Line::from(vec![
        Span::styled(status_text(state), status_style(state)),
        Span::styled(
            format!(
                "  frame {}  fbo {}px",
                state.frame_tick,
                state.background_texture_size()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(vec![title, frame_line]), area);
}

fn status_text(state: &AppState) -> String {
    match &state.last_error {
        Some(err) => format!("{} ({err})", state.status),
        None => state.status.clone(),
    }
}

fn status_style(state: &AppState) -> Style {
    match state.mode {
        AppMode::Error => Style::default().fg(Color::LightRed),
        _ if state.last_error.is_some() => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Gray),
    }
}
