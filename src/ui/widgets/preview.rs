use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::panel_block;
use crate::{
    app::state::AppState,
    ui::{
        preview::shade,
        theme::{detect_color_capability, effect_color, kind_accent},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let uniforms = state.uniforms();
    let block = panel_block("Preview", kind_accent(uniforms.effect.kind()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let capability = detect_color_capability();
    let (w, h) = (f32::from(inner.width), f32::from(inner.height));
    let lines: Vec<Line> = (0..inner.height)
        .map(|y| {
            let spans: Vec<Span> = (0..inner.width)
                .map(|x| {
                    let cell = shade(
                        uniforms,
                        (f32::from(x) + 0.5) / w,
                        (f32::from(y) + 0.5) / h,
                    );
                    Span::styled(
                        cell.glyph.to_string(),
                        Style::default().fg(effect_color(cell.color, capability)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
