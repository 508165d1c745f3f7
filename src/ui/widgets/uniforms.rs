use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Row, Table},
};

use super::shared::panel_block;
use crate::{
    app::state::AppState,
    ui::theme::{detect_color_capability, effect_color, kind_accent},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let effect = &state.uniforms().effect;
    let block = panel_block("Uniforms", kind_accent(effect.kind()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut rows: Vec<Row> = effect
        .scalars()
        .into_iter()
        .map(|(name, value)| {
            Row::new(vec![
                Cell::from(name),
                Cell::from(format!("{value:>10.4}")),
            ])
        })
        .collect();

    if let Some(palette) = effect.palette() {
        let capability = detect_color_capability();
        for (name, color) in [("uColor", palette.base), ("uHighlight", palette.highlight)] {
            let (r, g, b) = color.to_rgb8();
            rows.push(Row::new(vec![
                Cell::from(name),
                Cell::from(format!("#{r:02x}{g:02x}{b:02x} ██"))
                    .style(Style::default().fg(effect_color(color, capability))),
            ]));
        }
    }

    if rows.is_empty() {
        rows.push(Row::new(vec![
            Cell::from("no effect for this code"),
            Cell::from(""),
        ]));
    }

    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(12)]).header(
        Row::new(vec!["uniform", "value"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(table, inner);
}
