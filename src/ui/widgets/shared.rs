use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};

pub(super) fn panel_block(title: &'static str, border: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Horizontal bar for a `[0, 1]` value, `width` cells wide.
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(super) fn meter_bar(value: f32, width: usize) -> String {
    const PARTIAL: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
    if width == 0 {
        return String::new();
    }
    let eighths = (value.clamp(0.0, 1.0) * (width * 8) as f32).round() as usize;
    let full = eighths / 8;
    let rest = eighths % 8;
    let mut out = "█".repeat(full);
    if rest > 0 {
        out.push(PARTIAL[rest - 1]);
    }
    let used = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::meter_bar;

    #[test]
    fn meter_bar_zero_width_returns_empty() {
        assert_eq!(meter_bar(0.5, 0), String::new());
    }

    #[test]
    fn meter_bar_keeps_requested_width() {
        for value in [0.0, 0.13, 0.5, 0.99, 1.0, 7.0, -1.0] {
            assert_eq!(meter_bar(value, 10).chars().count(), 10, "{value}");
        }
    }

    #[test]
    fn meter_bar_full_and_empty() {
        assert_eq!(meter_bar(1.0, 4), "████");
        assert_eq!(meter_bar(0.0, 4), "    ");
        assert_eq!(meter_bar(0.5, 4), "██  ");
    }
}
