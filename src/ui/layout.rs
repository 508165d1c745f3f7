use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelArrangement {
    /// Preview left, readouts right.
    SideBySide,
    /// Preview above readouts.
    Stacked,
}

#[must_use]
pub fn arrangement(width: u16) -> PanelArrangement {
    if width >= 100 {
        PanelArrangement::SideBySide
    } else {
        PanelArrangement::Stacked
    }
}

/// Areas of the main screen below the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyAreas {
    pub preview: Rect,
    pub channels: Rect,
    pub uniforms: Rect,
}

#[must_use]
pub fn split_body(area: Rect) -> BodyAreas {
    match arrangement(area.width) {
        PanelArrangement::SideBySide => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Min(3)])
                .split(columns[1]);
            BodyAreas {
                preview: columns[0],
                channels: right[0],
                uniforms: right[1],
            }
        }
        PanelArrangement::Stacked => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(45),
                    Constraint::Length(5),
                    Constraint::Min(3),
                ])
                .split(area);
            BodyAreas {
                preview: rows[0],
                channels: rows[1],
                uniforms: rows[2],
            }
        }
    }
}
