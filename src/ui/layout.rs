use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub image: Rect,
    pub description: Rect,
    pub buttons: Rect,
    pub hints: Rect,
}

const DESCRIPTION_HEIGHT: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;

pub fn card_regions(area: Rect, show_hints: bool) -> CardRegions {
    let hints_height = if show_hints { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(DESCRIPTION_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(hints_height),
        ])
        .split(area);

    CardRegions {
        image: rows[0],
        description: rows[2],
        buttons: rows[4],
        hints: rows[5],
    }
}

/// Splits the button row into (prev, next) with a narrow gap between them.
pub fn button_regions(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(5),
            Constraint::Fill(1),
            Constraint::Fill(5),
        ])
        .split(area);
    (cols[0], cols[2])
}
