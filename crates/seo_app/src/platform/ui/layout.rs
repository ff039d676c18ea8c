use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub urls: Rect,
    pub keywords: Rect,
    pub submit: Rect,
    pub results: Rect,
    pub help: Rect,
}

pub fn form_layout(area: Rect) -> FormLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    FormLayout {
        header: rows[0],
        urls: rows[1],
        keywords: rows[2],
        submit: centered(rows[3], 20),
        results: rows[4],
        help: rows[5],
    }
}

fn centered(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    Rect {
        x: row.x + (row.width - width) / 2,
        width,
        ..row
    }
}
