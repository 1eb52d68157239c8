// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the upload widget.
pub struct AppLayout {
    pub drop_zone: Rect,
    pub fields: Rect,
    pub chart: Rect,
    pub footer: Rect,
}

/// Splits the frame into the drop zone at the top, the results panel
/// (text fields above the waveform chart) and a one-line footer.
///
/// The results regions are still computed when the panel is hidden so that
/// the placeholder can occupy them.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let results_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(main_chunks[1]);

    AppLayout {
        drop_zone: main_chunks[0],
        fields: results_chunks[0],
        chart: results_chunks[1],
        footer: main_chunks[2],
    }
}

/// A rectangle centered in `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
