// src/ui/widgets/drop_zone.rs

use crate::app::{App, SPINNER_CHARS};
use crate::ui::ACCENT;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the drop zone: the path input, the selected file and the loader.
///
/// The border switches to the accent colour once a file is accepted, and
/// the whole zone is dimmed while a request is in flight.
pub fn render_drop_zone(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.has_accepted_file() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Upload ECG Image (drop a file or type its path)");

    let input_line = Line::from(vec![
        Span::styled("› ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.input.as_str(), Style::default().fg(Color::Yellow)),
    ]);

    let file_line = match app.selected_name() {
        Some(name) => Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(name, Style::default().fg(ACCENT).bold()),
        ]),
        None => Line::from("No file selected.".dark_gray()),
    };

    let status_line = if app.is_submitting() {
        Line::from(vec![
            Span::styled(format!("{} ", SPINNER_CHARS[app.spinner_frame]), Style::default().fg(Color::Cyan)),
            Span::raw("Analyzing image..."),
        ])
    } else {
        Line::from("")
    };

    let mut paragraph = Paragraph::new(vec![input_line, file_line, status_line]).block(block);
    if app.is_submitting() {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(paragraph, area);

    if !app.is_submitting() && app.notification.is_none() {
        let cursor_x = area.x + 3 + app.input.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
