// src/ui/widgets/footer.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer: key hints and the current state.
///
/// The analyze hint is greyed out whenever the trigger is disabled.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = Style::new().bold().fg(Color::Yellow);

    let line = if app.notification.is_some() {
        Line::from(vec![
            Span::styled("Enter", key),
            Span::raw(" / "),
            Span::styled("Esc", key),
            Span::raw(" to dismiss."),
        ])
    } else {
        let analyze_style = if app.can_submit() { key } else { Style::new().fg(Color::DarkGray) };
        Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw(" select path  "),
            Span::styled("[F5]", analyze_style),
            Span::styled(" analyze  ", if app.can_submit() { Style::new() } else { analyze_style }),
            Span::styled("[Esc]", key),
            Span::raw(" clear/quit  "),
            Span::styled(format!("· {}", app.state), Style::new().fg(Color::Cyan)),
        ])
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
