// src/ui/widgets/notification_popup.rs

use crate::app::{Notification, NotificationKind};
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders a blocking notification on top of the rest of the UI.
///
/// `Clear` wipes the popup area first so the background does not bleed
/// through.
pub fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let (title, color) = match notification.kind {
        NotificationKind::Warning => ("Notice", Color::Yellow),
        NotificationKind::Error => ("Error", Color::Red),
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(notification.message.as_str()),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to continue".bold()),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let popup_area = centered_rect(60, 40, area);
    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
