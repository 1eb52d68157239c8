// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;
use std::time::Instant;

pub mod chart;
mod layout;
mod widgets;

/// Accent colour for accepted files, highlights and the waveform (#10b981).
pub const ACCENT: Color = Color::Rgb(16, 185, 129);

pub fn render(app: &App, frame: &mut Frame) {
    let now = Instant::now();
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::drop_zone::render_drop_zone(frame, app, layout.drop_zone);
    widgets::results::render_results(frame, app, layout.fields);
    widgets::waveform_chart::render_waveform(frame, app, layout.chart, now);
    widgets::footer::render_footer(frame, app, layout.footer);

    // Drawn last so it sits above everything else.
    if let Some(notification) = &app.notification {
        widgets::notification_popup::render_notification(frame, notification, area);
    }
}
