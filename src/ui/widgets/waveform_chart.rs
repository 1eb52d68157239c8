// src/ui/widgets/waveform_chart.rs

use crate::app::App;
use crate::ui::ACCENT;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use std::time::Instant;

/// Renders the mounted waveform chart, if any.
///
/// The x axis carries no labels; the y axis shows three dim grey ticks.
pub fn render_waveform(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let block = Block::default().borders(Borders::ALL).title("Digital ECG Waveform");

    let Some(chart) = app.chart.current().filter(|_| app.results_visible()) else {
        frame.render_widget(block, area);
        return;
    };

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(ACCENT))
        .data(chart.visible_points(now));

    let [lo, hi] = chart.y_bounds();
    let tick_style = Style::default().fg(Color::DarkGray);
    let y_labels = [lo, (lo + hi) / 2.0, hi].map(|v| Span::styled(format!("{v:.0}"), tick_style));

    let widget = Chart::new(vec![dataset])
        .block(block)
        .legend_position(None)
        .x_axis(Axis::default().bounds(chart.x_bounds()))
        .y_axis(Axis::default().bounds([lo, hi]).labels(y_labels).style(tick_style));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::AnalysisResult;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn braille_cells(app: &App, now: Instant) -> usize {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_waveform(frame, app, area, now)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .filter(|c| c.symbol().chars().any(|ch| ('\u{2801}'..='\u{28FF}').contains(&ch)))
            .count()
    }

    fn analysis(waveform: Vec<f64>) -> AnalysisResult {
        AnalysisResult {
            heart_rate: 80.0,
            abnormality: "Normal".to_string(),
            stress_level: "Low".to_string(),
            confidence_score: 75.0,
            medical_advice: String::new(),
            waveform,
        }
    }

    #[test]
    fn test_nothing_drawn_without_results() {
        assert_eq!(braille_cells(&App::new(), Instant::now()), 0);
    }

    #[test]
    fn test_line_appears_after_animation() {
        let mut app = App::new();
        let start = Instant::now();
        let samples: Vec<f64> = (0..300).map(|i| ((i as f64) / 10.0).sin() * 50.0).collect();
        app.display_results_at(analysis(samples), start);

        assert_eq!(braille_cells(&app, start), 0);
        assert!(braille_cells(&app, start + Duration::from_millis(2000)) > 0);
    }

    #[test]
    fn test_rerender_draws_single_chart() {
        let mut app = App::new();
        let start = Instant::now();
        app.display_results_at(analysis(vec![0.0; 1500]), start);
        app.display_results_at(analysis(vec![1.0, 5.0, 2.0, 8.0]), start);

        assert_eq!(app.chart.active_instances(), 1);
        assert_eq!(app.chart.current().unwrap().sample_count(), 4);
        assert!(braille_cells(&app, start + Duration::from_secs(3)) > 0);
    }
}
