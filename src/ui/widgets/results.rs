// src/ui/widgets/results.rs

use crate::app::App;
use crate::core::models::HeartRateTone;
use crate::ui::ACCENT;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn tone_style(tone: HeartRateTone) -> Style {
    match tone {
        HeartRateTone::Highlight => Style::default().fg(ACCENT).bold(),
        HeartRateTone::Warning => Style::default().fg(Color::Red).bold(),
    }
}

fn field<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)), value])
}

/// Renders the five analysis fields, or a placeholder before the first result.
pub fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let Some(displayed) = &app.displayed else {
        let placeholder = Paragraph::new("Analysis results will appear here...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Analysis Results"));
        frame.render_widget(placeholder, area);
        return;
    };

    let result = &displayed.result;
    let title = format!(
        "Analysis Results (received {})",
        displayed.received_at.format("%H:%M:%S")
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let lines = vec![
        field("Heart Rate", Span::styled(result.heart_rate_text(), tone_style(displayed.tone))),
        field("Abnormality", Span::raw(result.abnormality.as_str())),
        field("Stress", Span::raw(result.stress_level.as_str())),
        field("Confidence", Span::raw(result.confidence_text())),
        Line::from(""),
        Line::from("MEDICAL ADVICE".yellow().bold()),
        Line::from(result.medical_advice.as_str()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.results_scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::AnalysisResult;
    use crate::ui::tests::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> (String, ratatui::buffer::Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_results(frame, app, area)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (buffer_text(&buffer), buffer)
    }

    fn analysis(abnormality: &str) -> AnalysisResult {
        AnalysisResult {
            heart_rate: 58.4,
            abnormality: abnormality.to_string(),
            stress_level: "Moderate".to_string(),
            confidence_score: 45.0,
            medical_advice: "Consult a doctor.".to_string(),
            waveform: vec![1.0, 2.0],
        }
    }

    fn heart_rate_fg(buffer: &ratatui::buffer::Buffer) -> Option<Color> {
        buffer
            .content
            .windows(3)
            .find(|w| w[0].symbol() == "B" && w[1].symbol() == "P" && w[2].symbol() == "M")
            .map(|w| w[0].fg)
    }

    #[test]
    fn test_placeholder_before_results() {
        let (text, _) = render(&App::new());
        assert!(text.contains("Analysis results will appear here"));
    }

    #[test]
    fn test_fields_are_rendered_verbatim() {
        let mut app = App::new();
        app.display_results(analysis("Bradycardia (Low Heart Rate)"));
        let (text, buffer) = render(&app);

        assert!(text.contains("58.4 BPM"));
        assert!(text.contains("Bradycardia (Low Heart Rate)"));
        assert!(text.contains("Moderate"));
        assert!(text.contains("45%"));
        assert!(text.contains("Consult a doctor."));
        assert_eq!(heart_rate_fg(&buffer), Some(Color::Red));
    }

    #[test]
    fn test_normal_is_highlighted() {
        let mut app = App::new();
        app.display_results(analysis("Normal"));
        let (_, buffer) = render(&app);
        assert_eq!(heart_rate_fg(&buffer), Some(ACCENT));
    }
}
