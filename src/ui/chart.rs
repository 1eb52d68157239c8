// src/ui/chart.rs

use crate::core::waveform::{self, CURVE_TENSION};
use std::time::Instant;
use tracing::debug;

/// One rendered waveform, ready to be drawn.
#[derive(Debug)]
pub struct WaveformChart {
    id: u64,
    points: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    sample_count: usize,
    mounted_at: Instant,
}

impl WaveformChart {
    fn build(id: u64, samples: &[f64], mounted_at: Instant) -> Self {
        let series = waveform::downsample(samples);
        let points = waveform::smooth(&waveform::to_points(&series), CURVE_TENSION);
        Self {
            id,
            x_bounds: [0.0, series.len().saturating_sub(1).max(1) as f64],
            y_bounds: waveform::y_bounds(&series),
            sample_count: series.len(),
            points,
            mounted_at,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of samples plotted after decimation.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// The prefix of the line visible at `now`, per the entrance animation.
    pub fn visible_points(&self, now: Instant) -> &[(f64, f64)] {
        let progress = waveform::reveal_progress(now.saturating_duration_since(self.mounted_at));
        let count = (progress * self.points.len() as f64).ceil() as usize;
        &self.points[..count.min(self.points.len())]
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.mounted_at) < waveform::ANIMATION_DURATION
    }
}

/// Owns the chart currently bound to the results panel.
///
/// Rendering a new waveform disposes of the previous chart first, so at
/// most one chart is ever mounted.
#[derive(Debug, Default)]
pub struct ChartCanvas {
    current: Option<WaveformChart>,
    next_id: u64,
    mounted: usize,
    disposed: usize,
}

impl ChartCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, samples: &[f64], now: Instant) -> &WaveformChart {
        if let Some(previous) = self.current.take() {
            self.dispose(previous);
        }
        self.next_id += 1;
        let chart = WaveformChart::build(self.next_id, samples, now);
        debug!(id = chart.id(), samples = samples.len(), plotted = chart.sample_count(), "Mounted waveform chart.");
        self.mounted += 1;
        debug_assert_eq!(self.active_instances(), 1);
        self.current.insert(chart)
    }

    fn dispose(&mut self, chart: WaveformChart) {
        debug!(id = chart.id(), "Disposed waveform chart.");
        self.disposed += 1;
        drop(chart);
    }

    pub fn current(&self) -> Option<&WaveformChart> {
        self.current.as_ref()
    }

    /// Charts mounted and not yet disposed.
    pub fn active_instances(&self) -> usize {
        self.mounted - self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_render_twice_keeps_one_instance() {
        let mut canvas = ChartCanvas::new();
        let now = Instant::now();
        canvas.render(&[1.0, 2.0, 3.0], now);
        canvas.render(&[4.0, 5.0, 6.0, 7.0], now);

        assert_eq!(canvas.active_instances(), 1);
        let chart = canvas.current().unwrap();
        assert_eq!(chart.id(), 2);
        assert_eq!(chart.sample_count(), 4);
    }

    #[test]
    fn test_long_waveform_is_decimated() {
        let mut canvas = ChartCanvas::new();
        let samples: Vec<f64> = (0..2400).map(|i| (i % 50) as f64).collect();
        let chart = canvas.render(&samples, Instant::now());
        assert_eq!(chart.sample_count(), 1200);
        assert_eq!(chart.x_bounds(), [0.0, 1199.0]);
    }

    #[test]
    fn test_short_waveform_is_not_decimated() {
        let mut canvas = ChartCanvas::new();
        let samples = vec![0.5; 800];
        assert_eq!(canvas.render(&samples, Instant::now()).sample_count(), 800);
    }

    #[test]
    fn test_entrance_animation_reveals_everything() {
        let mut canvas = ChartCanvas::new();
        let start = Instant::now();
        let chart = canvas.render(&[1.0, 3.0, 2.0, 5.0, 4.0], start);

        assert!(chart.visible_points(start).is_empty());
        assert!(chart.is_animating(start));

        let done = start + Duration::from_millis(2000);
        assert_eq!(chart.visible_points(done).len(), 9);
        assert!(!chart.is_animating(done));
    }

    #[test]
    fn test_single_sample_has_usable_bounds() {
        let mut canvas = ChartCanvas::new();
        let chart = canvas.render(&[42.0], Instant::now());
        assert_eq!(chart.x_bounds(), [0.0, 1.0]);
        assert_eq!(chart.y_bounds(), [41.0, 43.0]);
    }
}
