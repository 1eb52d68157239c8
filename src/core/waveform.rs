// src/core/waveform.rs

//! Sample preparation for the waveform chart: decimation of long signals,
//! spline smoothing, axis bounds and the entrance animation curve.

use std::time::Duration;

/// Signals longer than this are decimated before plotting.
pub const DOWNSAMPLE_THRESHOLD: usize = 1000;

/// Spline tension applied to the plotted line.
pub const CURVE_TENSION: f64 = 0.2;

/// Length of the entrance animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);

/// Keeps every other sample, starting at index 0, when the signal is longer
/// than [`DOWNSAMPLE_THRESHOLD`]. Shorter signals are returned unchanged.
pub fn downsample(samples: &[f64]) -> Vec<f64> {
    if samples.len() > DOWNSAMPLE_THRESHOLD {
        samples.iter().step_by(2).copied().collect()
    } else {
        samples.to_vec()
    }
}

/// Pairs each sample with its index as the x coordinate.
pub fn to_points(samples: &[f64]) -> Vec<(f64, f64)> {
    samples.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect()
}

/// Inserts one interpolated point between every pair of points.
///
/// Control points follow the cardinal spline used by
/// browser charting libraries: each point's tangent is the chord between
/// its neighbours, scaled by `tension` and split by segment length. The
/// inserted point is the midpoint of the resulting cubic Bézier segment.
/// Original points are kept, so `n` points become `2n - 1`.
pub fn smooth(points: &[(f64, f64)], tension: f64) -> Vec<(f64, f64)> {
    if points.len() < 3 || tension == 0.0 {
        return points.to_vec();
    }

    let controls: Vec<((f64, f64), (f64, f64))> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let curr = points[i];
            let next = points[(i + 1).min(points.len() - 1)];
            spline_controls(prev, curr, next, tension)
        })
        .collect();

    let mut out = Vec::with_capacity(points.len() * 2 - 1);
    for i in 0..points.len() - 1 {
        let p0 = points[i];
        let p3 = points[i + 1];
        let c1 = controls[i].1;
        let c2 = controls[i + 1].0;
        out.push(p0);
        out.push((
            (p0.0 + 3.0 * c1.0 + 3.0 * c2.0 + p3.0) / 8.0,
            (p0.1 + 3.0 * c1.1 + 3.0 * c2.1 + p3.1) / 8.0,
        ));
    }
    out.push(points[points.len() - 1]);
    out
}

fn spline_controls(
    prev: (f64, f64),
    curr: (f64, f64),
    next: (f64, f64),
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = (curr.0 - prev.0).hypot(curr.1 - prev.1);
    let d12 = (next.0 - curr.0).hypot(next.1 - curr.1);
    let total = d01 + d12;
    if total == 0.0 {
        return (curr, curr);
    }
    let fa = tension * d01 / total;
    let fb = tension * d12 / total;
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    ((curr.0 - fa * dx, curr.1 - fa * dy), (curr.0 + fb * dx, curr.1 + fb * dy))
}

/// Y-axis range with 5% headroom. Flat or empty signals get a unit range.
pub fn y_bounds(samples: &[f64]) -> [f64; 2] {
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    if max - min == 0.0 {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * 0.05;
    [min - pad, max + pad]
}

/// Quartic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Fraction of the series revealed after `elapsed`.
pub fn reveal_progress(elapsed: Duration) -> f64 {
    ease_in_out_quart(elapsed.as_secs_f64() / ANIMATION_DURATION.as_secs_f64())
}
