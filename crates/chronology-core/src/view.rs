// File: crates/chronology-core/src/view.rs
// Summary: View state: visible ranges of both axes, capture/restore and data-driven limits.

use crate::transform::CoordinateTransform;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Current view limits of `chart`.
    pub fn capture(chart: &Chart) -> Self {
        Self {
            x_min: chart.x_axis.min,
            x_max: chart.x_axis.max,
            y_min: chart.y_axis.min,
            y_max: chart.y_axis.max,
        }
    }

    /// Limits covering every series point, padded by `margin` (fraction of the
    /// span) in each axis's warped space.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                if !(x.is_finite() && y.is_finite()) { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::capture(chart);
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let (x_min, x_max) = pad_warped(chart.x_axis.transform(), x_min, x_max, margin);
        let (y_min, y_max) = pad_warped(chart.y_axis.transform(), y_min, y_max, margin);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.set_view_interval(self.x_min, self.x_max);
        chart.y_axis.set_view_interval(self.y_min, self.y_max);
    }

    /// Grow (never shrink) to include `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        if x.is_finite() {
            self.x_min = self.x_min.min(x);
            self.x_max = self.x_max.max(x);
        }
        if y.is_finite() {
            self.y_min = self.y_min.min(y);
            self.y_max = self.y_max.max(y);
        }
    }
}

fn pad_warped(t: &dyn CoordinateTransform, lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let (a, b) = (t.forward(lo), t.forward(hi));
    let pad = (b - a) * margin;
    (t.inverse(a - pad), t.inverse(b + pad))
}
