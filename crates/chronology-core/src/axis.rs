// File: crates/chronology-core/src/axis.rs
// Summary: Axis model: label, view interval, installed scale, tick locators and formatters.

use crate::formatter::Formatter;
use crate::locator::{Locator, TickLocator};
use crate::scale::{AxisDefaults, AxisScale, Scale};
use crate::transform::CoordinateTransform;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    /// View interval, source units.
    pub min: f64,
    pub max: f64,
    scale: AxisScale,
    pub major_locator: Locator,
    pub minor_locator: Locator,
    pub major_formatter: Formatter,
    pub minor_formatter: Formatter,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        let scale = AxisScale::default();
        let AxisDefaults { major_locator, minor_locator, major_formatter, minor_formatter } =
            scale.default_locators_and_formatters();
        Self {
            label: label.into(),
            min,
            max,
            scale,
            major_locator,
            minor_locator,
            major_formatter,
            minor_formatter,
        }
    }

    pub fn default_x() -> Self {
        Self::new("Released", 1800.0, 2030.0)
    }

    pub fn default_y() -> Self {
        Self::new("Setting - Released", -1000.0, 1000.0)
    }

    /// Install a scale; its default locators and formatters replace whatever the axis had.
    pub fn set_scale(&mut self, scale: impl Into<AxisScale>) {
        let scale = scale.into();
        let AxisDefaults { major_locator, minor_locator, major_formatter, minor_formatter } =
            scale.default_locators_and_formatters();
        self.major_locator = major_locator;
        self.minor_locator = minor_locator;
        self.major_formatter = major_formatter;
        self.minor_formatter = minor_formatter;
        self.scale = scale;
    }

    pub fn with_scale(mut self, scale: impl Into<AxisScale>) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn scale(&self) -> &AxisScale { &self.scale }

    pub fn transform(&self) -> &dyn CoordinateTransform { self.scale.transform() }

    pub fn view_interval(&self) -> (f64, f64) { (self.min, self.max) }

    pub fn set_view_interval(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    pub fn major_ticks(&self) -> Vec<f64> {
        self.major_locator.compute(self.min, self.max)
    }

    /// Minor ticks, minus any that land on a major tick.
    pub fn minor_ticks(&self) -> Vec<f64> {
        let majors = self.major_ticks();
        let tol = (self.max - self.min).abs() * 1e-10;
        self.minor_locator
            .compute(self.min, self.max)
            .into_iter()
            .filter(|m| !majors.iter().any(|t| (t - m).abs() <= tol))
            .collect()
    }

    pub fn major_labels(&self) -> Vec<(f64, String)> {
        self.major_ticks().into_iter().map(|t| (t, self.major_formatter.format(t))).collect()
    }

    /// Map a source value to `[0, 1]` across the view, measured in warped space.
    #[inline]
    pub fn to_unit(&self, v: f64) -> f64 {
        let t = self.transform();
        let (lo, hi) = (t.forward(self.min), t.forward(self.max));
        let span = hi - lo;
        if span.abs() < 1e-12 { return 0.5; }
        (t.forward(v) - lo) / span
    }

    #[inline]
    pub fn from_unit(&self, u: f64) -> f64 {
        let t = self.transform();
        let (lo, hi) = (t.forward(self.min), t.forward(self.max));
        t.inverse(lo + u * (hi - lo))
    }
}
