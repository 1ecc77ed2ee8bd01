// File: crates/chronology-core/src/locator.rs
// Summary: Tick locators; the asinh locator places "nice" base-n ticks evenly in warped space.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::grid::{linspace, sorted_unique};
use crate::transform::{asinh_stage, sinh_stage, AsinhTransform};

/// Upper bound on ticks produced by the fixed-step locator.
pub const MAX_TICKS: usize = 1000;

/// Computes tick positions (source units) for a visible interval.
pub trait TickLocator {
    fn compute(&self, vmin: f64, vmax: f64) -> Vec<f64>;
}

/// Locator specialised for asinh-warped axes.
///
/// Candidates are spaced uniformly in warped space, mapped back, and rounded
/// to signed powers of `base` (optionally times each of `subs` for minor
/// ticks). Zero offset by `center` is always a tick when the view straddles it.
#[derive(Clone, Debug, PartialEq)]
pub struct AsinhLocator {
    transform: AsinhTransform,
    numticks: usize,
    symthresh: f64,
    base: u32,
    subs: Option<Vec<f64>>,
}

impl AsinhLocator {
    pub const DEFAULT_NUMTICKS: usize = 11;
    pub const DEFAULT_SYMTHRESH: f64 = 0.2;
    pub const DEFAULT_BASE: u32 = 10;

    /// Fails with `InvalidParameter` when `linear_width <= 0`.
    pub fn new(linear_width: f64, center: f64) -> Result<Self> {
        Ok(Self::from_transform(AsinhTransform::new(linear_width, center)?))
    }

    pub fn from_transform(transform: AsinhTransform) -> Self {
        Self {
            transform,
            numticks: Self::DEFAULT_NUMTICKS,
            symthresh: Self::DEFAULT_SYMTHRESH,
            base: Self::DEFAULT_BASE,
            subs: None,
        }
    }

    /// Approximate number of major ticks across the axis. Values below 2 act as 2.
    pub fn with_numticks(mut self, numticks: usize) -> Self {
        self.numticks = numticks;
        self
    }

    pub fn with_symthresh(mut self, symthresh: f64) -> Self {
        self.symthresh = symthresh;
        self
    }

    /// `base <= 1` rounds to integer multiples of powers of ten instead.
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Multiples of each base power, e.g. `[2, 5]`; an empty list clears them.
    pub fn with_subs(mut self, subs: impl Into<Vec<f64>>) -> Self {
        let subs = subs.into();
        self.subs = if subs.is_empty() { None } else { Some(subs) };
        self
    }

    pub fn linear_width(&self) -> f64 { self.transform.linear_width() }
    pub fn center(&self) -> f64 { self.transform.center() }
    pub fn numticks(&self) -> usize { self.numticks.max(2) }
    pub fn symthresh(&self) -> f64 { self.symthresh }
    pub fn base(&self) -> u32 { self.base }
    pub fn subs(&self) -> Option<&[f64]> { self.subs.as_deref() }

    /// Ticks for exactly `[vmin, vmax]`, without the symmetry snap.
    pub fn tick_values(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        let numticks = self.numticks();
        if !(vmin.is_finite() && vmax.is_finite()) {
            debug!(vmin, vmax, "non-finite view interval, no ticks");
            return Vec::new();
        }

        let w = self.linear_width();
        let center = self.center();
        let ymin = asinh_stage(vmin - center, w);
        let ymax = asinh_stage(vmax - center, w);

        let mut ys = linspace(ymin, ymax, numticks);
        if ymin * ymax < 0.0 {
            // the view straddles the center: swap the near-zero candidate for an exact zero
            let span = ymax - ymin;
            let min_dev = 0.5 / numticks as f64;
            ys.retain(|y| (y / span).abs() > min_dev);
            ys.push(0.0);
        }

        let mut qs = Vec::with_capacity(ys.len() * self.subs.as_ref().map_or(1, Vec::len));
        for &y in &ys {
            let x = sinh_stage(y, w);
            let zero = y == 0.0 || x == 0.0;
            if self.base > 1 {
                let power = if zero { 0.0 } else { signed_power(x, self.base as f64) };
                match &self.subs {
                    Some(subs) => qs.extend(subs.iter().map(|s| power * s)),
                    None => qs.push(power),
                }
            } else if zero {
                qs.push(0.0);
            } else {
                let power = signed_power(x, 10.0);
                qs.push(power * (x / power).round());
            }
        }

        let ticks = sorted_unique(qs.into_iter().map(|q| q + center).collect());
        if ticks.len() >= 2 {
            ticks
        } else {
            debug!(vmin, vmax, numticks, "degenerate view interval, falling back to linear ticks");
            // sub-ulp views round several linspace points onto the same float
            sorted_unique(linspace(vmin, vmax, numticks))
        }
    }
}

/// `sign(x) * base^floor(log_base |x|)`, nudged so exact powers are not floored one decade low.
fn signed_power(x: f64, base: f64) -> f64 {
    let exponent = (x.abs().ln() / base.ln() + 1e-10).floor();
    base.powf(exponent).copysign(x)
}

impl TickLocator for AsinhLocator {
    fn compute(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        let center = self.center();
        let (lo, hi) = (vmin - center, vmax - center);
        if lo * hi < 0.0 && (1.0 + hi / lo).abs() < self.symthresh {
            // almost symmetric about the center: make it exactly symmetric
            let bound = lo.abs().max(hi.abs());
            debug!(vmin, vmax, bound, "snapping view to symmetric ticks");
            return self.tick_values(center - bound, center + bound);
        }
        self.tick_values(vmin, vmax)
    }
}

/// The locators an [`Axis`](crate::Axis) can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum Locator {
    Asinh(AsinhLocator),
    /// Explicit tick values; only those inside the view are returned.
    Fixed(Vec<f64>),
    /// Every integer multiple of the step inside the view.
    Multiple(f64),
    /// `numticks` evenly spaced values across the view.
    Linear { numticks: usize },
    Null,
}

impl Locator {
    pub fn asinh(linear_width: f64, center: f64) -> Result<Self> {
        Ok(Self::Asinh(AsinhLocator::new(linear_width, center)?))
    }

    pub fn fixed(values: impl Into<Vec<f64>>) -> Self {
        Self::Fixed(sorted_unique(values.into()))
    }

    pub fn multiple(step: f64) -> Result<Self> {
        if step > 0.0 && step.is_finite() {
            Ok(Self::Multiple(step))
        } else {
            Err(ChartError::InvalidParameter {
                name: "step",
                value: step,
                reason: "tick step must be strictly positive and finite",
            })
        }
    }
}

impl TickLocator for Locator {
    fn compute(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        let (lo, hi) = if vmin <= vmax { (vmin, vmax) } else { (vmax, vmin) };
        match self {
            Locator::Asinh(loc) => loc.compute(vmin, vmax),
            Locator::Fixed(values) => values.iter().copied().filter(|v| (lo..=hi).contains(v)).collect(),
            Locator::Multiple(step) => {
                let first = (lo / step).ceil();
                let last = (hi / step).floor();
                if !(first.is_finite() && last.is_finite()) || last < first {
                    return Vec::new();
                }
                let span = last - first;
                if span >= MAX_TICKS as f64 {
                    debug!(span, step, "too many fixed-step ticks, dropping them");
                    return Vec::new();
                }
                let count = span as usize + 1;
                (0..count).map(|k| (first + k as f64) * step).collect()
            }
            Locator::Linear { numticks } => {
                if !(lo.is_finite() && hi.is_finite()) {
                    return Vec::new();
                }
                sorted_unique(linspace(lo, hi, (*numticks).max(2)))
            }
            Locator::Null => Vec::new(),
        }
    }
}
