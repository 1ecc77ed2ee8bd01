// File: crates/chronology-core/src/scale.rs
// Summary: Scale adapters binding a coordinate transform and its default tick policy to an axis.

use crate::error::Result;
use crate::formatter::Formatter;
use crate::locator::{AsinhLocator, Locator};
use crate::transform::{AsinhTransform, CompositeTransform, CoordinateTransform, LinearTransform};

/// Locators and formatters a scale installs on the axis it is bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisDefaults {
    pub major_locator: Locator,
    pub minor_locator: Locator,
    pub major_formatter: Formatter,
    pub minor_formatter: Formatter,
}

/// A coordinate system for one axis. Scales hold no axis state, so the same
/// value can be installed on any number of axes.
pub trait Scale {
    fn name(&self) -> &'static str;
    fn transform(&self) -> &dyn CoordinateTransform;
    fn default_locators_and_formatters(&self) -> AxisDefaults;
}

/// Minor-tick multiples used when `subs` is left on automatic.
pub fn auto_tick_multipliers(base: u32) -> Option<&'static [f64]> {
    match base {
        3 | 4 | 5 => Some(&[2.0][..]),
        8 => Some(&[2.0, 4.0][..]),
        10 => Some(&[2.0, 5.0][..]),
        16 => Some(&[2.0, 4.0, 8.0][..]),
        64 => Some(&[4.0, 16.0][..]),
        1024 => Some(&[256.0, 512.0][..]),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Subs {
    #[default]
    Auto,
    Explicit(Vec<f64>),
}

/// Quasi-logarithmic scale: linear near `center`, asymptotically logarithmic
/// away from it, with no kink in between (unlike symlog).
#[derive(Clone, Debug, PartialEq)]
pub struct AsinhScale {
    transform: AsinhTransform,
    base: u32,
    subs: Subs,
}

impl AsinhScale {
    pub fn new(linear_width: f64, center: f64) -> Result<Self> {
        Ok(Self { transform: AsinhTransform::new(linear_width, center)?, base: 10, subs: Subs::Auto })
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    pub fn with_subs(mut self, subs: Subs) -> Self {
        self.subs = subs;
        self
    }

    pub fn get_transform(&self) -> AsinhTransform { self.transform }
    pub fn linear_width(&self) -> f64 { self.transform.linear_width() }
    pub fn center(&self) -> f64 { self.transform.center() }
    pub fn base(&self) -> u32 { self.base }

    /// Resolved minor multiples; `None` means no minor subdivision.
    pub fn subs(&self) -> Option<Vec<f64>> {
        match &self.subs {
            Subs::Auto => auto_tick_multipliers(self.base).map(<[f64]>::to_vec),
            Subs::Explicit(v) if v.is_empty() => None,
            Subs::Explicit(v) => Some(v.clone()),
        }
    }
}

impl Scale for AsinhScale {
    fn name(&self) -> &'static str { "asinh" }

    fn transform(&self) -> &dyn CoordinateTransform { &self.transform }

    fn default_locators_and_formatters(&self) -> AxisDefaults {
        let major = AsinhLocator::from_transform(self.transform).with_base(self.base);
        let minor = major.clone().with_subs(self.subs().unwrap_or_default());
        // order-of-magnitude labels only read right when zero is the center
        let major_formatter = if self.center() == 0.0 && self.base > 1 {
            Formatter::LogSciNotation { base: self.base }
        } else {
            Formatter::General { precision: 3 }
        };
        AxisDefaults {
            major_locator: Locator::Asinh(major),
            minor_locator: Locator::Asinh(minor),
            major_formatter,
            minor_formatter: Formatter::Null,
        }
    }
}

fn linear_defaults() -> AxisDefaults {
    AxisDefaults {
        major_locator: Locator::Linear { numticks: 11 },
        minor_locator: Locator::Null,
        major_formatter: Formatter::General { precision: 3 },
        minor_formatter: Formatter::Null,
    }
}

/// Nested asinh warps; steeper than log far from the center.
#[derive(Clone, Debug, PartialEq)]
pub struct WarpScale {
    transform: CompositeTransform,
}

impl WarpScale {
    pub fn new(center: f64, linear_widths: &[f64]) -> Result<Self> {
        Ok(Self { transform: CompositeTransform::warp(center, linear_widths)? })
    }

    pub fn get_transform(&self) -> &CompositeTransform { &self.transform }
}

impl Scale for WarpScale {
    fn name(&self) -> &'static str { "warp" }
    fn transform(&self) -> &dyn CoordinateTransform { &self.transform }
    fn default_locators_and_formatters(&self) -> AxisDefaults { linear_defaults() }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearScale;

impl Scale for LinearScale {
    fn name(&self) -> &'static str { "linear" }
    fn transform(&self) -> &dyn CoordinateTransform { &LinearTransform }
    fn default_locators_and_formatters(&self) -> AxisDefaults { linear_defaults() }
}

/// The scales an axis can be set to.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    Asinh(AsinhScale),
    Warp(WarpScale),
}

impl Default for AxisScale {
    fn default() -> Self { AxisScale::Linear(LinearScale) }
}

impl AxisScale {
    fn inner(&self) -> &dyn Scale {
        match self {
            AxisScale::Linear(s) => s,
            AxisScale::Asinh(s) => s,
            AxisScale::Warp(s) => s,
        }
    }
}

impl Scale for AxisScale {
    fn name(&self) -> &'static str { self.inner().name() }
    fn transform(&self) -> &dyn CoordinateTransform { self.inner().transform() }
    fn default_locators_and_formatters(&self) -> AxisDefaults { self.inner().default_locators_and_formatters() }
}

impl From<AsinhScale> for AxisScale {
    fn from(s: AsinhScale) -> Self { AxisScale::Asinh(s) }
}

impl From<WarpScale> for AxisScale {
    fn from(s: WarpScale) -> Self { AxisScale::Warp(s) }
}

impl From<LinearScale> for AxisScale {
    fn from(s: LinearScale) -> Self { AxisScale::Linear(s) }
}
