// File: crates/chronology-core/src/series.rs
// Summary: Drawable primitives: line/marker series, filled bands between two curves, text annotations.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Markers,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub color: skia::Color,
    /// 0.0..=1.0
    pub alpha: f32,
    pub stroke_width: f32,
    /// Per-point marker radii in px (Markers only); missing entries use `DEFAULT_MARKER_RADIUS`.
    pub marker_radii: Vec<f32>,
}

impl Series {
    pub const DEFAULT_MARKER_RADIUS: f32 = 3.0;

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            color: skia::Color::BLACK,
            alpha: 1.0,
            stroke_width: 2.0,
            marker_radii: Vec::new(),
        }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Line, data)
    }

    pub fn markers(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Markers, data)
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_marker_radii(mut self, radii: Vec<f32>) -> Self {
        self.marker_radii = radii;
        self
    }

    pub fn marker_radius(&self, i: usize) -> f32 {
        self.marker_radii.get(i).copied().unwrap_or(Self::DEFAULT_MARKER_RADIUS)
    }

    /// Color with `alpha` multiplied into its alpha channel.
    pub fn paint_color(&self) -> skia::Color {
        self.color.with_a((self.color.a() as f32 * self.alpha).round() as u8)
    }
}

/// Area between `y1(x)` and `y2(x)` sampled at `xs`.
/// Contract: `xs`, `y1` and `y2` have equal length.
#[derive(Clone, Debug)]
pub struct Band {
    pub xs: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
    pub color: skia::Color,
}

impl Band {
    pub fn new(xs: Vec<f64>, y1: Vec<f64>, y2: Vec<f64>, color: skia::Color) -> Self {
        debug_assert!(xs.len() == y1.len() && xs.len() == y2.len());
        Self { xs, y1, y2, color }
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().zip(&self.y1).chain(self.xs.iter().zip(&self.y2)).map(|(&x, &y)| (x, y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Normal,
    Small,
}

impl TextSize {
    pub fn points(self, base: f32) -> f32 {
        match self {
            TextSize::Normal => base,
            TextSize::Small => base * 0.6,
        }
    }
}

/// Text label anchored at a data point, optionally shifted in screen pixels.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: skia::Color,
    pub weight: TextWeight,
    pub size: TextSize,
    pub offset_px: (f32, f32),
}

impl Annotation {
    pub fn new(text: impl Into<String>, (x, y): (f64, f64), color: skia::Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            weight: TextWeight::Normal,
            size: TextSize::Normal,
            offset_px: (0.0, 0.0),
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = TextWeight::Bold;
        self
    }

    pub fn small(mut self) -> Self {
        self.size = TextSize::Small;
        self
    }
}
