// File: crates/chronology-core/src/chart.rs
// Summary: Chart model (series, era bands, annotations on two axes) and headless PNG rendering via Skia.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::series::{Annotation, Band, Series, SeriesType, TextWeight};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, axis labels and annotations. Off gives font-independent output.
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            font_size: 14.0,
        }
    }
}

/// Handle to an annotation added with [`Chart::annotate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotationId(pub usize);

pub struct Chart {
    pub series: Vec<Series>,
    pub bands: Vec<Band>,
    pub annotations: Vec<Annotation>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// When set, adding series or bands grows the view limits to cover them.
    pub autoscale: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            bands: Vec::new(),
            annotations: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            autoscale: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        if self.autoscale {
            self.grow_view(series.data_xy.iter().copied());
        }
        self.series.push(series);
    }

    /// Fill the area between `y1` and `y2` over `xs`.
    pub fn fill_between(&mut self, xs: Vec<f64>, y1: Vec<f64>, y2: Vec<f64>, color: skia::Color) {
        let band = Band::new(xs, y1, y2, color);
        if self.autoscale {
            self.grow_view(band.points().collect::<Vec<_>>());
        }
        self.bands.push(band);
    }

    pub fn annotate(&mut self, annotation: Annotation) -> AnnotationId {
        self.annotations.push(annotation);
        AnnotationId(self.annotations.len() - 1)
    }

    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.get(id.0)
    }

    /// Fit both view intervals to the series data, padded by `margin` in warped space.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    fn grow_view(&mut self, points: impl IntoIterator<Item = (f64, f64)>) {
        let mut view = ViewState::capture(self);
        for (x, y) in points {
            view.include(x, y);
        }
        view.apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_into(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw_into(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = PlotRect::inside(opts.width, opts.height, &opts.insets);
        let map = PixelMap { rect, x_axis: &self.x_axis, y_axis: &self.y_axis };
        let x_major = self.x_axis.major_ticks();
        let y_major = self.y_axis.major_ticks();

        draw_grid(canvas, &map, &x_major, &y_major, theme);

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for band in &self.bands {
            draw_band(canvas, &map, band);
        }
        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &map, s),
                SeriesType::Markers => draw_marker_series(canvas, &map, s),
            }
        }
        canvas.restore();

        draw_frame_and_ticks(canvas, &map, &x_major, &y_major, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &map, &x_major, &y_major, opts);
            draw_axis_labels(canvas, &shaper, &map, opts);
            for a in &self.annotations {
                draw_annotation(canvas, &shaper, &map, a, opts);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

struct PixelMap<'a> {
    rect: PlotRect,
    x_axis: &'a Axis,
    y_axis: &'a Axis,
}

// Far off-screen coordinates are clamped so Skia never sees huge floats.
const PX_LIMIT: f64 = 1.0e6;

impl PixelMap<'_> {
    fn sx(&self, x: f64) -> f32 {
        let u = self.x_axis.to_unit(x).clamp(-PX_LIMIT, PX_LIMIT);
        self.rect.left + u as f32 * self.rect.width()
    }

    fn sy(&self, y: f64) -> f32 {
        let u = self.y_axis.to_unit(y).clamp(-PX_LIMIT, PX_LIMIT);
        self.rect.bottom - u as f32 * self.rect.height()
    }

    fn point(&self, (x, y): (f64, f64)) -> Option<skia::Point> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        Some(skia::Point::new(self.sx(x), self.sy(y)))
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(canvas: &skia::Canvas, map: &PixelMap, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let r = map.rect;
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, r.top), (px, r.bottom), &paint);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((r.left, py), (r.right, py), &paint);
    }
}

fn draw_band(canvas: &skia::Canvas, map: &PixelMap, band: &Band) {
    let upper: Vec<_> = band.xs.iter().zip(&band.y1).filter_map(|(&x, &y)| map.point((x, y))).collect();
    let lower: Vec<_> = band.xs.iter().zip(&band.y2).filter_map(|(&x, &y)| map.point((x, y))).collect();
    if upper.len() < 2 || lower.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to(upper[0]);
    for &p in upper.iter().skip(1) {
        path.line_to(p);
    }
    for &p in lower.iter().rev() {
        path.line_to(p);
    }
    path.close();
    canvas.draw_path(&path, &fill_paint(band.color));
}

fn draw_line_series(canvas: &skia::Canvas, map: &PixelMap, series: &Series) {
    let pts: Vec<_> = series.data_xy.iter().filter_map(|&p| map.point(p)).collect();
    if pts.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to(pts[0]);
    for &p in pts.iter().skip(1) {
        path.line_to(p);
    }
    canvas.draw_path(&path, &stroke_paint(series.paint_color(), series.stroke_width));
}

fn draw_marker_series(canvas: &skia::Canvas, map: &PixelMap, series: &Series) {
    let paint = fill_paint(series.paint_color());
    for (i, &p) in series.data_xy.iter().enumerate() {
        if let Some(center) = map.point(p) {
            canvas.draw_circle(center, series.marker_radius(i), &paint);
        }
    }
}

const MAJOR_TICK_LEN: f32 = 8.0;
const MINOR_TICK_LEN: f32 = 4.0;

fn draw_frame_and_ticks(canvas: &skia::Canvas, map: &PixelMap, x_major: &[f64], y_major: &[f64], theme: &Theme) {
    let r = map.rect;
    canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &stroke_paint(theme.axis_line, 1.5));

    let major = stroke_paint(theme.tick, 3.0);
    let minor = stroke_paint(theme.tick, 1.0);
    let x_minor = map.x_axis.minor_ticks();
    let y_minor = map.y_axis.minor_ticks();

    // ticks on both sides of each axis, pointing inwards
    let in_x = |x: f64| (r.left..=r.right).contains(&map.sx(x));
    let in_y = |y: f64| (r.top..=r.bottom).contains(&map.sy(y));
    for (ticks, len, paint) in [(x_major, MAJOR_TICK_LEN, &major), (x_minor.as_slice(), MINOR_TICK_LEN, &minor)] {
        for &x in ticks.iter().filter(|&&x| in_x(x)) {
            let px = map.sx(x);
            canvas.draw_line((px, r.bottom), (px, r.bottom - len), paint);
            canvas.draw_line((px, r.top), (px, r.top + len), paint);
        }
    }
    for (ticks, len, paint) in [(y_major, MAJOR_TICK_LEN, &major), (y_minor.as_slice(), MINOR_TICK_LEN, &minor)] {
        for &y in ticks.iter().filter(|&&y| in_y(y)) {
            let py = map.sy(y);
            canvas.draw_line((r.left, py), (r.left + len, py), paint);
            canvas.draw_line((r.right, py), (r.right - len, py), paint);
        }
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    map: &PixelMap,
    x_major: &[f64],
    y_major: &[f64],
    opts: &RenderOptions,
) {
    let r = map.rect;
    let size = opts.font_size * 0.85;
    let color = opts.theme.axis_label;
    for &x in x_major {
        let px = map.sx(x);
        if !(r.left..=r.right).contains(&px) { continue; }
        let label = map.x_axis.major_formatter.format(x);
        if label.is_empty() { continue; }
        let half = shaper.measure_width(&label, size, TextWeight::Normal) * 0.5;
        shaper.draw_left(canvas, &label, px - half, r.bottom + size + 6.0, size, color, TextWeight::Normal);
        shaper.draw_left(canvas, &label, px - half, r.top - 8.0, size, color, TextWeight::Normal);
    }
    for &y in y_major {
        let py = map.sy(y);
        if !(r.top..=r.bottom).contains(&py) { continue; }
        let label = map.y_axis.major_formatter.format(y);
        if label.is_empty() { continue; }
        let w = shaper.measure_width(&label, size, TextWeight::Normal);
        shaper.draw_left(canvas, &label, r.left - w - 6.0, py + size * 0.4, size, color, TextWeight::Normal);
        shaper.draw_left(canvas, &label, r.right + 6.0, py + size * 0.4, size, color, TextWeight::Normal);
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, shaper: &TextShaper, map: &PixelMap, opts: &RenderOptions) {
    let r = map.rect;
    let size = opts.font_size;
    let color = opts.theme.axis_label;

    let x_label = &map.x_axis.label;
    let w = shaper.measure_width(x_label, size, TextWeight::Normal);
    let cx = (r.left + r.right) * 0.5;
    shaper.draw_left(canvas, x_label, cx - w * 0.5, opts.height as f32 - 12.0, size, color, TextWeight::Normal);

    let y_label = &map.y_axis.label;
    let w = shaper.measure_width(y_label, size, TextWeight::Normal);
    let cy = (r.top + r.bottom) * 0.5;
    let anchor = skia::Point::new(24.0, cy);
    canvas.save();
    canvas.rotate(-90.0, Some(anchor));
    shaper.draw_left(canvas, y_label, anchor.x - w * 0.5, anchor.y, size, color, TextWeight::Normal);
    canvas.restore();
}

fn draw_annotation(canvas: &skia::Canvas, shaper: &TextShaper, map: &PixelMap, a: &Annotation, opts: &RenderOptions) {
    let Some(p) = map.point((a.x, a.y)) else { return };
    let size = a.size.points(opts.font_size);
    let (dx, dy) = a.offset_px;
    // screen offsets are y-up like data space
    let at = (p.x + 4.0 + dx, p.y - 4.0 - dy);
    shaper.draw_with_halo(canvas, &a.text, at, size, a.color, opts.theme.text_halo, a.weight);
}
