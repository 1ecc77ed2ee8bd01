// File: crates/chronology-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with bold weight and a background halo.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::series::TextWeight;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, weight: TextWeight) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // hand-lettered faces first, CJK next, then whatever the system has
        ts.set_font_families(&[
            "xkcd", "Humor Sans", "Comic Neue", "Source Han Sans CN", "Noto Sans CJK SC",
            "DejaVu Sans", "Arial", "sans-serif",
        ]);
        if weight == TextWeight::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, weight: TextWeight) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, weight);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, weight: TextWeight) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), weight);
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, weight: TextWeight) {
        let mut p = self.layout(text, size, color, weight);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Like [`draw_left`](Self::draw_left) but first stamps the text in `halo`
    /// around the glyphs, so labels stay legible over lines and bands.
    pub fn draw_with_halo(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        halo: skia::Color,
        weight: TextWeight,
    ) {
        let mut back = self.layout(text, size, halo, weight);
        let top = y - size * 0.8;
        for (dx, dy) in [(-1.5, 0.0), (1.5, 0.0), (0.0, -1.5), (0.0, 1.5)] {
            back.paint(canvas, (x + dx, top + dy));
        }
        let mut front = self.layout(text, size, color, weight);
        front.paint(canvas, (x, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
