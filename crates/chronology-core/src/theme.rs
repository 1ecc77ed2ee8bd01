// File: crates/chronology-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, and the cycling publication palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Era bands before "now"; two shades alternate.
    pub past_band: [skia::Color; 2],
    /// Era bands after "now"; two shades alternate.
    pub future_band: [skia::Color; 2],
    /// The "set in the present" reference line.
    pub origin_line: skia::Color,
    /// Halo drawn under annotation text.
    pub text_halo: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 225, 225, 230),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            past_band: [skia::Color::from_argb(24, 120, 90, 40), skia::Color::from_argb(48, 120, 90, 40)],
            future_band: [skia::Color::from_argb(24, 40, 90, 160), skia::Color::from_argb(48, 40, 90, 160)],
            origin_line: skia::Color::from_argb(160, 90, 90, 90),
            text_halo: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            past_band: [skia::Color::from_argb(28, 230, 190, 120), skia::Color::from_argb(56, 230, 190, 120)],
            future_band: [skia::Color::from_argb(28, 96, 156, 255), skia::Color::from_argb(56, 96, 156, 255)],
            origin_line: skia::Color::from_argb(200, 200, 200, 210),
            text_halo: skia::Color::from_argb(255, 18, 18, 20),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Category-10 colors, in cycle order.
pub const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

/// Endless color cycle handed to the draw loop; one color per publication.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<skia::Color>,
    next: usize,
}

impl Palette {
    /// Falls back to [`TAB10`] when `colors` is empty.
    pub fn new(colors: Vec<skia::Color>) -> Self {
        let colors = if colors.is_empty() { TAB10.to_vec() } else { colors };
        Self { colors, next: 0 }
    }

    pub fn tab10() -> Self {
        Self::new(TAB10.to_vec())
    }
}

impl Default for Palette {
    fn default() -> Self { Self::tab10() }
}

impl Iterator for Palette {
    type Item = skia::Color;

    fn next(&mut self) -> Option<skia::Color> {
        let c = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        Some(c)
    }
}
