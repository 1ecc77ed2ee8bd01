// File: crates/chronology-core/src/region.rs
// Summary: Era shading: bands of "set between year a and year b" drawn over a warp-uniform x grid.

use tracing::debug;

use crate::grid::warped_linspace;
use crate::series::Series;
use crate::theme::Theme;
use crate::view::ViewState;
use crate::Chart;

/// Samples across the x view; uniform in warped space so band edges stay smooth.
pub const SAMPLES: usize = 100;

/// Shade eras on a chart whose y axis is "setting minus release".
///
/// `past` descends from now and `future` ascends from now; both usually start
/// with the same "now". Every adjacent pair `(a, b)` becomes the band between
/// the lines `y = a - x` and `y = b - x`, i.e. works set between years `a` and
/// `b`. One extra line `y = now - x` marks works set in their own present.
///
/// View limits of both axes are the same after the call as before it.
/// Returns the number of bands drawn.
pub fn draw_areas(chart: &mut Chart, past: &[f64], future: &[f64], theme: &Theme) -> usize {
    let saved = ViewState::capture(chart);

    let (x0, x1) = chart.x_axis.view_interval();
    let xs = warped_linspace(chart.x_axis.transform(), x0, x1, SAMPLES);
    let offset = |year: f64| xs.iter().map(|x| year - x).collect::<Vec<_>>();

    if !is_monotonic(past, |a, b| a >= b) || !is_monotonic(future, |a, b| a <= b) {
        debug!(?past, ?future, "era boundaries are not ordered away from now");
    }

    let mut bands = Vec::new();
    for (shades, bounds) in [(&theme.past_band, past), (&theme.future_band, future)] {
        for (i, pair) in bounds.windows(2).enumerate() {
            bands.push((offset(pair[0]), offset(pair[1]), shades[i % 2]));
        }
    }
    let drawn = bands.len();
    for (y1, y2, color) in bands {
        chart.fill_between(xs.clone(), y1, y2, color);
    }

    if let Some(&now) = past.first().or(future.first()) {
        let line = xs.iter().map(|&x| (x, now - x)).collect();
        chart.add_series(Series::line(line).with_color(theme.origin_line));
    }

    saved.apply_to_chart(chart);
    drawn
}

fn is_monotonic(values: &[f64], ordered: impl Fn(f64, f64) -> bool) -> bool {
    values.windows(2).all(|w| ordered(w[0], w[1]))
}
