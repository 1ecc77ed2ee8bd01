// File: crates/chronology-core/src/figure.rs
// Summary: Assembles the full chronology figure: warped axes, publications, era bands, nudges.

use tracing::info;

use crate::config::ChartConfig;
use crate::data::Publication;
use crate::draw::draw;
use crate::error::Result;
use crate::formatter::Formatter;
use crate::locator::{AsinhLocator, Locator};
use crate::region::draw_areas;
use crate::scale::WarpScale;
use crate::theme::{self, Palette};
use crate::{Axis, Chart};

/// Fraction of each axis span (in warped space) left around the data.
pub const DATA_MARGIN: f64 = 0.05;

/// X: release year, warped around now. Y: setting minus release, warped around zero.
pub fn build_axes(cfg: &ChartConfig) -> Result<(Axis, Axis)> {
    let now = cfg.now();

    let mut x = Axis::new(cfg.x.label.as_str(), now - 200.0, now + 10.0)
        .with_scale(WarpScale::new(now, &cfg.x.linear_widths)?);
    x.major_locator = Locator::fixed(cfg.x_major_ticks());
    x.minor_locator = Locator::multiple(cfg.x.minor_step)?;

    let mut y = Axis::new(cfg.y.label.as_str(), -100.0, 100.0)
        .with_scale(WarpScale::new(0.0, &cfg.y.linear_widths)?);
    let major = AsinhLocator::new(cfg.y.locator_linear_width, 0.0)?
        .with_numticks(cfg.y.numticks)
        .with_symthresh(cfg.y.symthresh)
        .with_base(cfg.y.base);
    let minor = major.clone().with_subs(cfg.y.minor_subs.clone());
    y.major_locator = Locator::Asinh(major);
    y.minor_locator = Locator::Asinh(minor);
    y.major_formatter = Formatter::Engineering { places: cfg.y.label_places };
    y.minor_formatter = Formatter::Null;

    Ok((x, y))
}

/// Build the chart for `publications`; one palette color per publication.
pub fn build_chart(cfg: &ChartConfig, publications: &[Publication], palette: &mut Palette) -> Result<Chart> {
    let (x_axis, y_axis) = build_axes(cfg)?;
    let mut chart = Chart::new();
    chart.x_axis = x_axis;
    chart.y_axis = y_axis;

    for (publication, color) in publications.iter().zip(palette) {
        draw(publication, &mut chart, color);
    }
    if !chart.series.is_empty() {
        chart.autoscale_axes(DATA_MARGIN);
    }

    let bands = draw_areas(&mut chart, &cfg.past_eras(), &cfg.future_eras(), &theme::find(&cfg.theme));
    for n in &cfg.nudges {
        crate::draw::nudge(&mut chart, &n.text, (n.offset[0], n.offset[1]))?;
    }

    info!(
        publications = publications.len(),
        annotations = chart.annotations.len(),
        bands,
        "chart assembled"
    );
    Ok(chart)
}
