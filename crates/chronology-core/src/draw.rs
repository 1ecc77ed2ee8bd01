// File: crates/chronology-core/src/draw.rs
// Summary: Plots publications onto a chart (markers, series lines, labels) and applies label nudges.

use skia_safe as skia;
use tracing::warn;

use crate::chart::{AnnotationId, Chart};
use crate::data::{Event, Publication};
use crate::error::{ChartError, Result};
use crate::series::{Annotation, Series};

/// Chart position of an event: x = when it was written, y = how far ahead
/// (or behind) of that it is set.
pub fn event_to_xy(event: &Event) -> (f64, f64) {
    let written = event.written_in_average();
    (written, event.set_in_average() - written)
}

/// Marker radius in px; ranged events grow with the years they cover.
pub fn marker_radius(event: &Event) -> f32 {
    if !(event.written_in.is_range() || event.set_in.is_range()) {
        return Series::DEFAULT_MARKER_RADIUS;
    }
    let span = event.written_in.span() + event.set_in.span();
    Series::DEFAULT_MARKER_RADIUS + (1.0 + span).log2() as f32
}

/// Plot one publication in `color` and return the labels it added.
pub fn draw(publication: &Publication, chart: &mut Chart, color: skia::Color) -> Vec<AnnotationId> {
    match publication.series.as_slice() {
        [event] => {
            if let Some(event_name) = &event.name {
                warn!(
                    publication = %publication.name,
                    event = %event_name,
                    "single-event publication also names its event; consider dropping the event name"
                );
            }
            draw_event(event, chart, color, Some(&publication.name), |a| a.bold())
        }
        _ => draw_series(publication, chart, color),
    }
}

fn draw_event(
    event: &Event,
    chart: &mut Chart,
    color: skia::Color,
    name_fallback: Option<&str>,
    style: impl FnOnce(Annotation) -> Annotation,
) -> Vec<AnnotationId> {
    let xy = event_to_xy(event);
    chart.add_series(
        Series::markers(vec![xy])
            .with_color(color)
            .with_alpha(0.8)
            .with_marker_radii(vec![marker_radius(event)]),
    );
    match event.name.as_deref().or(name_fallback) {
        Some(name) => vec![chart.annotate(style(Annotation::new(name, xy, color)))],
        None => Vec::new(),
    }
}

fn draw_series(publication: &Publication, chart: &mut Chart, color: skia::Color) -> Vec<AnnotationId> {
    let points: Vec<(f64, f64)> = publication.series.iter().map(event_to_xy).collect();
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    chart.add_series(Series::line(points).with_color(color).with_alpha(0.5));
    let mut ids = vec![chart.annotate(Annotation::new(publication.name.as_str(), first, color).bold())];
    for event in &publication.series {
        ids.extend(draw_event(event, chart, color, None, |a| a.small()));
    }
    ids
}

/// Shift the single annotation labelled `text` by `offset_px` (screen pixels, y up).
pub fn nudge(chart: &mut Chart, text: &str, offset_px: (f32, f32)) -> Result<()> {
    let matches = chart.annotations.iter().filter(|a| a.text == text).count();
    if matches != 1 {
        return Err(ChartError::AnnotationNotFound { text: text.to_string(), matches });
    }
    if let Some(a) = chart.annotations.iter_mut().find(|a| a.text == text) {
        a.offset_px.0 += offset_px.0;
        a.offset_px.1 += offset_px.1;
    }
    Ok(())
}

/// Apply a list of hand-tuned nudges; stops at the first label that is missing or ambiguous.
pub fn nudge_all(chart: &mut Chart, nudges: &[(String, (f32, f32))]) -> Result<()> {
    for (text, offset) in nudges {
        nudge(chart, text, *offset)?;
    }
    Ok(())
}
