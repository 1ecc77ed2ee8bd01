// File: crates/chronology-core/src/grid.rs
// Summary: Sample-grid helpers shared by tick locators and band shading.

use crate::transform::CoordinateTransform;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    // pin the last sample so `end` is hit exactly
    (0..steps)
        .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
        .collect()
}

/// `steps` samples uniformly spaced in warped space between `start` and `end`,
/// returned in source units (so they bunch up where the warp is strong).
pub fn warped_linspace(t: &dyn CoordinateTransform, start: f64, end: f64, steps: usize) -> Vec<f64> {
    let ys = linspace(t.forward(start), t.forward(end), steps);
    let mut xs = t.inverse_all(&ys);
    // keep the endpoints bit-exact; the round trip is only accurate to a few ulps
    if let Some(first) = xs.first_mut() { *first = start; }
    if let Some(last) = xs.last_mut() { *last = end; }
    xs
}

/// Sort ascending and drop exact duplicates (and NaNs).
pub fn sorted_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.retain(|v| !v.is_nan());
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| a == b);
    values
}
