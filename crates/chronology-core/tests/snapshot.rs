// File: crates/chronology-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic warped chart (bands, line, markers; no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chronology_core::{draw_areas, Axis, Chart, RenderOptions, Series, Theme, WarpScale};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Released", 1800.0, 2023.0)
        .with_scale(WarpScale::new(2026.0, &[50.0, 20.0]).expect("valid"));
    chart.y_axis = Axis::new("Setting - Released", -1000.0, 1000.0)
        .with_scale(WarpScale::new(0.0, &[100.0, 20.0]).expect("valid"));
    chart.add_series(Series::line(vec![(1985.0, -30.0), (1989.0, 26.0), (1990.0, -105.0)]).with_alpha(0.5));
    chart.add_series(Series::markers(vec![(1819.0, -625.0), (1949.0, 35.0)]).with_marker_radii(vec![3.0, 6.0]));
    draw_areas(
        &mut chart,
        &[2026.0, 2000.0, 1900.0, 1800.0, 0.0],
        &[2026.0, 2100.0, 3000.0],
        &Theme::light(),
    );

    let opts = RenderOptions { draw_labels: false, width: 400, height: 400, ..RenderOptions::default() };
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_warped_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("warped_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes(), render_bytes());
}
