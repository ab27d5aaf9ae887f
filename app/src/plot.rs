//! Scatter plot of the split: training points as triangles coloured by label,
//! test points as crosses coloured by prediction.

use std::path::Path;

use holdout::HoldoutReport;

#[cfg(feature = "plot")]
pub fn render(path: &Path, report: &HoldoutReport<i64, f64>) -> anyhow::Result<()> {
    use anyhow::anyhow;
    use plotters::prelude::*;

    let (x_range, y_range) = bounds(report);

    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("k-NN hold-out, accuracy {:.3}", report.accuracy()),
            ("sans-serif", 24),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| anyhow!("{e}"))?;
    chart
        .configure_mesh()
        .x_desc("x1")
        .y_desc("x2")
        .draw()
        .map_err(|e| anyhow!("{e}"))?;

    chart
        .draw_series(report.train.iter().map(|r| {
            TriangleMarker::new((r.x1(), r.x2()), 6, label_color(*r.label()).filled())
        }))
        .map_err(|e| anyhow!("{e}"))?;
    chart
        .draw_series(report.test.iter().map(|r| {
            let label = r.prediction().copied().unwrap_or(*r.label());
            Cross::new((r.x1(), r.x2()), 5, label_color(label).stroke_width(2))
        }))
        .map_err(|e| anyhow!("{e}"))?;

    root.present().map_err(|e| anyhow!("{e}"))?;
    tracing::debug!(path = %path.display(), "rendered plot");
    Ok(())
}

#[cfg(not(feature = "plot"))]
pub fn render(_path: &Path, _report: &HoldoutReport<i64, f64>) -> anyhow::Result<()> {
    anyhow::bail!("plotting is not available, rebuild with `--features plot`")
}

#[cfg(feature = "plot")]
fn label_color(label: i64) -> plotters::style::RGBAColor {
    use plotters::style::{Color, Palette, Palette99, BLUE, GREEN, RED};

    match label {
        1 => RED.to_rgba(),
        2 => GREEN.to_rgba(),
        3 => BLUE.to_rgba(),
        other => Palette99::pick(other.unsigned_abs() as usize).to_rgba(),
    }
}

/// Padded data ranges over every record, never empty.
#[cfg_attr(not(feature = "plot"), allow(dead_code))]
fn bounds(report: &HoldoutReport<i64, f64>) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let points = report.train.iter().chain(&report.test);
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for r in points {
        x_min = x_min.min(r.x1());
        x_max = x_max.max(r.x1());
        y_min = y_min.min(r.x2());
        y_max = y_max.max(r.x2());
    }
    (pad(x_min, x_max), pad(y_min, y_max))
}

#[cfg_attr(not(feature = "plot"), allow(dead_code))]
fn pad(min: f64, max: f64) -> std::ops::Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let margin = ((max - min) * 0.05).max(0.5);
    (min - margin)..(max + margin)
}
