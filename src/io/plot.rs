//! Figure rendering with the plotters bitmap backend
//!
//! Three figure families mirror the classic Fry workflow: the swept
//! probability curve with its characteristic-distance marker, the Fry
//! scatter with reference circles, and polar rose diagrams of folded
//! azimuth histograms with North up and clockwise angles.

// The plotters API is built around its prelude
#![allow(clippy::wildcard_imports)]

use std::path::Path;

use plotters::prelude::*;

use crate::analysis::characteristic::CharacteristicEstimate;
use crate::analysis::fry::FryPoint;
use crate::analysis::rose::AzimuthHistogram;
use crate::io::configuration::{
    CURVE_PLOT_SIZE, FRY_PLOT_SIZE, METERS_PER_KILOMETER, ROSE_PLOT_SIZE,
};
use crate::io::error::{AnalysisError, Result};

fn render_error(path: &Path, err: &impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Render {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Render the swept probability curve with the characteristic distance marked
///
/// X axis in kilometers, Y axis the probability in [0, 1]. The
/// characteristic distance gets a vertical guide line and a labelled point.
///
/// # Errors
///
/// Returns [`AnalysisError::Render`] when the backend fails.
pub fn plot_probability_curve(estimate: &CharacteristicEstimate, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CURVE_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, &e))?;

    let max_km = estimate
        .curve
        .iter()
        .map(|s| s.distance)
        .fold(0.0, f64::max)
        / METERS_PER_KILOMETER;
    let x_max = if max_km > 0.0 { max_km } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Nearest neighbour probability", ("sans-serif", 24))
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..x_max, 0.0..1.05)
        .map_err(|e| render_error(path, &e))?;

    chart
        .configure_mesh()
        .x_desc("Distance (km)")
        .y_desc("Probability")
        .draw()
        .map_err(|e| render_error(path, &e))?;

    chart
        .draw_series(LineSeries::new(
            estimate
                .curve
                .iter()
                .map(|s| (s.distance / METERS_PER_KILOMETER, s.probability)),
            &BLACK,
        ))
        .map_err(|e| render_error(path, &e))?;

    let marker_km = estimate.distance / METERS_PER_KILOMETER;
    chart
        .draw_series(LineSeries::new(
            [(marker_km, 0.0), (marker_km, estimate.probability)],
            &RED,
        ))
        .map_err(|e| render_error(path, &e))?;
    chart
        .draw_series(std::iter::once(Circle::new(
            (marker_km, estimate.probability),
            5,
            RED.filled(),
        )))
        .map_err(|e| render_error(path, &e))?;
    chart
        .draw_series(std::iter::once(Text::new(
            format!("D = {marker_km:.2} km"),
            (marker_km, estimate.probability - 0.08),
            ("sans-serif", 16).into_font().color(&RED),
        )))
        .map_err(|e| render_error(path, &e))?;

    root.present().map_err(|e| render_error(path, &e))?;
    Ok(())
}

/// Render the Fry scatter with optional reference circles
///
/// Axes are ΔX/ΔY in kilometers through the origin; the square canvas and
/// symmetric ranges keep the aspect equal. Each radius in `reference_radii`
/// (meters) is drawn as a circle around the origin.
///
/// # Errors
///
/// Returns [`AnalysisError::Render`] when the backend fails.
pub fn plot_fry_scatter(cloud: &[FryPoint], reference_radii: &[f64], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, FRY_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, &e))?;

    let extent_m = cloud
        .iter()
        .flat_map(|f| [f.dx.abs(), f.dy.abs()])
        .fold(0.0, f64::max);
    let extent = if extent_m > 0.0 {
        extent_m / METERS_PER_KILOMETER * 1.05
    } else {
        1.0
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Fry plot", ("sans-serif", 24))
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(|e| render_error(path, &e))?;

    chart
        .configure_mesh()
        .x_desc("ΔX (km)")
        .y_desc("ΔY (km)")
        .draw()
        .map_err(|e| render_error(path, &e))?;

    // Axes through the origin
    chart
        .draw_series(LineSeries::new([(-extent, 0.0), (extent, 0.0)], &BLACK))
        .map_err(|e| render_error(path, &e))?;
    chart
        .draw_series(LineSeries::new([(0.0, -extent), (0.0, extent)], &BLACK))
        .map_err(|e| render_error(path, &e))?;

    chart
        .draw_series(cloud.iter().map(|f| {
            Circle::new(
                (
                    f.dx / METERS_PER_KILOMETER,
                    f.dy / METERS_PER_KILOMETER,
                ),
                2,
                BLUE.mix(0.4).filled(),
            )
        }))
        .map_err(|e| render_error(path, &e))?;

    for &radius_m in reference_radii {
        let radius = radius_m / METERS_PER_KILOMETER;
        chart
            .draw_series(LineSeries::new(
                (0..=360).map(|deg| {
                    let rad = f64::from(deg).to_radians();
                    (radius * rad.cos(), radius * rad.sin())
                }),
                &RED,
            ))
            .map_err(|e| render_error(path, &e))?;
    }

    root.present().map_err(|e| render_error(path, &e))?;
    Ok(())
}

/// Render a folded azimuth histogram as a polar rose diagram
///
/// North is up and angles increase clockwise, matching the strike
/// convention of the azimuths. Bar length is the bin count normalized by
/// the largest bin.
///
/// # Errors
///
/// Returns [`AnalysisError::Render`] when the backend fails.
pub fn plot_rose_diagram(histogram: &AzimuthHistogram, title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, ROSE_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, &e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .build_cartesian_2d(-1.25..1.25, -1.25..1.25)
        .map_err(|e| render_error(path, &e))?;

    // Compass orientation: x = r·sin(θ), y = r·cos(θ), θ clockwise from North
    let to_xy = |azimuth_deg: f64, radius: f64| {
        let rad = azimuth_deg.to_radians();
        (radius * rad.sin(), radius * rad.cos())
    };

    // Radial grid rings and 30° spokes
    for ring in [0.25, 0.5, 0.75, 1.0] {
        chart
            .draw_series(LineSeries::new(
                (0..=360).map(|deg| to_xy(f64::from(deg), ring)),
                &BLACK.mix(0.15),
            ))
            .map_err(|e| render_error(path, &e))?;
    }
    for spoke in (0..360).step_by(30) {
        let azimuth = f64::from(spoke);
        chart
            .draw_series(LineSeries::new(
                [(0.0, 0.0), to_xy(azimuth, 1.0)],
                &BLACK.mix(0.15),
            ))
            .map_err(|e| render_error(path, &e))?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{spoke}°"),
                to_xy(azimuth, 1.12),
                ("sans-serif", 14),
            )))
            .map_err(|e| render_error(path, &e))?;
    }

    let max_count = histogram.max_count();
    if max_count > 0 {
        for (edge, count) in histogram.edges_and_counts() {
            if count == 0 {
                continue;
            }
            let radius = count as f64 / max_count as f64;
            let width = histogram
                .bin_width()
                .min(histogram.range() - edge)
                .max(0.0);

            let mut sector = vec![(0.0, 0.0)];
            let steps = (width.ceil() as usize).max(2);
            for k in 0..=steps {
                let azimuth = edge + width * k as f64 / steps as f64;
                sector.push(to_xy(azimuth, radius));
            }

            chart
                .draw_series(std::iter::once(Polygon::new(
                    sector.clone(),
                    BLUE.mix(0.5).filled(),
                )))
                .map_err(|e| render_error(path, &e))?;
            chart
                .draw_series(LineSeries::new(sector, &BLUE))
                .map_err(|e| render_error(path, &e))?;
        }
    }

    root.present().map_err(|e| render_error(path, &e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{plot_fry_scatter, plot_probability_curve, plot_rose_diagram};
    use crate::analysis::pipeline::{PipelineConfig, run};
    use crate::spatial::points::{Point, PointSet};

    fn sample_output() -> crate::analysis::pipeline::PipelineOutput {
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1000.0, 0.0),
            Point::new(0.0, 1500.0),
            Point::new(2000.0, 2000.0),
        ])
        .unwrap();
        run(&points, PipelineConfig::default()).unwrap()
    }

    // Figure content is inspected by eye; tests cover the error path and
    // that every renderer accepts a real pipeline output without panicking.
    #[test]
    fn test_render_to_bad_path_is_error() {
        let output = sample_output();
        let dir = std::path::Path::new("/nonexistent_dir");
        assert!(plot_probability_curve(&output.estimate, &dir.join("curve.png")).is_err());
        assert!(
            plot_fry_scatter(
                &output.fry_points,
                &[output.estimate.distance],
                &dir.join("fry.png"),
            )
            .is_err()
        );
        assert!(plot_rose_diagram(&output.rose_all, "Rose diagram", &dir.join("rose.png")).is_err());
    }
}
