//! Tabular report export
//!
//! Two flat CSV artifacts: a one-row summary of the run and a per-pair
//! detail sheet covering the full Fry cloud. Distances appear in native
//! meters and, in the summary, also in kilometers.

use std::path::Path;

use serde::Serialize;

use crate::analysis::pipeline::PipelineOutput;
use crate::io::configuration::METERS_PER_KILOMETER;
use crate::io::error::{AnalysisError, Result};
use crate::spatial::points::PointSet;

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    point_count: usize,
    fry_pair_count: usize,
    mode: &'a str,
    grid_size: usize,
    bin_width_deg: f64,
    characteristic_distance_m: f64,
    characteristic_distance_km: f64,
    probability_at_characteristic: f64,
    total_connectivity_m: Option<f64>,
    total_connectivity_km: Option<f64>,
}

#[derive(Debug, Serialize)]
struct FryDetailRow {
    point_index: usize,
    origin_index: usize,
    origin_x_m: f64,
    origin_y_m: f64,
    dx_m: f64,
    dy_m: f64,
    fry_x_m: f64,
    fry_y_m: f64,
    distance_m: f64,
    azimuth_deg: f64,
}

fn export_error(path: &Path, source: csv::Error) -> AnalysisError {
    AnalysisError::ReportExport {
        path: path.to_path_buf(),
        source,
    }
}

/// Write the one-row run summary sheet
///
/// Total-connectivity fields are left empty when the estimator reported no
/// saturation radius.
///
/// # Errors
///
/// Returns [`AnalysisError::ReportExport`] when the file cannot be written.
pub fn write_summary(output: &PipelineOutput, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| export_error(path, e))?;

    let row = SummaryRow {
        point_count: output.point_count,
        fry_pair_count: output.fry_points.len(),
        mode: output.estimate.mode.label(),
        grid_size: output.config.grid_size,
        bin_width_deg: output.config.bin_width_deg,
        characteristic_distance_m: output.estimate.distance,
        characteristic_distance_km: output.estimate.distance / METERS_PER_KILOMETER,
        probability_at_characteristic: output.estimate.probability,
        total_connectivity_m: output.estimate.total_connectivity,
        total_connectivity_km: output
            .estimate
            .total_connectivity
            .map(|d| d / METERS_PER_KILOMETER),
    };

    writer.serialize(row).map_err(|e| export_error(path, e))?;
    writer.flush().map_err(|e| export_error(path, e.into()))?;
    Ok(())
}

/// Write the per-pair detail sheet for the full Fry cloud
///
/// Each row carries the origin point's coordinates, the displacement, the
/// reconstructed absolute position (origin plus displacement), and the
/// derived distance and azimuth.
///
/// # Errors
///
/// Returns [`AnalysisError::ReportExport`] when the file cannot be written.
pub fn write_fry_detail(points: &PointSet, output: &PipelineOutput, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| export_error(path, e))?;

    for fry in &output.fry_points {
        let Some(origin) = points.get(fry.origin) else {
            continue;
        };
        let row = FryDetailRow {
            point_index: fry.point,
            origin_index: fry.origin,
            origin_x_m: origin.x,
            origin_y_m: origin.y,
            dx_m: fry.dx,
            dy_m: fry.dy,
            fry_x_m: origin.x + fry.dx,
            fry_y_m: origin.y + fry.dy,
            distance_m: fry.distance,
            azimuth_deg: fry.azimuth,
        };
        writer.serialize(row).map_err(|e| export_error(path, e))?;
    }

    writer.flush().map_err(|e| export_error(path, e.into()))?;
    Ok(())
}
