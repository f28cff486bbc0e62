//! Pipeline orchestration from point set to immutable output artifacts
//!
//! Data flows strictly forward: distance matrix → characteristic-distance
//! estimate → Fry transform → directional aggregation. The output struct
//! owns every derived artifact and is read-only afterward; re-running on
//! identical input and configuration reproduces it bit for bit.

use crate::analysis::characteristic::{CharacteristicEstimate, EstimatorMode, estimate};
use crate::analysis::fry::{FryPoint, azimuths, fry_transform, masked_azimuths};
use crate::analysis::rose::AzimuthHistogram;
use crate::io::configuration::{DEFAULT_BIN_WIDTH_DEG, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::distance::DistanceMatrix;
use crate::spatial::points::PointSet;

/// Runtime knobs for one pipeline run
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Characteristic-distance strategy
    pub mode: EstimatorMode,
    /// Number of samples in the threshold sweep
    pub grid_size: usize,
    /// Rose-diagram bin width in degrees
    pub bin_width_deg: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: EstimatorMode::CumulativeInflection,
            grid_size: DEFAULT_GRID_SIZE,
            bin_width_deg: DEFAULT_BIN_WIDTH_DEG,
        }
    }
}

/// Immutable artifacts of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Number of input points
    pub point_count: usize,
    /// Configuration the run was produced with
    pub config: PipelineConfig,
    /// Characteristic-distance estimate with the full swept curve
    pub estimate: CharacteristicEstimate,
    /// The complete Fry point cloud, N·(N−1) vectors
    pub fry_points: Vec<FryPoint>,
    /// Folded rose histogram over every Fry pair
    pub rose_all: AzimuthHistogram,
    /// Folded rose histogram over pairs within the characteristic distance
    pub rose_characteristic: AzimuthHistogram,
    /// Folded rose histogram over pairs within the total-connectivity
    /// distance; absent when the estimator found none
    pub rose_connectivity: Option<AzimuthHistogram>,
}

/// Run the full spatial statistics pipeline on a point set
///
/// # Errors
///
/// Returns an invalid-parameter error for a sweep resolution below
/// [`MIN_GRID_SIZE`] or a bin width outside (0°, 180°].
pub fn run(points: &PointSet, config: PipelineConfig) -> Result<PipelineOutput> {
    if config.grid_size < MIN_GRID_SIZE {
        return Err(invalid_parameter(
            "grid_size",
            &config.grid_size,
            &format!("threshold sweep requires at least {MIN_GRID_SIZE} samples"),
        ));
    }

    let matrix = DistanceMatrix::from_points(points);
    let characteristic = estimate(&matrix, config.mode, config.grid_size)?;
    let fry_points = fry_transform(points);

    let all = azimuths(&fry_points);
    let local = masked_azimuths(&fry_points, characteristic.distance);

    let rose_all = AzimuthHistogram::folded(&all, config.bin_width_deg)?;
    let rose_characteristic = AzimuthHistogram::folded(&local, config.bin_width_deg)?;
    let rose_connectivity = match characteristic.total_connectivity {
        Some(radius) => Some(AzimuthHistogram::folded(
            &masked_azimuths(&fry_points, radius),
            config.bin_width_deg,
        )?),
        None => None,
    };

    Ok(PipelineOutput {
        point_count: points.len(),
        config,
        estimate: characteristic,
        fry_points,
        rose_all,
        rose_characteristic,
        rose_connectivity,
    })
}
