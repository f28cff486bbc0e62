//! Analysis modules for the spatial statistics pipeline

/// Characteristic-distance estimation from nearest-neighbour statistics
pub mod characteristic;
/// Fry transform: pairwise displacement vectors with magnitude and azimuth
pub mod fry;
/// Pipeline orchestration from point set to immutable output artifacts
pub mod pipeline;
/// Directional aggregation of azimuths into rose-diagram histograms
pub mod rose;

pub use pipeline::{PipelineConfig, PipelineOutput};
