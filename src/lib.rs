//! Fry transform and nearest-neighbour spatial statistics for 2-D point sets
//!
//! The crate takes a set of planar deposit coordinates, derives a
//! characteristic clustering distance from nearest-neighbour statistics,
//! generates the Fry point cloud of pairwise displacements, and aggregates
//! the resulting axial azimuths into rose-diagram histograms.

#![forbid(unsafe_code)]

/// Characteristic-distance estimation, Fry transform, and directional aggregation
pub mod analysis;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Mathematical utilities for azimuths and grid sweeps
pub mod math;
/// Point set and distance matrix data structures
pub mod spatial;

pub use io::error::{AnalysisError, Result};
