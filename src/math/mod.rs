//! Mathematical utilities for the pipeline

/// Axial azimuth conversion and 360° folding
pub mod azimuth;
/// Linear grid generation and discrete gradients
pub mod grid;
