//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Default parameters and output filenames
pub mod configuration;
/// Error types for the pipeline
pub mod error;
/// Tabular point set loading
pub mod loader;
/// Figure rendering with the plotters backend
pub mod plot;
/// Tabular report export
pub mod report;
