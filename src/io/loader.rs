//! Tabular point set loading
//!
//! The input is a headered CSV file with `X` and `Y` columns (meters), one
//! row per deposit. Header matching is case-insensitive and extra columns
//! are ignored. Format problems surface before any computation starts.

use std::path::Path;

use serde::Deserialize;

use crate::io::error::{AnalysisError, Result};
use crate::spatial::points::{Point, PointSet};

#[derive(Debug, Deserialize)]
struct DepositRecord {
    #[serde(alias = "X")]
    x: f64,
    #[serde(alias = "Y")]
    y: f64,
}

/// Load a point set from a CSV file with `X`/`Y` coordinate columns
///
/// # Errors
///
/// Returns [`AnalysisError::TableLoad`] when the file is unreadable or a
/// row fails to parse, [`AnalysisError::MissingColumn`] when a coordinate
/// column is absent, and [`AnalysisError::InsufficientPoints`] when fewer
/// than two rows are present.
pub fn load_point_set(path: &Path) -> Result<PointSet> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| AnalysisError::TableLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| AnalysisError::TableLoad {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for column in ["X", "Y"] {
        if !headers.iter().any(|h| h.trim().eq_ignore_ascii_case(column)) {
            return Err(AnalysisError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut points = Vec::new();
    for record in reader.deserialize() {
        let deposit: DepositRecord = record.map_err(|source| AnalysisError::TableLoad {
            path: path.to_path_buf(),
            source,
        })?;
        points.push(Point::new(deposit.x, deposit.y));
    }

    PointSet::new(points)
}
