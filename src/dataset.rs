//! Training dataset ingestion
//!
//! Columns are located by header name, so the file's column order is free;
//! the 8 schema columns plus `Outcome` must all be present.

use std::path::Path;

use linfa::Dataset;
use ndarray::{Array1, Array2, Ix1};
use thiserror::Error;

use crate::features::{FEATURE_COUNT, FEATURE_NAMES};

/// Name of the target column in the training CSV.
pub const OUTCOME_COLUMN: &str = "Outcome";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),

    #[error("row {row}: column `{column}` has non-numeric value `{value}`")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: outcome `{value}` is not 0 or 1")]
    InvalidOutcome { row: usize, value: String },

    #[error("dataset contains no rows")]
    Empty,

    #[error("could not assemble dataset: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Load a training CSV into a labelled dataset over the fixed schema.
pub fn load_csv(path: &Path) -> Result<Dataset<f64, usize, Ix1>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut feature_indices = [0usize; FEATURE_COUNT];
    for (slot, name) in feature_indices.iter_mut().zip(FEATURE_NAMES) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;
    }
    let outcome_index = headers
        .iter()
        .position(|h| h == OUTCOME_COLUMN)
        .ok_or_else(|| DatasetError::MissingColumn(OUTCOME_COLUMN.to_string()))?;

    let mut values = Vec::new();
    let mut targets = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record?;

        for (&index, name) in feature_indices.iter().zip(FEATURE_NAMES) {
            let raw = record.get(index).unwrap_or("");
            let value: f64 = raw.trim().parse().map_err(|_| DatasetError::InvalidValue {
                row,
                column: name.to_string(),
                value: raw.to_string(),
            })?;
            values.push(value);
        }

        let raw = record.get(outcome_index).unwrap_or("");
        let outcome = match raw.trim().parse::<f64>() {
            Ok(v) if v == 0.0 => 0,
            Ok(v) if v == 1.0 => 1,
            _ => {
                return Err(DatasetError::InvalidOutcome {
                    row,
                    value: raw.to_string(),
                })
            }
        };
        targets.push(outcome);
    }

    if targets.is_empty() {
        return Err(DatasetError::Empty);
    }

    let records = Array2::from_shape_vec((targets.len(), FEATURE_COUNT), values)?;
    Ok(Dataset::new(records, Array1::from_vec(targets))
        .with_feature_names(FEATURE_NAMES.to_vec()))
}
