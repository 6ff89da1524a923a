//! Loading of the per-epoch learning log.
//!
//! The log is a delimited table with one row per epoch and a header naming
//! the metric columns. Column order in the file does not matter; lookup is
//! by header name. The eight columns below are a precondition: a log
//! missing any of them fails to load, and no chart is produced.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, WalkplotError};

/// The four metric families logged per epoch, each as a
/// training/validation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    Accuracy,
    Error,
    Rmse,
    F1,
}

/// All families, in the order their charts are written.
pub const METRIC_FAMILIES: [MetricFamily; 4] = [
    MetricFamily::Accuracy,
    MetricFamily::Error,
    MetricFamily::Rmse,
    MetricFamily::F1,
];

impl MetricFamily {
    /// Header name of the training series
    pub fn training_column(&self) -> &'static str {
        match self {
            MetricFamily::Accuracy => "training accuracy",
            MetricFamily::Error => "training error",
            MetricFamily::Rmse => "training RMSE",
            MetricFamily::F1 => "training F1",
        }
    }

    /// Header name of the validation series
    pub fn validation_column(&self) -> &'static str {
        match self {
            MetricFamily::Accuracy => "validation accuracy",
            MetricFamily::Error => "validation error",
            MetricFamily::Rmse => "validation RMSE",
            MetricFamily::F1 => "validation F1",
        }
    }

    /// File name of the chart for this family
    pub fn artifact_name(&self) -> &'static str {
        match self {
            MetricFamily::Accuracy => "learning_accuracy.svg",
            MetricFamily::Error => "learning_error.svg",
            MetricFamily::Rmse => "learning_rmse.svg",
            MetricFamily::F1 => "learning_f1.svg",
        }
    }

    /// Human-readable chart caption
    pub fn title(&self) -> &'static str {
        match self {
            MetricFamily::Accuracy => "Accuracy over epochs",
            MetricFamily::Error => "Error over epochs",
            MetricFamily::Rmse => "RMSE over epochs",
            MetricFamily::F1 => "F1 over epochs",
        }
    }
}

/// Epoch-indexed metric columns, keyed by their header names.
#[derive(Debug, Clone)]
pub struct LearningLog {
    columns: HashMap<&'static str, Vec<f64>>,
    rows: usize,
}

impl LearningLog {
    /// Load the log from a file, using `delimiter` as the CSV separator.
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            WalkplotError::IoError(format!("failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file, delimiter, &path.display().to_string())
    }

    /// Load the log from any reader. `source` is only used in error messages.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8, source: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);

        // Resolve every required column to its position in the header.
        let headers = rdr.headers()?.clone();
        let mut indices: HashMap<&'static str, usize> = HashMap::new();
        for family in METRIC_FAMILIES {
            for name in [family.training_column(), family.validation_column()] {
                let idx = headers
                    .iter()
                    .position(|h| h.trim() == name)
                    .ok_or_else(|| WalkplotError::missing_column(name, source))?;
                indices.insert(name, idx);
            }
        }

        let mut columns: HashMap<&'static str, Vec<f64>> =
            indices.keys().map(|&name| (name, Vec::new())).collect();
        let mut rows = 0;
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            for (&name, &idx) in &indices {
                let raw = record.get(idx).ok_or_else(|| WalkplotError::InvalidCell {
                    row,
                    column: idx,
                    value: String::new(),
                })?;
                let value: f64 = raw.trim().parse().map_err(|_| WalkplotError::InvalidCell {
                    row,
                    column: idx,
                    value: raw.to_string(),
                })?;
                if let Some(col) = columns.get_mut(name) {
                    col.push(value);
                }
            }
            rows += 1;
        }

        Ok(LearningLog { columns, rows })
    }

    /// Number of logged epochs
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Training and validation series of one metric family, in epoch order.
    pub fn series(&self, family: MetricFamily) -> (&[f64], &[f64]) {
        // Both columns exist: loading fails otherwise.
        let training = &self.columns[family.training_column()];
        let validation = &self.columns[family.validation_column()];
        (training, validation)
    }
}
