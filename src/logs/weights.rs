//! Loading of the first-hidden-layer weights log.
//!
//! The log is a rectangular numeric grid: one row per input feature, and
//! three consecutive columns per hidden neuron (an artifact of how the
//! logger flattens the weight tensor). Header names carry no meaning here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use ndarray::{s, Array2, ArrayView2};

use crate::error::{Result, WalkplotError};

/// Number of weight columns the logger emits per hidden neuron
pub const COLUMNS_PER_NEURON: usize = 3;

/// Rectangular grid of weight values.
#[derive(Debug, Clone)]
pub struct WeightsLog {
    values: Array2<f64>,
}

impl WeightsLog {
    /// Wrap an already-parsed grid. Used by the tests to exercise the
    /// numeric pipeline without touching the filesystem.
    pub fn new(values: Array2<f64>) -> Self {
        WeightsLog { values }
    }

    /// Load the log from a file, using `delimiter` as the CSV separator.
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            WalkplotError::IoError(format!("failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file, delimiter)
    }

    /// Load the log from any reader. The first line is a header and is
    /// skipped; every remaining cell must parse as a number, and all rows
    /// must have the same width.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);

        let ncols = rdr.headers()?.len();
        let mut data = Vec::new();
        let mut nrows = 0;
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            for (column, raw) in record.iter().enumerate() {
                let value: f64 = raw.trim().parse().map_err(|_| WalkplotError::InvalidCell {
                    row,
                    column,
                    value: raw.to_string(),
                })?;
                data.push(value);
            }
            nrows += 1;
        }

        let values = Array2::from_shape_vec((nrows, ncols), data).map_err(|_| {
            WalkplotError::DimensionMismatch {
                expected: format!("{} columns per row", ncols),
                actual: "ragged rows".to_string(),
            }
        })?;
        Ok(WeightsLog { values })
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Number of complete 3-column neuron groups. Trailing columns beyond
    /// the last full group do not count.
    pub fn num_neurons(&self) -> usize {
        self.values.ncols() / COLUMNS_PER_NEURON
    }

    /// The 3-column slice of weights belonging to one hidden neuron.
    pub fn neuron(&self, index: usize) -> ArrayView2<'_, f64> {
        let start = index * COLUMNS_PER_NEURON;
        self.values.slice(s![.., start..start + COLUMNS_PER_NEURON])
    }

    /// Global minimum and maximum over all cells; the domain of the
    /// color normalization.
    pub fn value_range(&self) -> Result<(f64, f64)> {
        if self.values.is_empty() {
            return Err(WalkplotError::invalid_parameter(
                "weights",
                "weights log contains no values",
            ));
        }
        let vmin = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let vmax = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok((vmin, vmax))
    }
}
