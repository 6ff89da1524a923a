//! # Walkplot - Training Log Visualization
//!
//! Walkplot renders the CSV logs of a neural-network training run as SVG
//! charts. It consumes two files written by an external trainer: a
//! per-epoch learning log (training/validation accuracy, error, RMSE and
//! F1) and a dump of the first hidden layer's weights.
//!
//! ## Utilities
//!
//! - **Learning plotter** (`plot_learning` binary): one two-series line
//!   chart per metric family, four charts in total.
//! - **Weight plotter** (`plot_weights` binary): one colour-mapped matrix
//!   panel per hidden neuron plus a shared color scale, composed into a
//!   single figure. A zero-centered normalization pins the neutral color
//!   of the diverging map to the weight value 0.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use walkplot::config::WeightPlotConfig;
//! use walkplot::logs::WeightsLog;
//! use walkplot::plot::plot_weight_figure;
//!
//! # fn main() -> walkplot::error::Result<()> {
//! let config = WeightPlotConfig::default();
//! let weights = WeightsLog::from_path(&config.input_path, config.delimiter)?;
//! plot_weight_figure(&weights, &config.output_dir)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`color`] - Zero-centered normalization and the diverging colormap
//! - [`config`] - Option structs for the two utilities
//! - [`error`] - Error types and result handling
//! - [`logs`] - CSV loading for the learning and weights logs
//! - [`plot`] - Chart and figure rendering

pub mod color;
pub mod config;
pub mod error;
pub mod logs;
pub mod plot;
