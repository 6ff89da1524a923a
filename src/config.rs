//! Options for the two plotting utilities.
//!
//! The original logger writes the two CSV files to fixed locations with a
//! `;` separator, so the defaults mirror that layout. All fields are plain
//! data; the loading and plotting functions take parsed tables, so nothing
//! below is required for testing the numeric pipeline.

use std::path::PathBuf;

/// Where to find the learning log and where to write the metric charts.
#[derive(Debug, Clone)]
pub struct LearningPlotConfig {
    /// Path to the semicolon-separated learning log
    pub input_path: PathBuf,
    /// CSV item separator
    pub delimiter: u8,
    /// Directory the four SVG charts are written into
    pub output_dir: PathBuf,
}

impl Default for LearningPlotConfig {
    fn default() -> Self {
        LearningPlotConfig {
            input_path: PathBuf::from("logs/learning_log.csv"),
            delimiter: b';',
            output_dir: PathBuf::from("."),
        }
    }
}

/// Where to find the weights log and where to write the weight figure.
#[derive(Debug, Clone)]
pub struct WeightPlotConfig {
    /// Path to the semicolon-separated weights log
    pub input_path: PathBuf,
    /// CSV item separator
    pub delimiter: u8,
    /// Directory the composed SVG figure is written into
    pub output_dir: PathBuf,
}

impl Default for WeightPlotConfig {
    fn default() -> Self {
        WeightPlotConfig {
            input_path: PathBuf::from("logs/weights_log.csv"),
            delimiter: b';',
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_match_logger_layout() {
        let learning = LearningPlotConfig::default();
        assert_eq!(learning.input_path, PathBuf::from("logs/learning_log.csv"));
        assert_eq!(learning.delimiter, b';');
        assert_eq!(learning.output_dir, PathBuf::from("."));

        let weights = WeightPlotConfig::default();
        assert_eq!(weights.input_path, PathBuf::from("logs/weights_log.csv"));
        assert_eq!(weights.delimiter, b';');
    }
}
