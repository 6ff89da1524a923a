//! Plots the progress of learning: one chart per metric family, each with
//! the training and validation series over epochs.

use log::info;
use walkplot::config::LearningPlotConfig;
use walkplot::error::Result;
use walkplot::logs::LearningLog;
use walkplot::plot::plot_learning_curves;

fn main() -> Result<()> {
    env_logger::init();

    let config = LearningPlotConfig::default();
    let log_table = LearningLog::from_path(&config.input_path, config.delimiter)?;
    info!(
        "loaded {} epochs from {}",
        log_table.len(),
        config.input_path.display()
    );

    plot_learning_curves(&log_table, &config.output_dir)?;
    Ok(())
}
