//! Plots the final weights of the first hidden layer as a colour-mapped
//! figure, one matrix panel per neuron with a shared color scale.

use log::info;
use walkplot::config::WeightPlotConfig;
use walkplot::error::Result;
use walkplot::logs::WeightsLog;
use walkplot::plot::plot_weight_figure;

fn main() -> Result<()> {
    env_logger::init();

    let config = WeightPlotConfig::default();
    let weights = WeightsLog::from_path(&config.input_path, config.delimiter)?;
    info!(
        "loaded {}x{} weight grid ({} neurons) from {}",
        weights.nrows(),
        weights.ncols(),
        weights.num_neurons(),
        config.input_path.display()
    );

    plot_weight_figure(&weights, &config.output_dir)?;
    Ok(())
}
