//! Line charts of the learning metrics.
//!
//! One chart per metric family, each with the training and validation
//! series plotted against epoch (row index).

use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use crate::error::{Result, WalkplotError};
use crate::logs::learning::{LearningLog, MetricFamily, METRIC_FAMILIES};

const CHART_SIZE: (u32, u32) = (800, 600);

/// Render one chart per metric family into `output_dir` and return the
/// written paths, in family order.
pub fn plot_learning_curves(log_table: &LearningLog, output_dir: &Path) -> Result<Vec<PathBuf>> {
    if log_table.is_empty() {
        return Err(WalkplotError::invalid_parameter(
            "learning log",
            "log contains no epochs",
        ));
    }

    let mut written = Vec::with_capacity(METRIC_FAMILIES.len());
    for family in METRIC_FAMILIES {
        let path = output_dir.join(family.artifact_name());
        plot_metric_family(log_table, family, &path)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn plot_metric_family(log_table: &LearningLog, family: MetricFamily, path: &Path) -> Result<()> {
    let (training, validation) = log_table.series(family);
    let epochs = training.len();

    let y_min = training
        .iter()
        .chain(validation.iter())
        .copied()
        .fold(f64::INFINITY, f64::min);
    let y_max = training
        .iter()
        .chain(validation.iter())
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    // Keep a visible band even when a metric is completely flat.
    let pad = ((y_max - y_min) * 0.05).max(1e-3);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(WalkplotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(family.title(), ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..epochs.saturating_sub(1).max(1), (y_min - pad)..(y_max + pad))
        .map_err(WalkplotError::render)?;

    chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc(family.training_column().trim_start_matches("training "))
        .draw()
        .map_err(WalkplotError::render)?;

    chart
        .draw_series(LineSeries::new(
            training.iter().enumerate().map(|(epoch, &v)| (epoch, v)),
            &BLUE,
        ))
        .map_err(WalkplotError::render)?
        .label(family.training_column())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            validation.iter().enumerate().map(|(epoch, &v)| (epoch, v)),
            &RED,
        ))
        .map_err(WalkplotError::render)?
        .label(family.validation_column())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(WalkplotError::render)?;

    root.present().map_err(WalkplotError::render)?;
    Ok(())
}
