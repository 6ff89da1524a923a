//! Colour-mapped figure of the hidden-layer weights.
//!
//! One small matrix panel per hidden neuron (rows = input features,
//! columns = the neuron's three weight slots), all sharing a single
//! zero-centered normalization, followed by one color scale.

use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{red_grey_color, MidpointNormalize};
use crate::error::{Result, WalkplotError};
use crate::logs::weights::{WeightsLog, COLUMNS_PER_NEURON};

const PANEL_WIDTH: u32 = 160;
const FIGURE_HEIGHT: u32 = 600;
const SCALE_STEPS: usize = 256;

/// Render the composed weights figure into `output_dir` and return the
/// written path.
pub fn plot_weight_figure(weights: &WeightsLog, output_dir: &Path) -> Result<PathBuf> {
    let neurons = weights.num_neurons();
    if neurons == 0 {
        return Err(WalkplotError::invalid_parameter(
            "weights",
            "fewer than 3 columns, no neuron group to draw",
        ));
    }
    let leftover = weights.ncols() % COLUMNS_PER_NEURON;
    if leftover != 0 {
        debug!("ignoring {} trailing column(s) beyond the last neuron group", leftover);
    }

    let (vmin, vmax) = weights.value_range()?;
    let norm = MidpointNormalize::zero_centered(vmin, vmax);
    debug!("normalizing {} neurons over [{}, {}]", neurons, vmin, vmax);

    let path = output_dir.join("weights.svg");
    let width = PANEL_WIDTH * (neurons as u32 + 1);
    // The backend borrows the path for the whole drawing scope.
    {
        let root = SVGBackend::new(&path, (width, FIGURE_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(WalkplotError::render)?;

        // One cell per panel column for every neuron, plus one for the scale.
        let panels = root.split_evenly((1, neurons + 1));
        for (index, panel) in panels.iter().take(neurons).enumerate() {
            draw_neuron_panel(panel, weights, index, &norm)?;
        }
        draw_color_scale(&panels[neurons], &norm)?;

        root.present().map_err(WalkplotError::render)?;
    }
    info!("wrote {}", path.display());
    Ok(path)
}

/// Matrix panel of one neuron: a filled rectangle per weight, no axes.
fn draw_neuron_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    weights: &WeightsLog,
    index: usize,
    norm: &MidpointNormalize,
) -> Result<()> {
    let nrows = weights.nrows();
    let group = weights.neuron(index);

    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .build_cartesian_2d(0..COLUMNS_PER_NEURON, 0..nrows)
        .map_err(WalkplotError::render)?;

    // Row 0 of the matrix sits at the top, matching how the weight tensor
    // reads.
    chart
        .draw_series(group.indexed_iter().map(|((row, col), &value)| {
            let color = red_grey_color(norm.apply(value));
            Rectangle::new([(col, nrows - row), (col + 1, nrows - row - 1)], color.filled())
        }))
        .map_err(WalkplotError::render)?;

    Ok(())
}

/// Vertical color scale over the normalization domain, labelled at the
/// domain endpoints and the midpoint in data units.
fn draw_color_scale<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    norm: &MidpointNormalize,
) -> Result<()> {
    let (mut lo, mut hi) = (norm.vmin, norm.vmax);
    if hi <= lo {
        // Flat data still gets a drawable range.
        lo -= 0.5;
        hi += 0.5;
    }

    // No mesh on the strip: plotters' tick search does not handle a
    // zero-label integer axis, and generic ticks would not land on the
    // values worth reading anyway.
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .build_cartesian_2d(0..1usize, lo..hi)
        .map_err(WalkplotError::render)?;

    let step = (hi - lo) / SCALE_STEPS as f64;
    chart
        .draw_series((0..SCALE_STEPS).map(|i| {
            let bottom = lo + step * i as f64;
            let top = bottom + step;
            let color = red_grey_color(norm.apply(bottom + step / 2.0));
            Rectangle::new([(0, bottom), (1, top)], color.filled())
        }))
        .map_err(WalkplotError::render)?;

    // Annotate vmin, the midpoint and vmax directly. The midpoint label is
    // dropped when it falls outside the drawn range (all-positive or
    // all-negative weights).
    let mut anchors = vec![(lo, VPos::Bottom), (hi, VPos::Top)];
    if norm.midpoint > lo && norm.midpoint < hi {
        anchors.push((norm.midpoint, VPos::Center));
    }
    for (value, v_pos) in anchors {
        let style = ("sans-serif", 12)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, v_pos));
        chart
            .plotting_area()
            .draw(&Text::new(format!("{:.2}", value), (0, value), style))
            .map_err(WalkplotError::render)?;
    }

    Ok(())
}
