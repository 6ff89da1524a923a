pub mod learning;
pub mod weights;

pub use learning::plot_learning_curves;
pub use weights::plot_weight_figure;
