pub mod learning;
pub mod weights;

pub use learning::{LearningLog, MetricFamily, METRIC_FAMILIES};
pub use weights::WeightsLog;
