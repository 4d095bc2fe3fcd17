pub mod coverage;
pub mod fitness;

pub use coverage::CoverageReport;
pub use fitness::{ConfusionMatrix, FitnessEvaluator};
