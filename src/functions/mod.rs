pub mod indicators;
pub mod traits;

pub use traits::{evaluate, round2, VectorizedIndicator};
