use crate::engines::generation::genome::EncodedVector;

/// Disjoint training and testing sets, each in original data order
#[derive(Debug, Clone, Default)]
pub struct DataSplit {
    pub training: Vec<EncodedVector>,
    pub testing: Vec<EncodedVector>,
}

/// Configuration for data splitting
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub training_fraction: f64, // e.g., 0.7 = first 70% trains
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            training_fraction: 0.7,
        }
    }
}
