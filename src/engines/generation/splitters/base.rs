use super::types::*;
use crate::engines::generation::genome::EncodedVector;
use crate::error::TraderulesError;

pub trait DataSplitter: Send + Sync {
    /// Partition encoded data into training and testing sets
    fn split(&self, data: &[EncodedVector]) -> Result<DataSplit, TraderulesError>;

    /// Get splitter configuration
    fn config(&self) -> &SplitConfig;
}
