use super::base::DataSplitter;
use super::types::{DataSplit, SplitConfig};
use crate::engines::generation::genome::EncodedVector;
use crate::error::TraderulesError;

/// Sequential split: the first `round(n * fraction)` rows train, the rest test
pub struct SimpleSplitter {
    config: SplitConfig,
}

impl SimpleSplitter {
    pub fn new(training_fraction: f64) -> Self {
        Self {
            config: SplitConfig { training_fraction },
        }
    }

    pub fn training_size(&self, total_rows: usize) -> usize {
        (total_rows as f64 * self.config.training_fraction).round() as usize
    }
}

impl Default for SimpleSplitter {
    fn default() -> Self {
        Self {
            config: SplitConfig::default(),
        }
    }
}

impl DataSplitter for SimpleSplitter {
    fn split(&self, data: &[EncodedVector]) -> Result<DataSplit, TraderulesError> {
        let total_rows = data.len();
        let training_rows = self.training_size(total_rows);

        if training_rows == 0 || training_rows >= total_rows {
            return Err(TraderulesError::Validation(format!(
                "Invalid split: {} rows at fraction {} leaves an empty training or testing set",
                total_rows, self.config.training_fraction
            )));
        }

        let (training, testing) = data.split_at(training_rows);
        log::debug!("Split {} rows into {} training / {} testing", total_rows, training.len(), testing.len());

        Ok(DataSplit {
            training: training.to_vec(),
            testing: testing.to_vec(),
        })
    }

    fn config(&self) -> &SplitConfig {
        &self.config
    }
}
