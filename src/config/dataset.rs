use super::traits::ConfigSection;
use crate::error::TraderulesError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub training_fraction: f64, // e.g., 0.7 = first 70% of rows train the rules
    pub has_header: bool,
    pub price_column: usize,
    pub label_column: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            training_fraction: 0.7,
            has_header: false,
            price_column: 0,
            label_column: 1,
        }
    }
}

impl ConfigSection for DatasetConfig {
    fn section_name() -> &'static str {
        "dataset"
    }

    fn validate(&self) -> Result<(), TraderulesError> {
        if self.training_fraction <= 0.0 || self.training_fraction >= 1.0 {
            return Err(TraderulesError::Configuration(
                "Training fraction must be between 0 and 1".to_string()
            ));
        }
        if self.price_column == self.label_column {
            return Err(TraderulesError::Configuration(
                "Price and label columns must differ".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_bounds() {
        for fraction in [0.0, 1.0, -0.2] {
            let config = DatasetConfig {
                training_fraction: fraction,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "fraction {} accepted", fraction);
        }
        assert!(DatasetConfig::default().validate().is_ok());
    }
}
