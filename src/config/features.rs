use super::traits::ConfigSection;
use crate::error::TraderulesError;
use serde::{Deserialize, Serialize};

/// Indicator windows used when turning a price series into feature vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub short_window: usize,
    pub long_window: usize,
    /// Days between an observation and the price its label looks at.
    pub horizon: usize,
    pub volatility_threshold: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            short_window: 14,
            long_window: 50,
            horizon: 14,
            volatility_threshold: 0.03,
        }
    }
}

impl FeatureConfig {
    /// Days of history needed before the first eligible observation
    pub fn lookback(&self) -> usize {
        2 * self.long_window
    }
}

impl ConfigSection for FeatureConfig {
    fn section_name() -> &'static str {
        "features"
    }

    fn validate(&self) -> Result<(), TraderulesError> {
        if self.short_window == 0 {
            return Err(TraderulesError::Configuration(
                "Short window must be at least 1".to_string()
            ));
        }
        if self.short_window >= self.long_window {
            return Err(TraderulesError::Configuration(format!(
                "Short window ({}) must be shorter than long window ({})",
                self.short_window, self.long_window
            )));
        }
        if !self.volatility_threshold.is_finite() || self.volatility_threshold < 0.0 {
            return Err(TraderulesError::Configuration(
                "Volatility threshold must be a non-negative number".to_string()
            ));
        }
        Ok(())
    }
}
