use crate::error::TraderulesError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), TraderulesError>;
}

pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), TraderulesError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(TraderulesError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}
