use super::{
    dataset::DatasetConfig,
    evolution::EvolutionConfig,
    features::FeatureConfig,
    traits::ConfigSection,
};
use crate::error::TraderulesError;
use crate::types::DEFAULT_CHROMOSOME_LENGTH;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `TRADERULES__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "TRADERULES";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub dataset: DatasetConfig,
    pub features: FeatureConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TraderulesError> {
        validate_section(&self.evolution)?;
        validate_section(&self.dataset)?;
        validate_section(&self.features)?;

        // The feature engineer always emits the built-in indicator set
        if self.evolution.chromosome_length != DEFAULT_CHROMOSOME_LENGTH {
            return Err(TraderulesError::Configuration(format!(
                "Chromosome length {} does not match the {} bits produced by feature extraction",
                self.evolution.chromosome_length, DEFAULT_CHROMOSOME_LENGTH
            )));
        }
        Ok(())
    }

    /// Layered load: section defaults, then the optional TOML file, then
    /// `TRADERULES__SECTION__FIELD` environment variables.
    ///
    /// `env` replaces the process environment when given.
    pub fn load_layered(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, TraderulesError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(TraderulesError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Prefix a section's configuration error with its table name
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), TraderulesError> {
    section.validate().map_err(|e| match e {
        TraderulesError::Configuration(msg) => {
            TraderulesError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Manager over the layered configuration; see [`AppConfig::load_layered`]
    pub fn load(path: Option<&Path>) -> Result<Self, TraderulesError> {
        let config = AppConfig::load_layered(path, None)?;
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
        })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TraderulesError> {
        let toml_str = toml::to_string_pretty(&self.get())
            .map_err(|e| TraderulesError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| TraderulesError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply an edit; the previous configuration is kept if the edit does not validate
    pub fn update<F>(&self, f: F) -> Result<(), TraderulesError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.write_lock() = candidate;
        Ok(())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, AppConfig> {
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
