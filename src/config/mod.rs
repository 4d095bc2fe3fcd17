pub mod traits;
pub mod evolution;
pub mod dataset;
pub mod features;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use dataset::DatasetConfig;
pub use features::FeatureConfig;
pub use traits::ConfigSection;
