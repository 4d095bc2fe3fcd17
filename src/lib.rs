//! Genetic-algorithm induction of "IF indicator conditions THEN direction"
//! rules from daily price data.
//!
//! ```text
//! price CSV ─▶ FeatureEngineer ─▶ encode ─▶ SimpleSplitter ─▶ EvolutionEngine ─▶ RuleReport
//! ```

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod functions;
pub mod ml;
pub mod types;

pub use error::{Result, TraderulesError};
pub use types::{Indicator, RawFeatureVector, INDICATOR_COUNT};
