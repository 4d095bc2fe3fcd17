use serde::{Deserialize, Serialize};

/// Number of boolean indicator signals produced per trading day.
pub const INDICATOR_COUNT: usize = 6;

/// Chromosome length for the built-in indicator set: one bit pair per
/// indicator plus the trailing label bit.
pub const DEFAULT_CHROMOSOME_LENGTH: usize = 2 * INDICATOR_COUNT + 1;

/// Technical-indicator conditions, in the order they appear in a feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    SmaCrossover,       // SMA(short) > SMA(long)
    EmaCrossover,       // EMA(short) > EMA(long)
    PriceAboveEma,      // EMA(long) < price
    TrendBreak,         // TBR(long) <= 0
    LowVolatility,      // VOL(long) <= threshold
    PositiveMomentum,   // MOM(long) > 0
}

impl Indicator {
    pub fn all() -> [Self; INDICATOR_COUNT] {
        [
            Self::SmaCrossover,
            Self::EmaCrossover,
            Self::PriceAboveEma,
            Self::TrendBreak,
            Self::LowVolatility,
            Self::PositiveMomentum,
        ]
    }

    /// Condition text used when printing a decoded rule
    pub fn condition(&self) -> &'static str {
        match self {
            Self::SmaCrossover => "SMA(SHORT) > SMA(LONG)",
            Self::EmaCrossover => "EMA(SHORT) > EMA(LONG)",
            Self::PriceAboveEma => "EMA < Price",
            Self::TrendBreak => "TBR <= 0",
            Self::LowVolatility => "VOL <= 0.03",
            Self::PositiveMomentum => "MOM > 0",
        }
    }

    /// Name of the boolean column holding this flag during feature extraction
    pub fn column(&self) -> &'static str {
        match self {
            Self::SmaCrossover => "sma_crossover",
            Self::EmaCrossover => "ema_crossover",
            Self::PriceAboveEma => "price_above_ema",
            Self::TrendBreak => "trend_break",
            Self::LowVolatility => "low_volatility",
            Self::PositiveMomentum => "positive_momentum",
        }
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::all().get(position).copied()
    }
}

/// One eligible trading day: the indicator flags plus the forward-looking
/// direction label (true = price higher after the horizon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeatureVector {
    pub flags: Vec<bool>,
    pub label: bool,
}

impl RawFeatureVector {
    pub fn new(flags: Vec<bool>, label: bool) -> Self {
        Self { flags, label }
    }

    /// Build from the 0/1 integer layout used in price-data exports:
    /// every entry but the last is a flag, the last is the label.
    pub fn from_bits(bits: &[u8]) -> Option<Self> {
        let (label, flags) = bits.split_last()?;
        Some(Self {
            flags: flags.iter().map(|&b| b == 1).collect(),
            label: *label == 1,
        })
    }
}
