use crate::config::FeatureConfig;
use crate::data::{DataValidator, PriceSeries, LABEL_COLUMN, PRICE_COLUMN};
use crate::error::TraderulesError;
use crate::functions::indicators::{EMA, MOM, SMA, TBR, VOL};
use crate::functions::VectorizedIndicator;
use crate::types::{Indicator, RawFeatureVector};
use polars::prelude::*;

pub struct FeatureEngineer {
    config: FeatureConfig,
    sma_short: SMA,
    sma_long: SMA,
    ema_short: EMA,
    ema_long: EMA,
    trend_break: TBR,
    volatility: VOL,
    momentum: MOM,
}

impl FeatureEngineer {
    pub fn new(config: FeatureConfig) -> Self {
        Self {
            sma_short: SMA::new(config.short_window),
            sma_long: SMA::new(config.long_window),
            ema_short: EMA::new(config.short_window),
            ema_long: EMA::new(config.long_window),
            trend_break: TBR::new(config.long_window),
            volatility: VOL::new(config.long_window),
            momentum: MOM::new(config.long_window),
            config,
        }
    }

    /// Range of day indices that have full lookback history and a label
    /// horizon inside the series.
    pub fn eligible_days(&self, len: usize) -> std::ops::Range<usize> {
        let first = self.config.lookback();
        let end = len.saturating_sub(self.config.horizon);
        first..end.max(first)
    }

    /// One boolean expression per indicator, in encoding order, each aliased
    /// to [`Indicator::column`].
    pub fn flag_expressions(&self) -> Vec<Expr> {
        let price = col(PRICE_COLUMN);
        let ema_long = self.ema_long.calculate_vectorized(price.clone());

        let flags = [
            self.sma_short
                .calculate_vectorized(price.clone())
                .gt(self.sma_long.calculate_vectorized(price.clone())),
            self.ema_short
                .calculate_vectorized(price.clone())
                .gt(ema_long.clone()),
            ema_long.lt(price.clone()),
            self.trend_break
                .calculate_vectorized(price.clone())
                .lt_eq(lit(0.0)),
            self.volatility
                .calculate_vectorized(price.clone())
                .lt_eq(lit(self.config.volatility_threshold)),
            self.momentum.calculate_vectorized(price).gt(lit(0.0)),
        ];

        flags
            .into_iter()
            .zip(Indicator::all())
            .map(|(flag, indicator)| flag.alias(indicator.column()))
            .collect()
    }

    /// Turn a price series into one feature vector per eligible day
    pub fn extract(&self, series: &PriceSeries) -> Result<Vec<RawFeatureVector>, TraderulesError> {
        let min_rows = self.config.lookback() + self.config.horizon + 1;
        DataValidator::validate_minimum_rows(series, min_rows)?;
        let days = self.eligible_days(series.len());

        let mut selection = self.flag_expressions();
        selection.push(col(LABEL_COLUMN));
        let frame = series
            .frame()
            .clone()
            .lazy()
            .select(selection)
            .collect()?
            .slice(days.start as i64, days.len());

        let flag_columns = Indicator::all()
            .iter()
            .map(|indicator| frame.column(indicator.column()).and_then(|c| c.bool().cloned()))
            .collect::<PolarsResult<Vec<BooleanChunked>>>()?;
        let labels = frame.column(LABEL_COLUMN)?.bool()?;

        let mut features = Vec::with_capacity(frame.height());
        for row in 0..frame.height() {
            let flags: Option<Vec<bool>> = flag_columns.iter().map(|column| column.get(row)).collect();
            match (flags, labels.get(row)) {
                (Some(flags), Some(label)) => features.push(RawFeatureVector::new(flags, label)),
                _ => log::debug!("Skipping day {}: indicator undefined", days.start + row),
            }
        }

        if features.is_empty() {
            return Err(TraderulesError::Validation(
                "No day produced a complete feature vector".to_string(),
            ));
        }
        log::debug!("Extracted {} feature vectors from {} days", features.len(), series.len());
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INDICATOR_COUNT;

    fn small_config() -> FeatureConfig {
        FeatureConfig {
            short_window: 2,
            long_window: 4,
            horizon: 3,
            volatility_threshold: 0.03,
        }
    }

    #[test]
    fn test_eligible_days() {
        let engineer = FeatureEngineer::new(small_config());
        assert_eq!(engineer.eligible_days(20), 8..17);
        assert!(engineer.eligible_days(10).is_empty());
    }

    #[test]
    fn test_series_too_short() {
        let engineer = FeatureEngineer::new(small_config());
        let series = PriceSeries::new(vec![1.0; 10], vec![true; 10]).unwrap();
        assert!(matches!(
            engineer.extract(&series),
            Err(TraderulesError::Validation(_))
        ));
    }

    #[test]
    fn test_rising_series_flags() {
        let engineer = FeatureEngineer::new(small_config());
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let labels = vec![true; 20];
        let series = PriceSeries::new(prices, labels).unwrap();

        let features = engineer.extract(&series).unwrap();
        assert_eq!(features.len(), 9);
        for vector in &features {
            assert_eq!(vector.flags.len(), INDICATOR_COUNT);
            assert!(vector.label);
            // short averages lead long averages and price sits above them
            assert!(vector.flags[0]);
            assert!(vector.flags[1]);
            assert!(vector.flags[2]);
            // a new high every day never breaks the trend downwards
            assert!(!vector.flags[3]);
            assert!(vector.flags[5]);
        }
    }

    #[test]
    fn test_labels_follow_day_index() {
        let engineer = FeatureEngineer::new(small_config());
        let prices = vec![50.0; 20];
        let labels: Vec<bool> = (0..20).map(|i| i % 2 == 0).collect();
        let series = PriceSeries::new(prices, labels).unwrap();

        let features = engineer.extract(&series).unwrap();
        // first eligible day is 8
        assert!(features[0].label);
        assert!(!features[1].label);
        // flat prices: no crossover, no momentum, zero volatility, TBR == 0
        assert_eq!(features[0].flags, vec![false, false, false, true, true, false]);
    }
}
