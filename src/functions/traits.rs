use crate::data::PRICE_COLUMN;
use crate::error::Result;
use polars::prelude::*;

/// An indicator computed over the whole price column at once.
///
/// Row `t` of the resulting expression is the indicator value at day `t`,
/// built from the prices before it. Rows without enough history are null.
pub trait VectorizedIndicator: Send + Sync {
    fn alias(&self) -> &'static str;

    /// Days of history required before the first defined value
    fn lookback(&self) -> usize;

    fn calculate_vectorized(&self, price: Expr) -> Expr;
}

/// Round half-up to two decimals, the precision indicator comparisons use.
pub fn round2(value: Expr) -> Expr {
    (value * lit(100.0) + lit(0.5)).floor() / lit(100.0)
}

/// Full window of `period` rows ending at the current row
pub(crate) fn fixed_window(period: usize) -> RollingOptionsFixedWindow {
    RollingOptionsFixedWindow {
        window_size: period,
        min_periods: period,
        ..Default::default()
    }
}

/// Evaluate an indicator over a bare list of prices
pub fn evaluate<I: VectorizedIndicator + ?Sized>(
    indicator: &I,
    prices: &[f64],
) -> Result<Vec<Option<f64>>> {
    let frame = DataFrame::new(vec![Column::new(PRICE_COLUMN.into(), prices)])?;
    let values = frame
        .lazy()
        .select([indicator
            .calculate_vectorized(col(PRICE_COLUMN))
            .alias(indicator.alias())])
        .collect()?;
    Ok(values.column(indicator.alias())?.f64()?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        let frame = df! { "x" => &[0.125, -0.125, 2.344, -0.016] }.unwrap();
        let rounded = frame
            .lazy()
            .select([round2(col("x")).alias("x")])
            .collect()
            .unwrap();
        let values: Vec<Option<f64>> = rounded.column("x").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(0.13), Some(-0.12), Some(2.34), Some(-0.02)]);
    }
}
