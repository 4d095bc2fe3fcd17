use crate::functions::traits::{fixed_window, round2, VectorizedIndicator};
use super::trend::SMA;
use polars::prelude::*;

// --- VOL (Relative Volatility) ---
/// Sample standard deviation of the `period` prices before `t`, divided by
/// their simple average. Needs `period >= 2`.
pub struct VOL {
    pub period: usize,
}

impl VOL {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl VectorizedIndicator for VOL {
    fn alias(&self) -> &'static str {
        "VOL"
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn calculate_vectorized(&self, price: Expr) -> Expr {
        // Sample std (ddof = 1) over the same n days [t-n, t-1] the SMA averages.
        // Not sqrt(sum / n - 1) over n + 1 days.
        let deviation = price
            .clone()
            .rolling_std(fixed_window(self.period))
            .shift(lit(1));
        round2(deviation / SMA::new(self.period).calculate_vectorized(price))
    }
}
