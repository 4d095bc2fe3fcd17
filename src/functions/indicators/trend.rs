use crate::functions::traits::{fixed_window, round2, VectorizedIndicator};
use polars::prelude::*;

// --- SMA ---
/// Mean of the `period` prices before `t`
pub struct SMA {
    pub period: usize,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl VectorizedIndicator for SMA {
    fn alias(&self) -> &'static str {
        "SMA"
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn calculate_vectorized(&self, price: Expr) -> Expr {
        round2(price.rolling_mean(fixed_window(self.period)).shift(lit(1)))
    }
}

// --- EMA ---
/// Exponential average over the `period` days before `t`, seeded with the
/// simple average of the `period` days before that.
///
/// The seeded recursion `ema = p * k + ema * (1 - k)` over `p[t-n+1..t-1]`
/// unrolls into `seed * (1-k)^(n-1)` plus a weighted rolling sum of those
/// `n - 1` prices, newest weighted `k`.
pub struct EMA {
    pub period: usize,
}

impl EMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Oldest first, as polars applies window weights
    fn smoothing_weights(&self) -> Vec<f64> {
        let k = self.multiplier();
        let steps = self.period - 1;
        (0..steps)
            .map(|i| k * (1.0 - k).powi((steps - 1 - i) as i32))
            .collect()
    }
}

impl VectorizedIndicator for EMA {
    fn alias(&self) -> &'static str {
        "EMA"
    }

    fn lookback(&self) -> usize {
        2 * self.period
    }

    fn calculate_vectorized(&self, price: Expr) -> Expr {
        let seed = SMA::new(self.period)
            .calculate_vectorized(price.clone())
            .shift(lit(self.period as i64));
        if self.period < 2 {
            return seed;
        }

        let steps = self.period - 1;
        let decayed_seed = seed * lit((1.0 - self.multiplier()).powi(steps as i32));
        let smoothed = price
            .rolling_sum(RollingOptionsFixedWindow {
                weights: Some(self.smoothing_weights()),
                ..fixed_window(steps)
            })
            .shift(lit(1));

        round2(decayed_seed + smoothed)
    }
}

// --- TBR (Trend Break) ---
/// Distance of today's price from the highest price of the window, as a fraction
pub struct TBR {
    pub period: usize,
}

impl TBR {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl VectorizedIndicator for TBR {
    fn alias(&self) -> &'static str {
        "TBR"
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn calculate_vectorized(&self, price: Expr) -> Expr {
        let high = price.clone().rolling_max(fixed_window(self.period)).shift(lit(1));
        round2((price - high.clone()) / high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::traits::evaluate;

    #[test]
    fn test_sma_excludes_current_day() {
        let prices = [1.0, 2.0, 3.0, 4.0, 100.0];
        let sma = evaluate(&SMA::new(3), &prices).unwrap();
        // (2 + 3 + 4) / 3
        assert_eq!(sma[4], Some(3.0));
        assert_eq!(sma[2], None);
    }

    #[test]
    fn test_ema_constant_series() {
        let ema = evaluate(&EMA::new(3), &[5.0; 10]).unwrap();
        assert_eq!(ema[6], Some(5.0));
        assert_eq!(ema[5], None);
    }

    #[test]
    fn test_ema_seed_and_smoothing() {
        // seed = SMA(2) at t=2 -> (1 + 2) / 2 = 1.5
        // k = 2/3, one smoothing step over prices[3]: 7 * 2/3 + 1.5 * 1/3 = 5.1667
        let prices = [1.0, 2.0, 4.0, 7.0, 0.0];
        assert_eq!(evaluate(&EMA::new(2), &prices).unwrap()[4], Some(5.17));
    }

    #[test]
    fn test_ema_matches_recursive_definition() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 11) as f64 * 0.5).collect();
        let period = 5;
        let k = 2.0 / (period as f64 + 1.0);
        let ema = evaluate(&EMA::new(period), &prices).unwrap();
        let sma = evaluate(&SMA::new(period), &prices).unwrap();

        for t in 2 * period..prices.len() {
            let seed = sma[t - period].unwrap();
            let expected = prices[t - period + 1..t]
                .iter()
                .fold(seed, |acc, &p| p * k + acc * (1.0 - k));
            let actual = ema[t].unwrap();
            assert!((actual - expected).abs() <= 0.005 + 1e-9, "t={} {} vs {}", t, actual, expected);
        }
    }

    #[test]
    fn test_trend_break() {
        let prices = [10.0, 12.0, 8.0, 9.0];
        // max of [10, 12, 8] is 12 -> (9 - 12) / 12 = -0.25
        assert_eq!(evaluate(&TBR::new(3), &prices).unwrap()[3], Some(-0.25));
    }
}
