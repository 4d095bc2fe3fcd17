use crate::functions::traits::{round2, VectorizedIndicator};
use polars::prelude::*;

// --- MOM (Momentum) ---
/// Price change over `period` days: `p[t] - p[t-period]`
pub struct MOM {
    pub period: usize,
}

impl MOM {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl VectorizedIndicator for MOM {
    fn alias(&self) -> &'static str {
        "MOM"
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn calculate_vectorized(&self, price: Expr) -> Expr {
        round2(price.clone() - price.shift(lit(self.period as i64)))
    }
}
