use crate::error::Result;
use polars::prelude::*;

/// Float64 close price column of a [`PriceSeries`]
pub const PRICE_COLUMN: &str = "price";
/// Boolean direction label column of a [`PriceSeries`]
pub const LABEL_COLUMN: &str = "label";

/// Daily closing prices with the pre-computed direction label for each day.
///
/// `label[t]` is true when the price `horizon` days after `t` is higher
/// than `price[t]`.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    frame: DataFrame,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>, labels: Vec<bool>) -> Result<Self> {
        let frame = DataFrame::new(vec![
            Column::new(PRICE_COLUMN.into(), prices),
            Column::new(LABEL_COLUMN.into(), labels),
        ])?;
        Ok(Self { frame })
    }

    /// Wrap a frame that already has the price and label columns
    pub(crate) fn from_validated(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn prices(&self) -> Result<Vec<Option<f64>>> {
        Ok(self.frame.column(PRICE_COLUMN)?.f64()?.into_iter().collect())
    }

    pub fn labels(&self) -> Result<Vec<Option<bool>>> {
        Ok(self.frame.column(LABEL_COLUMN)?.bool()?.into_iter().collect())
    }
}
