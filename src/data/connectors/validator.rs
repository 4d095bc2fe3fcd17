use crate::error::{Result, TraderulesError};
use polars::prelude::*;
use super::types::{PriceSeries, LABEL_COLUMN, PRICE_COLUMN};

pub struct DataValidator;

impl DataValidator {
    /// Check a raw price column and 0/1 label column and combine them into a price series
    pub fn validate(prices: &Column, labels: &Column) -> Result<PriceSeries> {
        if prices.is_empty() {
            return Err(TraderulesError::DataLoading("Price data is empty".to_string()));
        }
        if prices.len() != labels.len() {
            return Err(TraderulesError::DataLoading(format!(
                "Column length mismatch: {} prices, {} labels",
                prices.len(),
                labels.len()
            )));
        }

        let prices = prices.cast(&DataType::Float64)?;
        let invalid_price = prices
            .f64()?
            .into_iter()
            .enumerate()
            .find(|(_, price)| !matches!(price, Some(p) if p.is_finite() && *p > 0.0));
        if let Some((row, price)) = invalid_price {
            return Err(TraderulesError::DataLoading(match price {
                Some(p) => format!("Invalid price at row {}: {}", row, p),
                None => format!("Missing or non-numeric price at row {}", row),
            }));
        }

        let labels = labels.cast(&DataType::Int64)?;
        let invalid_label = labels
            .i64()?
            .into_iter()
            .enumerate()
            .find(|(_, label)| !matches!(label, Some(0) | Some(1)));
        if let Some((row, label)) = invalid_label {
            return Err(TraderulesError::DataLoading(match label {
                Some(other) => format!("Label at row {} must be 0 or 1, found {}", row, other),
                None => format!("Missing label at row {}", row),
            }));
        }

        let frame = DataFrame::new(vec![
            prices.with_name(PRICE_COLUMN.into()),
            labels.cast(&DataType::Boolean)?.with_name(LABEL_COLUMN.into()),
        ])?;
        Ok(PriceSeries::from_validated(frame))
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(series: &PriceSeries, min_rows: usize) -> Result<()> {
        if series.len() < min_rows {
            return Err(TraderulesError::Validation(format!(
                "Insufficient data: {} rows, minimum {} required",
                series.len(),
                min_rows
            )));
        }
        Ok(())
    }
}
