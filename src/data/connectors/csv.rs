use crate::config::DatasetConfig;
use crate::error::{Result, TraderulesError};
use polars::prelude::*;
use std::path::Path;
use super::{types::PriceSeries, validator::DataValidator};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load_frame<P: AsRef<Path>>(path: P, has_header: bool) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(has_header)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| TraderulesError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load and validate a price/label CSV file
    pub fn load<P: AsRef<Path>>(path: P, config: &DatasetConfig) -> Result<PriceSeries> {
        let df = Self::load_frame(&path, config.has_header)?;
        log::debug!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.as_ref().display()
        );
        Self::from_frame(&df, config)
    }

    /// Extract prices and labels from the configured column positions
    pub fn from_frame(df: &DataFrame, config: &DatasetConfig) -> Result<PriceSeries> {
        let columns = df.get_columns();
        let price_column = columns.get(config.price_column).ok_or_else(|| {
            TraderulesError::DataLoading(format!(
                "Price column {} out of range ({} columns)",
                config.price_column,
                df.width()
            ))
        })?;
        let label_column = columns.get(config.label_column).ok_or_else(|| {
            TraderulesError::DataLoading(format!(
                "Label column {} out of range ({} columns)",
                config.label_column,
                df.width()
            ))
        })?;

        let prices = Self::read_floats(price_column)?;
        let labels = Self::read_integers(label_column)?;

        DataValidator::validate(&prices, &labels)
    }

    fn read_floats(column: &Column) -> Result<Column> {
        if !matches!(column.dtype(), DataType::String) {
            return Ok(column.cast(&DataType::Float64)?);
        }
        let parsed: Vec<Option<f64>> = column
            .str()?
            .into_iter()
            .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
            .collect();
        Ok(Column::new(column.name().clone(), parsed))
    }

    // Label exports often pad the flag with spaces ("1 "), which polars reads as text
    fn read_integers(column: &Column) -> Result<Column> {
        if !matches!(column.dtype(), DataType::String) {
            return Ok(column.cast(&DataType::Int64)?);
        }
        let parsed: Vec<Option<i64>> = column
            .str()?
            .into_iter()
            .map(|v| v.and_then(|s| s.replace(' ', "").parse::<i64>().ok()))
            .collect();
        Ok(Column::new(column.name().clone(), parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_from_frame_numeric() {
        let df = df! {
            "price" => &[100.0, 101.5, 99.0],
            "increase" => &[1i64, 0, 1],
        }
        .unwrap();

        let series = CsvConnector::from_frame(&df, &DatasetConfig::default()).unwrap();
        assert_eq!(series.prices().unwrap(), vec![Some(100.0), Some(101.5), Some(99.0)]);
        assert_eq!(series.labels().unwrap(), vec![Some(true), Some(false), Some(true)]);
    }

    #[test]
    fn test_from_frame_padded_labels() {
        let df = df! {
            "price" => &[10.0, 11.0],
            "increase" => &[" 1", "0 "],
        }
        .unwrap();

        let series = CsvConnector::from_frame(&df, &DatasetConfig::default()).unwrap();
        assert_eq!(series.labels().unwrap(), vec![Some(true), Some(false)]);
    }

    #[test]
    fn test_missing_label_column() {
        let df = df! {
            "price" => &[10.0, 11.0],
        }
        .unwrap();

        let result = CsvConnector::from_frame(&df, &DatasetConfig::default());
        assert!(matches!(result, Err(TraderulesError::DataLoading(_))));
    }

    #[test]
    fn test_load_headerless_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PriceData.csv");
        std::fs::write(&path, "100.25,1\n101.00,0\n102.50,1\n").unwrap();

        let series = CsvConnector::load(&path, &DatasetConfig::default()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.prices().unwrap()[2], Some(102.5));
        assert_eq!(series.labels().unwrap(), vec![Some(true), Some(false), Some(true)]);
    }
}
