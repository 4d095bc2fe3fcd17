pub mod connectors;

pub use connectors::{CsvConnector, DataValidator, PriceSeries, LABEL_COLUMN, PRICE_COLUMN};
