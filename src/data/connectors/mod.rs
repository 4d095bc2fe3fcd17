mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{PriceSeries, LABEL_COLUMN, PRICE_COLUMN};
pub use validator::DataValidator;
