pub mod momentum;
pub mod trend;
pub mod volatility;

pub use trend::{SMA, EMA, TBR};
pub use momentum::MOM;
pub use volatility::VOL;
