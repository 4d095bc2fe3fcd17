pub mod base;
pub mod simple;
pub mod types;

pub use base::DataSplitter;
pub use simple::SimpleSplitter;
pub use types::{DataSplit, SplitConfig};
