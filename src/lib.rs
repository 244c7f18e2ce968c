pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod observability;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod types;

pub use config::Config;
pub use error::{CleanerError, Result};
pub use pipeline::{BatchSummary, CleanOutput, Pipeline};
pub use report::RunReport;
