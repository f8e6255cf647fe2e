//! The scheduling data pipelines and the calendar projection

pub mod calendar;
pub mod forecast;
pub mod ingest;
pub mod optimize;
pub mod roster;

pub use forecast::ForecastPipeline;
pub use ingest::{parse_sales_csv, ManualHistory};
pub use optimize::OptimizationPipeline;
pub use roster::RosterPipeline;
