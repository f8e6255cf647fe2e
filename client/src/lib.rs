//! Scheduling client core
//!
//! Captures a staff roster and historical sales, obtains a demand
//! forecast and a cost-optimal shift assignment from the external
//! scheduling services, and projects the persisted schedule onto a
//! calendar. The store is the single source of truth between launches;
//! everything in memory is a cache re-hydrated on demand.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;

// Re-export main types
pub use core::calendar;
pub use core::{parse_sales_csv, ForecastPipeline, ManualHistory, OptimizationPipeline, RosterPipeline};
pub use error::{ApiFailure, ClientError, ClientResult, StoreError};
pub use services::{HttpSchedulingApi, JsonFileStore};
pub use state::{DatasetLocks, OnboardingState};
pub use traits::{DatasetStore, SchedulingApi};
