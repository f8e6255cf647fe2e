//! Shared types for the shift scheduling client
//!
//! Contains the domain entities the client persists, the wire contracts
//! exchanged with the forecasting and optimization services, and the
//! validators enforced before an entity crosses a pipeline boundary.
//! Pure data and checks only; all I/O lives in the client crate.

pub mod contracts;
pub mod errors;
pub mod types;
pub mod validation;

pub use contracts::{DemandPoint, ForecastRequest, ForecastResponse, OptimizeRequest, StaffPayload};
pub use errors::ValidationError;
pub use types::{
    parse_timestamp, DatasetKey, ForecastInterval, SalesPoint, Schedule, Shift, Staff, Wage,
};
pub use validation::{
    check_forecast_eligible, coerce_sales_point, validate_schedule, validate_staff_input,
    COST_TOLERANCE, FORECAST_HORIZON_HOURS, MIN_HISTORY_POINTS,
};
