//! Validation errors raised before any service call is attempted
//!
//! These are the caller-correctable failures of the error taxonomy:
//! each one carries enough detail for the surface to tell the user what
//! to fix. Transport and storage failures live in the client crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("staff name must not be empty")]
    EmptyName,

    #[error("hourly wage must be a positive number, got '{input}'")]
    InvalidWage { input: String },

    #[error("invalid sales point: date '{ds}', value '{y}'")]
    InvalidSalesPoint { ds: String, y: String },

    #[error("need {} more sales point(s): have {have}, forecasting requires {needed}", .needed - .have)]
    NotEnoughHistory { have: usize, needed: usize },

    #[error("no staff on the roster; add staff before optimizing")]
    EmptyRoster,

    #[error("no forecast available; generate a forecast before optimizing")]
    EmptyForecast,

    #[error("no staff member with id '{id}'")]
    UnknownStaff { id: String },

    #[error("no schedule persisted; run optimization first")]
    NoSchedule,

    #[error("unparseable timestamp '{value}'")]
    BadTimestamp { value: String },

    #[error("shift for '{name}' ends at or before it starts ({start} .. {end})")]
    ShiftOrder {
        name: String,
        start: String,
        end: String,
    },

    #[error("shift cost must not be negative, got {cost}")]
    NegativeCost { cost: f64 },

    #[error("schedule total {reported} does not match the sum of shift costs {computed}")]
    TotalCostMismatch { reported: f64, computed: f64 },
}
