//! Boundary validators: enforced before an entity crosses a pipeline
//! boundary, not merely documented

use crate::errors::ValidationError;
use crate::types::{parse_timestamp, SalesPoint, Schedule, Wage};

/// Minimum seasonality window of the forecasting service; batches below
/// this floor are rejected client-side before any network call.
pub const MIN_HISTORY_POINTS: usize = 14;

/// Fixed horizon the forecasting service returns: 7 days of hourly points
pub const FORECAST_HORIZON_HOURS: usize = 168;

/// Tolerance when reconciling the server-reported schedule total
/// against the sum of shift costs
pub const COST_TOLERANCE: f64 = 1e-6;

/// Coerce one raw row into a sales point. A failing row is dropped from
/// the batch; it never fails the batch as a whole.
pub fn coerce_sales_point(ds: &str, y_raw: &str) -> Option<SalesPoint> {
    let ds = ds.trim();
    if ds.is_empty() {
        return None;
    }
    let y: f64 = y_raw.trim().parse().ok()?;
    if !y.is_finite() {
        return None;
    }
    Some(SalesPoint {
        ds: ds.to_string(),
        y,
    })
}

/// A sales history is forecast-eligible only with at least
/// [`MIN_HISTORY_POINTS`] valid points
pub fn check_forecast_eligible(history: &[SalesPoint]) -> Result<(), ValidationError> {
    if history.len() < MIN_HISTORY_POINTS {
        return Err(ValidationError::NotEnoughHistory {
            have: history.len(),
            needed: MIN_HISTORY_POINTS,
        });
    }
    Ok(())
}

/// Validate roster editor input and normalize the wage to two decimals
pub fn validate_staff_input(name: &str, wage_raw: &str) -> Result<(String, Wage), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let wage = Wage::parse(wage_raw)?;
    Ok((name.to_string(), wage))
}

/// Validate a schedule returned by the optimization service: every
/// shift must parse and end after it starts, costs must be
/// non-negative, and the reported total must reconcile with the sum of
/// shift costs. The client never silently diverges from the server
/// total; a mismatch rejects the schedule.
pub fn validate_schedule(schedule: &Schedule) -> Result<(), ValidationError> {
    let mut computed = 0.0;
    for shift in &schedule.shifts {
        if shift.cost < 0.0 {
            return Err(ValidationError::NegativeCost { cost: shift.cost });
        }
        let start = parse_timestamp(&shift.start).ok_or_else(|| ValidationError::BadTimestamp {
            value: shift.start.clone(),
        })?;
        let end = parse_timestamp(&shift.end).ok_or_else(|| ValidationError::BadTimestamp {
            value: shift.end.clone(),
        })?;
        if end <= start {
            return Err(ValidationError::ShiftOrder {
                name: shift.name.clone(),
                start: shift.start.clone(),
                end: shift.end.clone(),
            });
        }
        computed += shift.cost;
    }
    if (computed - schedule.total_cost).abs() > COST_TOLERANCE {
        return Err(ValidationError::TotalCostMismatch {
            reported: schedule.total_cost,
            computed,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shift;

    fn shift(name: &str, start: &str, end: &str, cost: f64) -> Shift {
        Shift {
            staff_id: "1".to_string(),
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            cost,
        }
    }

    #[test]
    fn coercion_drops_bad_rows_not_the_batch() {
        assert!(coerce_sales_point("2024-01-01", "5").is_some());
        assert!(coerce_sales_point("", "5").is_none());
        assert!(coerce_sales_point("2024-01-01", "five").is_none());
        assert!(coerce_sales_point("2024-01-01", "NaN").is_none());
    }

    #[test]
    fn thirteen_points_need_one_more() {
        let history: Vec<SalesPoint> = (0..13)
            .map(|i| SalesPoint {
                ds: format!("2024-01-{:02}", i + 1),
                y: 10.0,
            })
            .collect();
        let err = check_forecast_eligible(&history).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotEnoughHistory {
                have: 13,
                needed: 14
            }
        );
        assert!(err.to_string().contains("1 more"));
    }

    #[test]
    fn fourteen_points_are_eligible() {
        let history: Vec<SalesPoint> = (0..14)
            .map(|i| SalesPoint {
                ds: format!("2024-01-{:02}", i + 1),
                y: 10.0,
            })
            .collect();
        assert!(check_forecast_eligible(&history).is_ok());
    }

    #[test]
    fn staff_input_requires_name_and_positive_wage() {
        assert_eq!(
            validate_staff_input("  ", "15"),
            Err(ValidationError::EmptyName)
        );
        assert!(validate_staff_input("Alice", "-1").is_err());
        let (name, wage) = validate_staff_input(" Alice ", "15").unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(wage.to_string(), "15.00");
    }

    #[test]
    fn total_cost_reconciles_within_tolerance() {
        let schedule = Schedule {
            shifts: vec![
                shift("Alice", "2024-01-01T09:00", "2024-01-01T17:00", 100.00),
                shift("Bob", "2024-01-01T12:00", "2024-01-01T18:00", 50.50),
                shift("Cara", "2024-01-02T09:00", "2024-01-02T13:00", 25.25),
            ],
            total_cost: 175.75,
        };
        assert!(validate_schedule(&schedule).is_ok());
    }

    #[test]
    fn total_cost_mismatch_is_rejected() {
        let schedule = Schedule {
            shifts: vec![
                shift("Alice", "2024-01-01T09:00", "2024-01-01T17:00", 100.00),
                shift("Bob", "2024-01-01T12:00", "2024-01-01T18:00", 50.50),
                shift("Cara", "2024-01-02T09:00", "2024-01-02T13:00", 25.25),
            ],
            total_cost: 100.00,
        };
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::TotalCostMismatch { .. })
        ));
    }

    #[test]
    fn shift_must_end_after_it_starts() {
        let schedule = Schedule {
            shifts: vec![shift("Alice", "2024-01-01T17:00", "2024-01-01T09:00", 0.0)],
            total_cost: 0.0,
        };
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::ShiftOrder { .. })
        ));
    }

    #[test]
    fn unparseable_shift_timestamp_is_rejected() {
        let schedule = Schedule {
            shifts: vec![shift("Alice", "whenever", "2024-01-01T17:00", 10.0)],
            total_cost: 10.0,
        };
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::BadTimestamp { .. })
        ));
    }

    #[test]
    fn empty_schedule_reconciles_to_zero() {
        let schedule = Schedule {
            shifts: vec![],
            total_cost: 0.0,
        };
        assert!(validate_schedule(&schedule).is_ok());
    }
}
