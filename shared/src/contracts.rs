//! Request and response bodies for the external scheduling services
//!
//! Both services speak JSON over a plain request/response transport and
//! are idempotent from the client's perspective. The bodies are typed
//! here and decoded at the boundary; nothing downstream handles raw
//! JSON.

use serde::{Deserialize, Serialize};

use crate::types::{ForecastInterval, SalesPoint, Staff};

/// Body of `POST /forecast-json`; the history must already have passed
/// the forecast-eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub history: Vec<SalesPoint>,
}

/// Response of the forecasting service: a fixed horizon of hourly
/// intervals (168 points in practice)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub intervals: Vec<ForecastInterval>,
}

/// One `time`/`demand` pair of the optimization request. Confidence
/// bounds are deliberately not part of this payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    pub time: String,
    pub demand: f64,
}

impl From<&ForecastInterval> for DemandPoint {
    fn from(interval: &ForecastInterval) -> Self {
        Self {
            time: interval.time.clone(),
            demand: interval.demand,
        }
    }
}

/// Staff entry of the optimization request, wage normalized to numeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPayload {
    pub id: String,
    pub name: String,
    pub wage: f64,
    pub skill: String,
}

impl From<&Staff> for StaffPayload {
    fn from(staff: &Staff) -> Self {
        Self {
            id: staff.id.clone(),
            name: staff.name.clone(),
            wage: staff.wage.as_f64(),
            skill: staff.skill.clone(),
        }
    }
}

/// Body of `POST /optimize-json`. The response decodes directly into
/// [`crate::types::Schedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub forecast: Vec<DemandPoint>,
    pub staff: Vec<StaffPayload>,
}

impl OptimizeRequest {
    pub fn build(staff: &[Staff], forecast: &[ForecastInterval]) -> Self {
        Self {
            forecast: forecast.iter().map(DemandPoint::from).collect(),
            staff: staff.iter().map(StaffPayload::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Wage;
    use serde_json::json;

    #[test]
    fn optimize_request_shape_is_exact() {
        let staff = vec![Staff {
            id: "1".to_string(),
            name: "Alice".to_string(),
            wage: Wage::parse("15.00").unwrap(),
            skill: "bar".to_string(),
        }];
        let forecast = vec![ForecastInterval {
            time: "2024-01-01T09:00".to_string(),
            demand: 5.0,
            confidence_low: 4.0,
            confidence_high: 6.0,
        }];

        let request = OptimizeRequest::build(&staff, &forecast);
        let body = serde_json::to_value(&request).unwrap();

        // confidence bounds and any id beyond staff_id are excluded
        assert_eq!(
            body,
            json!({
                "forecast": [{"time": "2024-01-01T09:00", "demand": 5.0}],
                "staff": [{"id": "1", "name": "Alice", "wage": 15.0, "skill": "bar"}],
            })
        );
    }

    #[test]
    fn forecast_response_decodes_service_payload() {
        let body = json!({
            "intervals": [
                {"time": "2024-01-01T09:00", "demand": 5.2, "confidence_low": 4.1, "confidence_high": 6.3}
            ]
        });
        let response: ForecastResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.intervals.len(), 1);
        assert_eq!(response.intervals[0].demand, 5.2);
    }

    #[test]
    fn forecast_response_rejects_missing_fields() {
        let body = json!({"intervals": [{"time": "2024-01-01T09:00"}]});
        assert!(serde_json::from_value::<ForecastResponse>(body).is_err());
    }
}
