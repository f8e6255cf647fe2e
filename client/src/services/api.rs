//! HTTP client for the forecasting and optimization services
//!
//! Plain JSON request/response against a configured base URL. Every
//! call is bounded by a client-wide timeout sized for the services'
//! forecasting/optimization workloads; a body that fails to decode is
//! reported as [`ApiFailure::InvalidResponse`], distinct from transport
//! trouble.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiFailure;
use crate::traits::SchedulingApi;
use shared::{ForecastRequest, ForecastResponse, OptimizeRequest, Schedule};

// 30s covers the expected latency of the remote solver runs
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpSchedulingApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpSchedulingApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiFailure> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiFailure>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::SERVICE_UNAVAILABLE => ApiFailure::ServiceUnavailable,
                _ => ApiFailure::ServerError(status.to_string()),
            });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| ApiFailure::InvalidResponse(e.to_string()))
    }
}

fn classify_send_error(e: reqwest::Error) -> ApiFailure {
    if e.is_timeout() {
        ApiFailure::Timeout
    } else {
        ApiFailure::NetworkError(e.to_string())
    }
}

#[async_trait]
impl SchedulingApi for HttpSchedulingApi {
    async fn health(&self) -> Result<(), ApiFailure> {
        let response = self
            .http
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(classify_send_error)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiFailure::ServerError(response.status().to_string()))
        }
    }

    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResponse, ApiFailure> {
        debug!(points = request.history.len(), "submitting sales history");
        self.post_json("/forecast-json", request).await
    }

    async fn optimize(&self, request: &OptimizeRequest) -> Result<Schedule, ApiFailure> {
        debug!(
            staff = request.staff.len(),
            hours = request.forecast.len(),
            "submitting optimization request"
        );
        self.post_json("/optimize-json", request).await
    }
}
