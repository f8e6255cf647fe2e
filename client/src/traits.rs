//! Service seams with mockall annotations for testing
//!
//! The pipelines depend on these traits rather than on concrete
//! services, so tests can swap in mocks and assert, for example, that
//! an ineligible history never reaches the network.

use async_trait::async_trait;

use crate::error::{ApiFailure, StoreError};
use shared::{DatasetKey, ForecastRequest, ForecastResponse, OptimizeRequest, Schedule};

/// Key/value persistence: one JSON document per dataset key
#[mockall::automock]
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Read the document stored under `key`. `None` means no data yet,
    /// which is a valid state and never an error.
    async fn get(&self, key: DatasetKey) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `key` in full
    async fn set(&self, key: DatasetKey, json: String) -> Result<(), StoreError>;

    /// Delete the document stored under `key`; deleting an absent key
    /// is a no-op
    async fn remove(&self, key: DatasetKey) -> Result<(), StoreError>;
}

/// The external forecasting and optimization services. Both calls are
/// idempotent from the client's perspective; retrying a failure is
/// safe.
#[mockall::automock]
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    async fn health(&self) -> Result<(), ApiFailure>;

    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResponse, ApiFailure>;

    async fn optimize(&self, request: &OptimizeRequest) -> Result<Schedule, ApiFailure>;
}
