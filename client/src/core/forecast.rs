//! Forecast pipeline: validated sales history in, persisted demand
//! curve out
//!
//! Single-flight per invocation: the forecast write guard is taken for
//! the whole operation, so a second trigger while one call is
//! outstanding is rejected with `Busy`. A failed call leaves the
//! previously persisted forecast untouched.

use std::sync::Arc;

use tracing::info;

use crate::core::ingest::ManualHistory;
use crate::error::ClientResult;
use crate::services::store::{load_dataset, save_dataset};
use crate::state::DatasetLocks;
use crate::traits::{DatasetStore, SchedulingApi};
use shared::{check_forecast_eligible, DatasetKey, ForecastInterval, ForecastRequest, SalesPoint};

pub struct ForecastPipeline<S, A> {
    store: Arc<S>,
    api: Arc<A>,
    locks: Arc<DatasetLocks>,
}

impl<S: DatasetStore, A: SchedulingApi> ForecastPipeline<S, A> {
    pub fn new(store: Arc<S>, api: Arc<A>, locks: Arc<DatasetLocks>) -> Self {
        Self { store, api, locks }
    }

    /// Submit a sales history and persist the returned demand curve,
    /// replacing any prior forecast in full. The eligibility floor is
    /// enforced before any network call; intervals without positive
    /// demand are discarded before persisting.
    pub async fn generate(&self, history: &[SalesPoint]) -> ClientResult<Vec<ForecastInterval>> {
        let _guard = self.locks.acquire(DatasetKey::Forecast, "forecast")?;
        check_forecast_eligible(history)?;

        let request = ForecastRequest {
            history: history.to_vec(),
        };
        let response = self.api.forecast(&request).await?;

        let received = response.intervals.len();
        let intervals: Vec<ForecastInterval> = response
            .intervals
            .into_iter()
            .filter(|interval| interval.demand > 0.0)
            .collect();
        save_dataset(self.store.as_ref(), DatasetKey::Forecast, &intervals).await?;

        info!(received, kept = intervals.len(), "forecast persisted");
        Ok(intervals)
    }

    /// Manual-entry path: the accumulator is cleared only after the
    /// submission succeeded
    pub async fn generate_from_manual(
        &self,
        manual: &mut ManualHistory,
    ) -> ClientResult<Vec<ForecastInterval>> {
        let intervals = self.generate(manual.points()).await?;
        manual.clear();
        Ok(intervals)
    }

    pub async fn load(&self) -> ClientResult<Option<Vec<ForecastInterval>>> {
        load_dataset(self.store.as_ref(), DatasetKey::Forecast).await
    }

    /// Drop the stored forecast. Fire-and-forget; there is no undo.
    pub async fn clear(&self) -> ClientResult<()> {
        let _guard = self.locks.acquire(DatasetKey::Forecast, "forecast")?;
        self.store
            .remove(DatasetKey::Forecast)
            .await
            .map_err(|e| crate::error::ClientError::storage(DatasetKey::Forecast, e))?;
        info!("forecast cleared");
        Ok(())
    }
}
