//! Optimization pipeline: stored roster + stored forecast in, persisted
//! schedule out
//!
//! Reads the staff and forecast slots (never writes them), builds the
//! optimization request from normalized wages and `time`/`demand` pairs
//! only, and replaces the stored schedule with the validated result. At
//! most one optimization is in flight at a time; a failed call leaves
//! the prior schedule untouched.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::{ClientError, ClientResult};
use crate::services::store::{export_json, load_dataset, save_dataset};
use crate::state::DatasetLocks;
use crate::traits::{DatasetStore, SchedulingApi};
use shared::{
    validate_schedule, DatasetKey, ForecastInterval, OptimizeRequest, Schedule, Staff,
    ValidationError,
};

pub struct OptimizationPipeline<S, A> {
    store: Arc<S>,
    api: Arc<A>,
    locks: Arc<DatasetLocks>,
}

impl<S: DatasetStore, A: SchedulingApi> OptimizationPipeline<S, A> {
    pub fn new(store: Arc<S>, api: Arc<A>, locks: Arc<DatasetLocks>) -> Self {
        Self { store, api, locks }
    }

    pub async fn run(&self) -> ClientResult<Schedule> {
        let _guard = self.locks.acquire(DatasetKey::Schedule, "optimization")?;

        let staff: Vec<Staff> = load_dataset(self.store.as_ref(), DatasetKey::Staff)
            .await?
            .unwrap_or_default();
        if staff.is_empty() {
            return Err(ValidationError::EmptyRoster.into());
        }
        let forecast: Vec<ForecastInterval> =
            load_dataset(self.store.as_ref(), DatasetKey::Forecast)
                .await?
                .unwrap_or_default();
        if forecast.is_empty() {
            return Err(ValidationError::EmptyForecast.into());
        }

        let request = OptimizeRequest::build(&staff, &forecast);
        let schedule = self.api.optimize(&request).await?;

        // reject rather than persist a schedule whose shifts or total
        // do not reconcile
        validate_schedule(&schedule)?;
        save_dataset(self.store.as_ref(), DatasetKey::Schedule, &schedule).await?;

        info!(
            shifts = schedule.shifts.len(),
            total_cost = schedule.total_cost,
            "schedule persisted"
        );
        Ok(schedule)
    }

    pub async fn load(&self) -> ClientResult<Option<Schedule>> {
        load_dataset(self.store.as_ref(), DatasetKey::Schedule).await
    }

    /// Drop the stored schedule. Fire-and-forget; there is no undo.
    pub async fn clear(&self) -> ClientResult<()> {
        let _guard = self.locks.acquire(DatasetKey::Schedule, "optimization")?;
        self.store
            .remove(DatasetKey::Schedule)
            .await
            .map_err(|e| ClientError::storage(DatasetKey::Schedule, e))?;
        info!("schedule cleared");
        Ok(())
    }

    /// Dump the persisted schedule as pretty-printed JSON
    pub async fn export(&self, path: &Path) -> ClientResult<Schedule> {
        let schedule = self.load().await?.ok_or(ValidationError::NoSchedule)?;
        export_json(path, &schedule)
            .await
            .map_err(|e| ClientError::storage(DatasetKey::Schedule, e.into()))?;
        info!(path = %path.display(), "schedule exported");
        Ok(schedule)
    }
}
