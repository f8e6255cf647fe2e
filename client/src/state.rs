//! Application state resolved at startup and per-dataset write guards

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{ClientError, ClientResult};
use crate::services::store::{load_dataset, save_dataset};
use crate::traits::DatasetStore;
use shared::DatasetKey;

/// First-run gate, resolved once from the store at startup and passed
/// down as configuration. Absent or false both mean first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    FirstRun,
    Completed,
}

impl OnboardingState {
    pub async fn resolve<S: DatasetStore + ?Sized>(store: &S) -> ClientResult<Self> {
        let onboarded: Option<bool> = load_dataset(store, DatasetKey::Onboarded).await?;
        Ok(match onboarded {
            Some(true) => OnboardingState::Completed,
            _ => OnboardingState::FirstRun,
        })
    }

    /// Record that onboarding finished. Set once, never cleared.
    pub async fn complete<S: DatasetStore + ?Sized>(store: &S) -> ClientResult<()> {
        save_dataset(store, DatasetKey::Onboarded, &true).await
    }
}

/// One writer per dataset key. A pipeline takes its key's guard before
/// any write; a contended guard means an operation on that dataset is
/// already in flight and the new trigger is rejected rather than
/// queued, so two operations can never race to overwrite a slot.
#[derive(Debug, Default)]
pub struct DatasetLocks {
    staff: Mutex<()>,
    forecast: Mutex<()>,
    schedule: Mutex<()>,
    onboarded: Mutex<()>,
}

impl DatasetLocks {
    pub fn acquire(
        &self,
        key: DatasetKey,
        operation: &'static str,
    ) -> ClientResult<MutexGuard<'_, ()>> {
        let lock = match key {
            DatasetKey::Staff => &self.staff,
            DatasetKey::Forecast => &self.forecast,
            DatasetKey::Schedule => &self.schedule,
            DatasetKey::Onboarded => &self.onboarded,
        };
        lock.try_lock().map_err(|_| ClientError::Busy { operation })
    }
}
