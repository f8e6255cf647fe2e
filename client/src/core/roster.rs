//! Roster management: staff CRUD over the persisted staff list
//!
//! The roster is stored newest-first, matching the order the editor
//! shows it in. Every write validates its input, holds the staff write
//! guard, and replaces the stored list in full.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::ClientResult;
use crate::services::store::{load_dataset, save_dataset};
use crate::state::DatasetLocks;
use crate::traits::DatasetStore;
use shared::{validate_staff_input, DatasetKey, Staff, ValidationError};

const DEFAULT_SKILL: &str = "general";

pub struct RosterPipeline<S: DatasetStore> {
    store: Arc<S>,
    locks: Arc<DatasetLocks>,
}

impl<S: DatasetStore> RosterPipeline<S> {
    pub fn new(store: Arc<S>, locks: Arc<DatasetLocks>) -> Self {
        Self { store, locks }
    }

    /// Hydrate the roster from the store; no data yet is an empty roster
    pub async fn list(&self) -> ClientResult<Vec<Staff>> {
        Ok(load_dataset(self.store.as_ref(), DatasetKey::Staff)
            .await?
            .unwrap_or_default())
    }

    /// Add a staff member with a fresh collision-free id, prepended so
    /// the newest entry comes first
    pub async fn add(&self, name: &str, wage_raw: &str, skill: &str) -> ClientResult<Staff> {
        let (name, wage) = validate_staff_input(name, wage_raw)?;
        let _guard = self.locks.acquire(DatasetKey::Staff, "roster update")?;

        let mut roster = self.list().await?;
        let member = Staff {
            id: Uuid::new_v4().to_string(),
            name,
            wage,
            skill: normalize_skill(skill),
        };
        roster.insert(0, member.clone());
        save_dataset(self.store.as_ref(), DatasetKey::Staff, &roster).await?;

        info!(id = %member.id, name = %member.name, "added staff member");
        Ok(member)
    }

    /// Edit a member in place, keeping id and roster position
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        wage_raw: &str,
        skill: &str,
    ) -> ClientResult<Staff> {
        let (name, wage) = validate_staff_input(name, wage_raw)?;
        let _guard = self.locks.acquire(DatasetKey::Staff, "roster update")?;

        let mut roster = self.list().await?;
        let member = roster
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ValidationError::UnknownStaff { id: id.to_string() })?;
        member.name = name;
        member.wage = wage;
        member.skill = normalize_skill(skill);
        let updated = member.clone();
        save_dataset(self.store.as_ref(), DatasetKey::Staff, &roster).await?;

        info!(id = %updated.id, "updated staff member");
        Ok(updated)
    }

    /// Remove a member. Fire-and-forget; there is no undo.
    pub async fn remove(&self, id: &str) -> ClientResult<Staff> {
        let _guard = self.locks.acquire(DatasetKey::Staff, "roster update")?;

        let mut roster = self.list().await?;
        let position = roster
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ValidationError::UnknownStaff { id: id.to_string() })?;
        let removed = roster.remove(position);
        save_dataset(self.store.as_ref(), DatasetKey::Staff, &roster).await?;

        info!(id = %removed.id, name = %removed.name, "removed staff member");
        Ok(removed)
    }
}

fn normalize_skill(skill: &str) -> String {
    let skill = skill.trim();
    if skill.is_empty() {
        DEFAULT_SKILL.to_string()
    } else {
        skill.to_string()
    }
}
