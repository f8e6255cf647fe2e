//! JSON file persistence, one document per dataset key
//!
//! The store is the single source of truth between launches. Writes go
//! to a temp file and are renamed into place, so a failed operation can
//! never leave a half-written document under a dataset key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::debug;

use crate::error::{ClientError, ClientResult, StoreError};
use crate::traits::DatasetStore;
use shared::DatasetKey;

/// File-backed store: `<base_dir>/<key>.json` per dataset
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn document_path(&self, key: DatasetKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl DatasetStore for JsonFileStore {
    async fn get(&self, key: DatasetKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.document_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn set(&self, key: DatasetKey, json: String) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_dir).await?;
        let path = self.document_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;
        debug!(key = %key, "persisted dataset");
        Ok(())
    }

    async fn remove(&self, key: DatasetKey) -> Result<(), StoreError> {
        match fs::remove_file(self.document_path(key)).await {
            Ok(()) => {
                debug!(key = %key, "removed dataset");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// Read and decode the dataset under `key`; absent keys are `Ok(None)`
pub async fn load_dataset<S, T>(store: &S, key: DatasetKey) -> ClientResult<Option<T>>
where
    S: DatasetStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await.map_err(|e| ClientError::storage(key, e))? {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .map_err(|e| ClientError::storage(key, StoreError::Serialization(e)))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode `value` and replace the document under `key` in full
pub async fn save_dataset<S, T>(store: &S, key: DatasetKey, value: &T) -> ClientResult<()>
where
    S: DatasetStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value)
        .map_err(|e| ClientError::storage(key, StoreError::Serialization(e)))?;
    store
        .set(key, json)
        .await
        .map_err(|e| ClientError::storage(key, e))
}

/// Pretty-print `value` to an arbitrary path outside the store, used by
/// the schedule export
pub async fn export_json<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
    fs::write(path, json).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Staff, Wage};
    use tempfile::TempDir;

    fn create_test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        (store, temp_dir)
    }

    fn alice() -> Staff {
        Staff {
            id: "1".to_string(),
            name: "Alice".to_string(),
            wage: Wage::parse("15.00").unwrap(),
            skill: "bar".to_string(),
        }
    }

    #[tokio::test]
    async fn absent_key_reads_as_none_not_error() {
        let (store, _temp) = create_test_store();
        let read: Option<Vec<Staff>> = load_dataset(&store, DatasetKey::Staff).await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn roundtrips_a_dataset() {
        let (store, _temp) = create_test_store();
        let roster = vec![alice()];

        save_dataset(&store, DatasetKey::Staff, &roster).await.unwrap();
        let read: Option<Vec<Staff>> = load_dataset(&store, DatasetKey::Staff).await.unwrap();

        assert_eq!(read, Some(roster));
    }

    #[tokio::test]
    async fn set_replaces_the_whole_document() {
        let (store, _temp) = create_test_store();
        save_dataset(&store, DatasetKey::Staff, &vec![alice()])
            .await
            .unwrap();

        let replacement: Vec<Staff> = vec![];
        save_dataset(&store, DatasetKey::Staff, &replacement)
            .await
            .unwrap();

        let read: Option<Vec<Staff>> = load_dataset(&store, DatasetKey::Staff).await.unwrap();
        assert_eq!(read, Some(vec![]));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let (store, _temp) = create_test_store();
        save_dataset(&store, DatasetKey::Forecast, &vec![1, 2, 3])
            .await
            .unwrap();

        store.remove(DatasetKey::Forecast).await.unwrap();
        store.remove(DatasetKey::Forecast).await.unwrap();

        let read: Option<Vec<i32>> = load_dataset(&store, DatasetKey::Forecast).await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn corrupt_document_is_a_storage_error_not_absence() {
        let (store, temp) = create_test_store();
        let path = temp
            .path()
            .join(format!("{}.json", DatasetKey::Schedule.as_str()));
        tokio::fs::write(&path, "{not json").await.unwrap();

        let result: ClientResult<Option<shared::Schedule>> =
            load_dataset(&store, DatasetKey::Schedule).await;
        assert!(matches!(result, Err(ClientError::Storage { .. })));
    }

    #[tokio::test]
    async fn keys_do_not_collide() {
        let (store, _temp) = create_test_store();
        save_dataset(&store, DatasetKey::Staff, &vec![alice()])
            .await
            .unwrap();
        save_dataset(&store, DatasetKey::Onboarded, &true)
            .await
            .unwrap();

        let roster: Option<Vec<Staff>> = load_dataset(&store, DatasetKey::Staff).await.unwrap();
        let onboarded: Option<bool> = load_dataset(&store, DatasetKey::Onboarded).await.unwrap();
        assert_eq!(roster.map(|r| r.len()), Some(1));
        assert_eq!(onboarded, Some(true));
    }
}
