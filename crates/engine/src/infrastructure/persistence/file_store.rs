//! File-backed world properties.
//!
//! All properties of a world live in one JSON object (`{"key": "value"}`) on
//! disk. Every read goes to the file; every write rewrites it through a
//! temporary file and a rename so readers never see half a document.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{PropertyStorePort, RepoError};

pub struct JsonFilePropertyStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePropertyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, RepoError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(RepoError::database("read_properties", e)),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(RepoError::serialization)
    }
}

#[async_trait]
impl PropertyStorePort for JsonFilePropertyStore {
    async fn get_property(&self, key: &str) -> Result<Option<String>, RepoError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_property(&self, key: &str, value: &str) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;

        let mut properties = self.read_all().await?;
        properties.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&properties).map_err(RepoError::serialization)?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| RepoError::database("write_properties", e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| RepoError::database("write_properties", e))?;

        tracing::debug!(path = %self.path.display(), key, "World property saved");
        Ok(())
    }
}
