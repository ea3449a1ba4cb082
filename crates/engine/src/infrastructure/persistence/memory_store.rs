//! In-memory property store, for tests and throwaway worlds.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PropertyStorePort, RepoError};

#[derive(Default)]
pub struct InMemoryPropertyStore {
    properties: RwLock<HashMap<String, String>>,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one raw property value.
    pub fn with_property(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut properties = HashMap::new();
        properties.insert(key.into(), value.into());
        Self {
            properties: RwLock::new(properties),
        }
    }
}

#[async_trait]
impl PropertyStorePort for InMemoryPropertyStore {
    async fn get_property(&self, key: &str) -> Result<Option<String>, RepoError> {
        Ok(self.properties.read().await.get(key).cloned())
    }

    async fn set_property(&self, key: &str, value: &str) -> Result<(), RepoError> {
        self.properties
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = InMemoryPropertyStore::new();
        assert_eq!(store.get_property("warps").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryPropertyStore::with_property("warps", "[]");
        store.set_property("warps", "[1]").await.unwrap();
        assert_eq!(
            store.get_property("warps").await.unwrap().as_deref(),
            Some("[1]")
        );
    }
}
