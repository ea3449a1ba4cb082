//! Warp registry - the persisted list of warps.
//!
//! The list lives as one JSON array under a single world property. It is read
//! fresh on every call and written back after every mutation; nothing is cached
//! between calls. Entries that do not validate are hidden from queries but kept
//! in the stored list.

use std::sync::Arc;

use warps_domain::{StoredWarp, Warp};

use crate::infrastructure::ports::{PropertyStorePort, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("A warp named {0} already exists")]
    DuplicateName(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Warp registry entity.
pub struct WarpRegistry {
    store: Arc<dyn PropertyStorePort>,
    key: String,
}

impl WarpRegistry {
    pub fn new(store: Arc<dyn PropertyStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Every stored entry, valid or not.
    ///
    /// A missing property or a document that is not a JSON array reads as an
    /// empty list. Only a failing store is an error.
    pub async fn load_all(&self) -> Result<Vec<StoredWarp>, RepoError> {
        let Some(raw) = self.store.get_property(&self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<StoredWarp>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored warp list is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Valid warps in stored order.
    pub async fn load_valid(&self) -> Result<Vec<Warp>, RepoError> {
        let entries = self.load_all().await?;
        Ok(entries
            .iter()
            .filter_map(|entry| match Warp::try_from(entry) {
                Ok(warp) => Some(warp),
                Err(reason) => {
                    tracing::debug!(name = ?entry.name(), %reason, "Hiding invalid warp entry");
                    None
                }
            })
            .collect())
    }

    /// First valid warp with the given name, in stored order.
    pub async fn find_by_name(
        &self,
        name: &str,
        case_insensitive: bool,
    ) -> Result<Option<Warp>, RepoError> {
        let warps = self.load_valid().await?;
        Ok(warps.into_iter().find(|warp| {
            if case_insensitive {
                warp.name.matches_ignore_case(name)
            } else {
                warp.name.as_str() == name
            }
        }))
    }

    /// Append a warp and persist.
    ///
    /// Fails with `DuplicateName` if any stored entry has exactly this name
    /// (case-sensitive). Coordinates are stored as given.
    pub async fn add(&self, warp: &Warp) -> Result<(), RegistryError> {
        let mut entries = self.load_all().await?;
        if entries
            .iter()
            .any(|entry| entry.name() == Some(warp.name.as_str()))
        {
            return Err(RegistryError::DuplicateName(warp.name.to_string()));
        }
        entries.push(StoredWarp::from(warp));
        self.save(&entries).await?;

        tracing::info!(
            warp = %warp.name,
            dimension = %warp.dimension,
            position = %warp.position,
            "Warp added"
        );
        Ok(())
    }

    /// Remove every entry matching the warp's `(name, x, y, z, dimension)` and
    /// persist. Returns how many entries were removed; removing nothing is fine.
    pub async fn remove(&self, warp: &Warp) -> Result<usize, RepoError> {
        let mut entries = self.load_all().await?;
        let before = entries.len();
        entries.retain(|entry| !entry.matches_target(warp));
        let removed = before - entries.len();
        self.save(&entries).await?;

        tracing::info!(warp = %warp.name, removed, "Warp removed");
        Ok(removed)
    }

    async fn save(&self, entries: &[StoredWarp]) -> Result<(), RepoError> {
        let json = serde_json::to_string(entries).map_err(RepoError::serialization)?;
        self.store.set_property(&self.key, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryPropertyStore;
    use crate::infrastructure::ports::MockPropertyStorePort;
    use warps_domain::{DimensionId, Position, WarpName};

    const KEY: &str = "warps";

    fn warp(name: &str, x: f64, dimension: &str) -> Warp {
        Warp::new(
            WarpName::new(name).unwrap(),
            Position::new(x, 0.0, 0.0),
            DimensionId::from(dimension),
        )
    }

    fn registry_with(raw: &str) -> (WarpRegistry, Arc<InMemoryPropertyStore>) {
        let store = Arc::new(InMemoryPropertyStore::with_property(KEY, raw));
        (WarpRegistry::new(store.clone(), KEY), store)
    }

    fn empty_registry() -> (WarpRegistry, Arc<InMemoryPropertyStore>) {
        let store = Arc::new(InMemoryPropertyStore::new());
        (WarpRegistry::new(store.clone(), KEY), store)
    }

    #[tokio::test]
    async fn missing_property_is_empty() {
        let (registry, _) = empty_registry();
        assert!(registry.load_all().await.unwrap().is_empty());
        assert!(registry.load_valid().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_empty() {
        let (registry, _) = registry_with("{not json");
        assert!(registry.load_all().await.unwrap().is_empty());

        let (registry, _) = registry_with(r#"{"name": "not a list"}"#);
        assert!(registry.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_entries_are_hidden_not_deleted() {
        let (registry, store) = registry_with(
            r#"[{"name":"Old","x":1},{"name":"Home","x":1,"y":2,"z":3,"dimension":"minecraft:overworld"},7]"#,
        );

        let valid = registry.load_valid().await.unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name.as_str(), "Home");

        registry.add(&warp("Mine", 5.0, "minecraft:overworld")).await.unwrap();

        let raw = store.get_property(KEY).await.unwrap().unwrap();
        let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[0]["name"], "Old");
        assert_eq!(stored[2], serde_json::json!(7));
    }

    #[tokio::test]
    async fn add_appends_and_persists() {
        let (registry, _) = empty_registry();
        registry.add(&warp("A", 1.0, "minecraft:overworld")).await.unwrap();
        registry.add(&warp("B", 2.0, "minecraft:nether")).await.unwrap();

        let names: Vec<_> = registry
            .load_valid()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.name.to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn duplicate_name_rejected_case_sensitively() {
        let (registry, _) = empty_registry();
        registry.add(&warp("home", 1.0, "minecraft:overworld")).await.unwrap();

        let dup = registry.add(&warp("home", 9.0, "minecraft:overworld")).await;
        assert!(matches!(dup, Err(RegistryError::DuplicateName(name)) if name == "home"));

        registry.add(&warp("Home", 2.0, "minecraft:overworld")).await.unwrap();
        assert_eq!(registry.load_valid().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_check_sees_invalid_entries() {
        let (registry, _) = registry_with(r#"[{"name":"Ghost"}]"#);
        let result = registry.add(&warp("Ghost", 1.0, "minecraft:overworld")).await;
        assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn wrongly_typed_icon_keeps_record_valid_and_unique() {
        let (registry, store) = registry_with(
            r#"[{"name":"Home","x":1,"y":2,"z":3,"dimension":"overworld","icon":5}]"#,
        );

        let valid = registry.load_valid().await.unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].icon, None);

        let home = Warp::new(
            WarpName::new("Home").unwrap(),
            Position::new(1.0, 2.0, 3.0),
            DimensionId::from("overworld"),
        );
        let dup = registry.add(&home).await;
        assert!(matches!(dup, Err(RegistryError::DuplicateName(_))));

        assert_eq!(registry.remove(&home).await.unwrap(), 1);
        let raw = store.get_property(KEY).await.unwrap().unwrap();
        assert_eq!(raw, "[]");
    }

    #[tokio::test]
    async fn wrongly_typed_coordinate_still_blocks_its_name() {
        let (registry, _) = registry_with(
            r#"[{"name":"A","x":"ten","y":0,"z":0,"dimension":"overworld"}]"#,
        );

        assert!(registry.load_valid().await.unwrap().is_empty());
        let result = registry.add(&warp("A", 10.0, "overworld")).await;
        assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "A"));
    }

    #[tokio::test]
    async fn find_by_name_ignores_case_and_takes_first() {
        let (registry, _) = empty_registry();
        registry.add(&warp("home", 1.0, "minecraft:overworld")).await.unwrap();
        registry.add(&warp("Home", 2.0, "minecraft:overworld")).await.unwrap();

        let found = registry.find_by_name("HOME", true).await.unwrap().unwrap();
        assert_eq!(found.name.as_str(), "home");

        let exact = registry.find_by_name("Home", false).await.unwrap().unwrap();
        assert_eq!(exact.position.x, 2.0);

        assert!(registry.find_by_name("HOME", false).await.unwrap().is_none());
        assert!(registry.find_by_name("nowhere", true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_matches_full_tuple_only() {
        let (registry, _) = registry_with(
            r#"[
                {"name":"A","x":10,"y":0,"z":0,"dimension":"overworld"},
                {"name":"A","x":20,"y":0,"z":0,"dimension":"overworld"},
                {"name":"B","x":10,"y":0,"z":0,"dimension":"overworld"}
            ]"#,
        );

        let removed = registry.remove(&warp("A", 10.0, "overworld")).await.unwrap();
        assert_eq!(removed, 1);

        let left: Vec<_> = registry
            .load_valid()
            .await
            .unwrap()
            .into_iter()
            .map(|w| (w.name.to_string(), w.position.x))
            .collect();
        assert_eq!(left, vec![("A".to_string(), 20.0), ("B".to_string(), 10.0)]);
    }

    #[tokio::test]
    async fn remove_missing_is_noop() {
        let (registry, _) = empty_registry();
        registry.add(&warp("A", 1.0, "overworld")).await.unwrap();
        assert_eq!(registry.remove(&warp("A", 2.0, "overworld")).await.unwrap(), 0);
        assert_eq!(registry.remove(&warp("Z", 1.0, "overworld")).await.unwrap(), 0);
        assert_eq!(registry.load_valid().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_of_load_round_trips() {
        let raw = r#"[{"name":"A","x":1,"y":2,"z":3,"dimension":"overworld","icon":"textures/items/map_filled"},{"name":"B","x":-4.5,"y":70,"z":0,"dimension":"nether","note":"kept"}]"#;
        let (registry, store) = registry_with(raw);

        let first = registry.load_all().await.unwrap();
        registry.save(&first).await.unwrap();
        let second = registry.load_all().await.unwrap();
        assert_eq!(first, second);

        let rewritten = store.get_property(KEY).await.unwrap().unwrap();
        let a: serde_json::Value = serde_json::from_str(raw).unwrap();
        let b: serde_json::Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn names_stay_unique_across_mutations() {
        let (registry, _) = empty_registry();
        for (name, x) in [("A", 1.0), ("B", 2.0), ("A", 3.0), ("C", 4.0), ("B", 5.0)] {
            let _ = registry.add(&warp(name, x, "overworld")).await;
        }
        registry.remove(&warp("A", 1.0, "overworld")).await.unwrap();
        let _ = registry.add(&warp("A", 6.0, "overworld")).await;
        let _ = registry.add(&warp("C", 7.0, "overworld")).await;

        let valid = registry.load_valid().await.unwrap();
        let mut names: Vec<_> = valid.iter().map(|w| w.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut store = MockPropertyStorePort::new();
        store
            .expect_get_property()
            .returning(|_| Err(RepoError::database("get_property", "disk gone")));
        let registry = WarpRegistry::new(Arc::new(store), KEY);

        assert!(registry.load_valid().await.is_err());
        let result = registry.add(&warp("A", 1.0, "overworld")).await;
        assert!(matches!(result, Err(RegistryError::Repo(_))));
    }

    #[tokio::test]
    async fn add_writes_one_property() {
        let mut store = MockPropertyStorePort::new();
        store.expect_get_property().returning(|_| Ok(None));
        store
            .expect_set_property()
            .withf(|key, value| {
                key == KEY
                    && value == r#"[{"name":"A","x":1,"y":0,"z":0,"dimension":"overworld"}]"#
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let registry = WarpRegistry::new(Arc::new(store), KEY);

        registry.add(&warp("A", 1.0, "overworld")).await.unwrap();
    }
}
