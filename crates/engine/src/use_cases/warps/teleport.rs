//! Teleport to warp use case.

use std::sync::Arc;

use warps_domain::{DimensionId, PlayerId, Position, Warp};

use crate::entities::WarpRegistry;
use crate::infrastructure::ports::TeleportPort;

use super::error::WarpError;
use super::list_warps::ListWarps;
use super::types::TeleportOutcome;

/// Teleport use case.
///
/// Orchestrates: case-insensitive name lookup (or the sorted list when no name
/// is given), then the host teleport.
pub struct TeleportToWarp {
    registry: Arc<WarpRegistry>,
    list: Arc<ListWarps>,
    teleporter: Arc<dyn TeleportPort>,
}

impl TeleportToWarp {
    pub fn new(
        registry: Arc<WarpRegistry>,
        list: Arc<ListWarps>,
        teleporter: Arc<dyn TeleportPort>,
    ) -> Self {
        Self {
            registry,
            list,
            teleporter,
        }
    }

    /// Execute the teleport use case.
    ///
    /// # Returns
    /// * `Ok(TeleportOutcome::Teleported)` - the player was sent to the named warp
    /// * `Ok(TeleportOutcome::Choose)` - no name given, pick from the list
    /// * `Err(WarpError::NotFound)` - no warp has that name
    pub async fn execute(
        &self,
        player_id: PlayerId,
        position: &Position,
        dimension: &DimensionId,
        name: Option<&str>,
    ) -> Result<TeleportOutcome, WarpError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            let entries = self.list.execute(position, dimension).await?;
            return Ok(TeleportOutcome::Choose(entries));
        };

        let warp = self
            .registry
            .find_by_name(name, true)
            .await?
            .ok_or_else(|| WarpError::NotFound(name.to_string()))?;

        self.teleport_to(player_id, &warp).await?;
        Ok(TeleportOutcome::Teleported(warp))
    }

    /// Send the player to a specific warp.
    pub async fn teleport_to(&self, player_id: PlayerId, warp: &Warp) -> Result<(), WarpError> {
        match self
            .teleporter
            .teleport(player_id, &warp.dimension, warp.position)
            .await
        {
            Ok(()) => {
                tracing::info!(player_id = %player_id, warp = %warp.name, "Player teleported");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    player_id = %player_id,
                    warp = %warp.name,
                    dimension = %warp.dimension,
                    error = %e,
                    "Teleport failed"
                );
                Err(WarpError::TeleportFailed {
                    name: warp.name.to_string(),
                    source: e,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryPropertyStore;
    use crate::infrastructure::ports::{MockTeleportPort, TeleportError};
    use warps_domain::IconCatalog;

    const WARPS: &str = r#"[
        {"name":"Home","x":10,"y":64,"z":-5,"dimension":"minecraft:overworld"},
        {"name":"Fortress","x":100,"y":40,"z":100,"dimension":"minecraft:nether"}
    ]"#;

    fn use_case(teleporter: MockTeleportPort) -> TeleportToWarp {
        let store = Arc::new(InMemoryPropertyStore::with_property("warps", WARPS));
        let registry = Arc::new(WarpRegistry::new(store, "warps"));
        let list = Arc::new(ListWarps::new(
            registry.clone(),
            Arc::new(IconCatalog::builtin()),
        ));
        TeleportToWarp::new(registry, list, Arc::new(teleporter))
    }

    #[tokio::test]
    async fn when_name_matches_ignoring_case_teleports() {
        let player_id = PlayerId::new();
        let mut teleporter = MockTeleportPort::new();
        teleporter
            .expect_teleport()
            .withf(move |pid, dimension, position| {
                *pid == player_id
                    && dimension.as_str() == "minecraft:overworld"
                    && *position == Position::new(10.0, 64.0, -5.0)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let result = use_case(teleporter)
            .execute(
                player_id,
                &Position::default(),
                &DimensionId::overworld(),
                Some("hOmE"),
            )
            .await
            .unwrap();

        assert!(matches!(result, TeleportOutcome::Teleported(w) if w.name.as_str() == "Home"));
    }

    #[tokio::test]
    async fn when_name_unknown_returns_not_found() {
        let teleporter = MockTeleportPort::new();
        let result = use_case(teleporter)
            .execute(
                PlayerId::new(),
                &Position::default(),
                &DimensionId::overworld(),
                Some("Nowhere"),
            )
            .await;

        assert!(matches!(result, Err(WarpError::NotFound(name)) if name == "Nowhere"));
    }

    #[tokio::test]
    async fn when_no_name_returns_sorted_list() {
        let teleporter = MockTeleportPort::new();
        let result = use_case(teleporter)
            .execute(
                PlayerId::new(),
                &Position::new(90.0, 40.0, 90.0),
                &DimensionId::from(DimensionId::NETHER),
                None,
            )
            .await
            .unwrap();

        let TeleportOutcome::Choose(entries) = result else {
            panic!("expected a list");
        };
        let names: Vec<_> = entries.iter().map(|e| e.warp.name.as_str()).collect();
        assert_eq!(names, vec!["Fortress", "Home"]);
    }

    #[tokio::test]
    async fn blank_name_is_treated_as_absent() {
        let teleporter = MockTeleportPort::new();
        let result = use_case(teleporter)
            .execute(
                PlayerId::new(),
                &Position::default(),
                &DimensionId::overworld(),
                Some("   "),
            )
            .await
            .unwrap();
        assert!(matches!(result, TeleportOutcome::Choose(_)));
    }

    #[tokio::test]
    async fn when_host_fails_reports_teleport_failed() {
        let mut teleporter = MockTeleportPort::new();
        teleporter
            .expect_teleport()
            .returning(|_, d, _| Err(TeleportError::UnknownDimension(d.to_string())));

        let result = use_case(teleporter)
            .execute(
                PlayerId::new(),
                &Position::default(),
                &DimensionId::overworld(),
                Some("Home"),
            )
            .await;

        assert!(matches!(
            result,
            Err(WarpError::TeleportFailed { name, .. }) if name == "Home"
        ));
    }
}
