//! Remove warp use case.

use std::sync::Arc;

use warps_domain::{DimensionId, Position, Warp};

use crate::entities::WarpRegistry;

use super::error::WarpError;
use super::list_warps::ListWarps;
use super::types::RemoveOutcome;

pub struct RemoveWarp {
    registry: Arc<WarpRegistry>,
    list: Arc<ListWarps>,
}

impl RemoveWarp {
    pub fn new(registry: Arc<WarpRegistry>, list: Arc<ListWarps>) -> Self {
        Self { registry, list }
    }

    /// Remove the warp with the given name (ignoring case), or hand back the
    /// sorted list when no name is given.
    pub async fn execute(
        &self,
        name: Option<&str>,
        position: &Position,
        dimension: &DimensionId,
    ) -> Result<RemoveOutcome, WarpError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            let entries = self.list.execute(position, dimension).await?;
            return Ok(RemoveOutcome::Choose(entries));
        };

        let warp = self
            .registry
            .find_by_name(name, true)
            .await?
            .ok_or_else(|| WarpError::NotFound(name.to_string()))?;

        self.registry.remove(&warp).await?;
        Ok(RemoveOutcome::Removed(warp))
    }

    /// Remove exactly this record, as picked from a list.
    ///
    /// Fails with `NotFound` when the record vanished since the list was shown.
    pub async fn remove_exact(&self, warp: &Warp) -> Result<(), WarpError> {
        let removed = self.registry.remove(warp).await?;
        if removed == 0 {
            return Err(WarpError::NotFound(warp.name.to_string()));
        }
        Ok(())
    }
}
