//! List warps use case.
//!
//! Builds the distance-sorted warp list shown by the teleport and removal menus.

use std::sync::Arc;

use warps_domain::{distance_in_dimension, sort_by_distance_from, DimensionId, IconCatalog, Position};

use crate::entities::WarpRegistry;

use super::error::WarpError;
use super::types::WarpListEntry;

pub struct ListWarps {
    registry: Arc<WarpRegistry>,
    catalog: Arc<IconCatalog>,
}

impl ListWarps {
    pub fn new(registry: Arc<WarpRegistry>, catalog: Arc<IconCatalog>) -> Self {
        Self { registry, catalog }
    }

    /// Valid warps, nearest first, as seen from `position` in `dimension`.
    pub async fn execute(
        &self,
        position: &Position,
        dimension: &DimensionId,
    ) -> Result<Vec<WarpListEntry>, WarpError> {
        let warps = self.registry.load_valid().await?;
        let sorted = sort_by_distance_from(&warps, position, dimension);

        Ok(sorted
            .into_iter()
            .map(|warp| WarpListEntry {
                icon_path: self.catalog.path_for(warp.icon.as_deref()).to_string(),
                distance: distance_in_dimension(&warp, position, dimension),
                warp,
            })
            .collect())
    }
}
