//! External service port traits.

use async_trait::async_trait;
use warps_domain::{DimensionId, PlayerId, Position};

use super::error::TeleportError;

/// Moves players. Implemented by the game host side.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeleportPort: Send + Sync {
    async fn teleport(
        &self,
        player_id: PlayerId,
        dimension: &DimensionId,
        position: Position,
    ) -> Result<(), TeleportError>;
}
