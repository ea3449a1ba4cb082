//! Host bridge adapters.
//!
//! The engine cannot move players itself; teleports are handed to the host as
//! outbound `ServerMessage::Teleport` lines.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use warps_domain::{DimensionId, PlayerId, Position};
use warps_shared::ServerMessage;

use crate::infrastructure::ports::{TeleportError, TeleportPort};

/// Teleporter that queues a teleport instruction for the host.
///
/// Only the vanilla dimensions are accepted; anything else would be dropped by
/// the host, so it is refused here where the player can still be told.
pub struct BridgeTeleporter {
    outbound: UnboundedSender<ServerMessage>,
}

impl BridgeTeleporter {
    pub fn new(outbound: UnboundedSender<ServerMessage>) -> Self {
        Self { outbound }
    }
}

#[async_trait]
impl TeleportPort for BridgeTeleporter {
    async fn teleport(
        &self,
        player_id: PlayerId,
        dimension: &DimensionId,
        position: Position,
    ) -> Result<(), TeleportError> {
        if !dimension.is_builtin() {
            return Err(TeleportError::UnknownDimension(dimension.to_string()));
        }
        self.outbound
            .send(ServerMessage::Teleport {
                player_id,
                dimension: dimension.clone(),
                position,
            })
            .map_err(|_| TeleportError::HostUnavailable)
    }
}
