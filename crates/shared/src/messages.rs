//! Message types exchanged with the game host bridge.
//!
//! One JSON object per line in each direction.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change
//! - Unknown message types deserialize to `Unknown` for forward compatibility

use serde::{Deserialize, Serialize};
use warps_domain::{BlockFace, DimensionId, PlayerId, Position};

use crate::types::{
    CategoryData, CommandInfo, DetailsFormData, IconData, ListMode, LocalizedText, PlayerContext,
    WarpListEntryData,
};

// =============================================================================
// Client Messages (Host → Engine)
// =============================================================================

/// Messages from the game host to the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Host started; asks which commands and item to register
    Hello,
    /// `/warp [name]`
    TeleportCommand {
        player: PlayerContext,
        #[serde(default)]
        name: Option<String>,
    },
    /// `/addwarp [name] [icon] [x y z]`
    AddWarpCommand {
        player: PlayerContext,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        location: Option<Position>,
    },
    /// `/removewarp [name]`
    RemoveWarpCommand {
        player: PlayerContext,
        #[serde(default)]
        name: Option<String>,
    },
    /// Item used while aiming at nothing
    ItemUse { player: PlayerContext, item: String },
    /// Item used on a block face
    ItemUseOn {
        player: PlayerContext,
        item: String,
        block: Position,
        face: BlockFace,
    },
    /// Entry picked from a warp list menu
    WarpListSelection {
        player: PlayerContext,
        mode: ListMode,
        index: usize,
    },
    /// Category picked in the creation wizard
    CategorySelected { player: PlayerContext, index: usize },
    /// Icon picked in the creation wizard
    IconSelected { player: PlayerContext, index: usize },
    /// "Back" pressed on the icon picker
    IconPickerBack { player: PlayerContext },
    /// Details form submitted
    DetailsSubmitted {
        player: PlayerContext,
        form: DetailsFormData,
    },
    /// Any menu closed without a choice
    FormDismissed { player: PlayerContext },
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ClientMessage {
    /// The player the message is about, if any.
    pub fn player(&self) -> Option<&PlayerContext> {
        match self {
            ClientMessage::TeleportCommand { player, .. }
            | ClientMessage::AddWarpCommand { player, .. }
            | ClientMessage::RemoveWarpCommand { player, .. }
            | ClientMessage::ItemUse { player, .. }
            | ClientMessage::ItemUseOn { player, .. }
            | ClientMessage::WarpListSelection { player, .. }
            | ClientMessage::CategorySelected { player, .. }
            | ClientMessage::IconSelected { player, .. }
            | ClientMessage::IconPickerBack { player }
            | ClientMessage::DetailsSubmitted { player, .. }
            | ClientMessage::FormDismissed { player } => Some(player),
            ClientMessage::Hello | ClientMessage::Unknown => None,
        }
    }
}

// =============================================================================
// Server Messages (Engine → Host)
// =============================================================================

/// Messages from the engine to the game host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Commands and the interactive item to register
    Registration {
        item: String,
        commands: Vec<CommandInfo>,
    },
    /// Localized chat line for one player
    Chat {
        player_id: PlayerId,
        text: LocalizedText,
    },
    /// Sound cue played to one player
    PlaySound { player_id: PlayerId, sound: String },
    /// Particle effect in the world
    SpawnParticle {
        dimension: DimensionId,
        particle: String,
        position: Position,
    },
    /// Move a player
    Teleport {
        player_id: PlayerId,
        dimension: DimensionId,
        position: Position,
    },
    /// Warp list menu
    ShowWarpList {
        player_id: PlayerId,
        mode: ListMode,
        entries: Vec<WarpListEntryData>,
    },
    /// Wizard step 1
    ShowCategoryPicker {
        player_id: PlayerId,
        categories: Vec<CategoryData>,
    },
    /// Wizard step 2
    ShowIconPicker {
        player_id: PlayerId,
        category: String,
        icons: Vec<IconData>,
    },
    /// Wizard step 3, prefilled
    ShowDetailsForm {
        player_id: PlayerId,
        icon_path: String,
        form: DetailsFormData,
    },
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}
