//! Payload types carried by the wire messages.

use serde::{Deserialize, Serialize};
use warps_domain::{DimensionId, PlayerId, Position};

/// Who sent a message and where they stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerContext {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    pub dimension: DimensionId,
    #[serde(default)]
    pub is_sneaking: bool,
    #[serde(default)]
    pub is_game_director: bool,
}

/// A translation key plus its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl LocalizedText {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl ToString) -> Self {
        self.params.push(param.to_string());
        self
    }
}

/// What picking an entry of a warp list does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    Teleport,
    Remove,
}

/// One row of a warp list menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpListEntryData {
    pub name: String,
    pub icon_path: String,
    pub dimension: DimensionId,
    pub position: Position,
    /// Whole blocks from the player; absent for warps in another dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub id: String,
    pub translation_key: String,
    pub icon_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconData {
    pub name: String,
    pub translation_key: String,
    pub path: String,
}

/// Raw text of the warp details form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailsFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub z: String,
}

/// Permission a command requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandPermission {
    Any,
    GameDirector,
}

/// A command the host should register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    pub aliases: Vec<String>,
    pub description_key: String,
    pub permission: CommandPermission,
}
