//! Chat commands offered to the host.

use warps_shared::{CommandInfo, CommandPermission, PlayerContext};

pub const WARP: &str = "warp";
pub const ADD_WARP: &str = "addwarp";
pub const REMOVE_WARP: &str = "removewarp";

/// Descriptors for every command the host should register.
pub fn descriptors() -> Vec<CommandInfo> {
    [
        (WARP, "w", "warps.command.warp"),
        (ADD_WARP, "setwarp", "warps.command.addwarp"),
        (REMOVE_WARP, "delwarp", "warps.command.removewarp"),
    ]
    .into_iter()
    .map(|(name, alias, description_key)| CommandInfo {
        name: name.to_string(),
        aliases: vec![alias.to_string()],
        description_key: description_key.to_string(),
        permission: CommandPermission::GameDirector,
    })
    .collect()
}

/// Whether the player may run a command that needs `permission`.
pub fn is_permitted(player: &PlayerContext, permission: CommandPermission) -> bool {
    match permission {
        CommandPermission::Any => true,
        CommandPermission::GameDirector => player.is_game_director,
    }
}
