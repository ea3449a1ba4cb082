//! Warps Protocol - Shared types for the host bridge and the engine
//!
//! This crate contains the types exchanged with the game host:
//! - `ClientMessage`: commands, item interactions and menu responses coming in
//! - `ServerMessage`: chat lines, sounds, particles, teleports and menus going out
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain vocabulary types
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Forward compatible** - Unknown message types deserialize to `Unknown`

pub mod messages;
pub mod types;

pub use messages::{ClientMessage, ServerMessage};
pub use types::{
    CategoryData, CommandInfo, CommandPermission, DetailsFormData, IconData, ListMode,
    LocalizedText, PlayerContext, WarpListEntryData,
};
