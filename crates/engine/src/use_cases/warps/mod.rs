//! Warp use cases.
//!
//! Listing, teleporting, removal and the creation wizard, all on top of the
//! write-through `WarpRegistry`.

use std::sync::Arc;

mod create_warp;
mod error;
mod list_warps;
mod remove_warp;
mod teleport;
mod types;

pub use create_warp::{CreateWarp, CreateWarpInput};
pub use error::WarpError;
pub use list_warps::ListWarps;
pub use remove_warp::RemoveWarp;
pub use teleport::TeleportToWarp;
pub use types::{
    CategoryChoice, CreationOutcome, RemoveOutcome, TeleportOutcome, WarpListEntry, WizardPrompt,
};

/// Container for warp use cases.
pub struct WarpUseCases {
    pub list: Arc<ListWarps>,
    pub teleport: Arc<TeleportToWarp>,
    pub remove: Arc<RemoveWarp>,
    pub create: Arc<CreateWarp>,
}

impl WarpUseCases {
    pub fn new(
        list: Arc<ListWarps>,
        teleport: Arc<TeleportToWarp>,
        remove: Arc<RemoveWarp>,
        create: Arc<CreateWarp>,
    ) -> Self {
        Self {
            list,
            teleport,
            remove,
            create,
        }
    }
}
