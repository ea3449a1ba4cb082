//! Player-facing texts and effects.
//!
//! Everything a player reads is a translation key plus parameters; the host
//! owns the language files. Internal failures are logged in full here and
//! reach the player only as a generic storage message.

use warps_domain::DetailsError;
use warps_shared::LocalizedText;

use crate::use_cases::warps::WarpError;

pub mod keys {
    pub const CREATED: &str = "warps.created";
    pub const REMOVED: &str = "warps.removed";
    pub const TELEPORTED: &str = "warps.teleported";
    pub const NO_WARPS: &str = "warps.no_warps";
    pub const NO_PERMISSION: &str = "warps.no_permission";
    pub const NOT_FOUND: &str = "warps.not_found";
    pub const DUPLICATE_NAME: &str = "warps.duplicate_name";
    pub const INVALID_NAME: &str = "warps.invalid_name";
    pub const MISSING_FIELD: &str = "warps.missing_field";
    pub const INVALID_COORDINATE: &str = "warps.invalid_coordinate";
    pub const TELEPORT_FAILED: &str = "warps.teleport_failed";
    pub const INVALID_SELECTION: &str = "warps.invalid_selection";
    pub const NO_WIZARD: &str = "warps.no_wizard";
    pub const STORAGE_ERROR: &str = "warps.storage_error";
}

pub mod sounds {
    pub const CREATED: &str = "random.levelup";
    pub const REMOVED: &str = "random.break";
    pub const TELEPORTED: &str = "mob.endermen.portal";
}

pub mod particles {
    pub const CREATED: &str = "minecraft:totem_particle";
}

/// Localized text for a failed warp operation.
pub fn error_text(error: &WarpError) -> LocalizedText {
    match error {
        WarpError::NotFound(name) => LocalizedText::new(keys::NOT_FOUND).with_param(name),
        WarpError::DuplicateName(name) => {
            LocalizedText::new(keys::DUPLICATE_NAME).with_param(name)
        }
        WarpError::InvalidName(_) => LocalizedText::new(keys::INVALID_NAME),
        WarpError::Details(details) => details_text(details),
        WarpError::TeleportFailed { name, .. } => {
            LocalizedText::new(keys::TELEPORT_FAILED).with_param(name)
        }
        WarpError::NoActiveWizard => LocalizedText::new(keys::NO_WIZARD),
        WarpError::InvalidSelection(_) => LocalizedText::new(keys::INVALID_SELECTION),
        WarpError::Repo(e) => {
            tracing::error!(error = %e, "Warp storage failed");
            LocalizedText::new(keys::STORAGE_ERROR)
        }
    }
}

fn details_text(error: &DetailsError) -> LocalizedText {
    match error {
        DetailsError::MissingField(field) => {
            LocalizedText::new(keys::MISSING_FIELD).with_param(field)
        }
        DetailsError::InvalidCoordinate { axis, input } => {
            LocalizedText::new(keys::INVALID_COORDINATE)
                .with_param(axis)
                .with_param(input)
        }
        DetailsError::InvalidName(_) => LocalizedText::new(keys::INVALID_NAME),
        DetailsError::Transition(_) => LocalizedText::new(keys::INVALID_SELECTION),
    }
}
