//! Result types shared by the warp use cases.

use warps_domain::{DetailsForm, IconEntry, Warp};

use super::error::WarpError;

/// One row of a warp list, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpListEntry {
    pub warp: Warp,
    /// Resolved icon path (catalog fallback applied).
    pub icon_path: String,
    /// `None` for warps in another dimension.
    pub distance: Option<f64>,
}

/// An icon category offered in the first wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChoice {
    pub id: String,
    /// Path of the category's first icon, shown on its button.
    pub icon_path: String,
}

/// The menu the player should see next.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardPrompt {
    SelectCategory {
        categories: Vec<CategoryChoice>,
    },
    SelectIcon {
        category: String,
        icons: Vec<IconEntry>,
    },
    EnterDetails {
        icon_path: String,
        form: DetailsForm,
    },
}

/// Result of advancing the creation wizard.
#[derive(Debug)]
pub enum CreationOutcome {
    /// Show the next step.
    Prompt(WizardPrompt),
    /// The input was rejected; show the same step again, with the reason.
    Retry {
        reason: WarpError,
        prompt: WizardPrompt,
    },
    /// The warp was stored.
    Created(Warp),
    /// The player walked away; nothing was stored.
    Closed,
}

/// Result of a teleport request.
#[derive(Debug, Clone, PartialEq)]
pub enum TeleportOutcome {
    Teleported(Warp),
    /// No name given: let the player pick from this list.
    Choose(Vec<WarpListEntry>),
}

/// Result of a removal request.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(Warp),
    /// No name given: let the player pick from this list.
    Choose(Vec<WarpListEntry>),
}
