//! Warps Domain - warp records, distance ordering, the icon catalog and the
//! creation wizard. Pure types and rules; no I/O.

pub mod entities;
pub mod error;
pub mod icon_catalog;
pub mod ids;
pub mod ordering;
pub mod value_objects;
pub mod wizard;

pub use entities::{StoredWarp, Warp, WarpRejection};
pub use error::DomainError;
pub use icon_catalog::{IconCatalog, IconEntry, IconField, IconKey, IconValue};
pub use ids::PlayerId;
pub use ordering::{distance, distance_in_dimension, sort_by_distance_from};
pub use value_objects::{
    parse_coordinate, round_half_up, BlockFace, DimensionId, Position, WarpName,
    MAX_WARP_NAME_LENGTH,
};
pub use wizard::{CreationWizard, DetailsError, DetailsForm, WarpDraft, WizardStep};
