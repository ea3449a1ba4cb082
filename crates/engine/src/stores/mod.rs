//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in the world properties:
//! - `WizardSessionStore` - creation wizards in progress, one per player
//! - `PresentedListStore` - the warp list last shown to each player

pub mod presented_list;
pub mod wizard_session;

pub use presented_list::{PresentedList, PresentedListStore};
pub use wizard_session::WizardSessionStore;
