//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on ports and provide the building blocks for use cases.

pub mod warp_registry;

pub use warp_registry::{RegistryError, WarpRegistry};
