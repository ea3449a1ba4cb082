//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - World property storage (could swap the JSON file for the host's dynamic properties)
//! - Teleport execution (performed by the game host)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PropertyStorePort;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::TeleportPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockTeleportPort;
#[cfg(test)]
pub use repos::MockPropertyStorePort;
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{RepoError, TeleportError};
