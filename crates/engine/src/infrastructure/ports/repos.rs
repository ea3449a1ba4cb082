//! Storage port traits.

use async_trait::async_trait;

use super::error::RepoError;

// =============================================================================
// World Property Storage
// =============================================================================

/// World-scoped string properties, the only durable storage primitive.
///
/// `set_property` replaces the whole value in one write; there is no partial
/// update and no transaction across keys.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyStorePort: Send + Sync {
    async fn get_property(&self, key: &str) -> Result<Option<String>, RepoError>;
    async fn set_property(&self, key: &str, value: &str) -> Result<(), RepoError>;
}
