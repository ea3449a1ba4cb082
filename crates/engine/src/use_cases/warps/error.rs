//! Warp operation errors.

use warps_domain::{DetailsError, DomainError};

use crate::entities::RegistryError;
use crate::infrastructure::ports::{RepoError, TeleportError};

/// Errors that can occur during warp operations.
///
/// Every variant is recoverable by the player re-issuing the action; none of
/// them leaves the registry half-written.
#[derive(Debug, thiserror::Error)]
pub enum WarpError {
    #[error("Warp not found: {0}")]
    NotFound(String),
    #[error("A warp named {0} already exists")]
    DuplicateName(String),
    #[error("Invalid warp name: {0}")]
    InvalidName(DomainError),
    #[error("Invalid details: {0}")]
    Details(#[from] DetailsError),
    #[error("Teleport to {name} failed: {source}")]
    TeleportFailed {
        name: String,
        #[source]
        source: TeleportError,
    },
    #[error("No warp creation in progress")]
    NoActiveWizard,
    #[error("Invalid selection: {0}")]
    InvalidSelection(DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<RegistryError> for WarpError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateName(name) => WarpError::DuplicateName(name),
            RegistryError::Repo(e) => WarpError::Repo(e),
        }
    }
}
