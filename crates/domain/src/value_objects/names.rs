//! Validated name newtypes for domain entities

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a warp name typed by a player
pub const MAX_WARP_NAME_LENGTH: usize = 64;

// ============================================================================
// WarpName
// ============================================================================

/// A validated warp name (non-blank).
///
/// Stored names are kept byte-for-byte so that removal by exact tuple keeps
/// matching legacy entries. Player input goes through [`WarpName::from_input`],
/// which trims and length-checks first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WarpName(String);

impl WarpName {
    /// Wrap an existing name without altering it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Warp name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Build a name from free-form player input (trimmed, <=64 chars).
    pub fn from_input(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.chars().count() > MAX_WARP_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Warp name cannot exceed {} characters",
                MAX_WARP_NAME_LENGTH
            )));
        }
        Self::new(trimmed)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used by lookups.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for WarpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WarpName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<WarpName> for String {
    fn from(name: WarpName) -> String {
        name.0
    }
}
