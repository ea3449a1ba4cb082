//! World dimension identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the game's distinct world spaces
/// (e.g. `minecraft:overworld`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionId(String);

impl DimensionId {
    pub const OVERWORLD: &'static str = "minecraft:overworld";
    pub const NETHER: &'static str = "minecraft:nether";
    pub const THE_END: &'static str = "minecraft:the_end";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn overworld() -> Self {
        Self::new(Self::OVERWORLD)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dimensions the vanilla game ships with.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::OVERWORLD | Self::NETHER | Self::THE_END
        )
    }
}

impl Default for DimensionId {
    fn default() -> Self {
        Self::overworld()
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DimensionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DimensionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dimensions() {
        assert!(DimensionId::overworld().is_builtin());
        assert!(DimensionId::from(DimensionId::NETHER).is_builtin());
        assert!(!DimensionId::from("custom:moon").is_builtin());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&DimensionId::from("minecraft:nether")).unwrap();
        assert_eq!(json, "\"minecraft:nether\"");
    }
}
