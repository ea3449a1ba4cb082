//! 3D positions and block faces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A point in a dimension, in block units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance, `sqrt(dx² + dy² + dz²)`.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Round every axis to the nearest whole block, halves toward +infinity.
    pub fn rounded(&self) -> Self {
        Self {
            x: round_half_up(self.x),
            y: round_half_up(self.y),
            z: round_half_up(self.z),
        }
    }

    /// The neighbouring block position on the given face.
    pub fn offset(&self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.normal();
        Self {
            x: self.x + f64::from(dx),
            y: self.y + f64::from(dy),
            z: self.z + f64::from(dz),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Rounds to the nearest integer with halves going up (`-2.5` → `-2`, `2.5` → `3`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Parse one coordinate typed into a form field.
///
/// Empty input and anything that is not a finite number are rejected.
pub fn parse_coordinate(axis: &'static str, input: &str) -> Result<f64, DomainError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DomainError::parse(format!(
            "{} coordinate is not a number: {:?}",
            axis, input
        ))),
    }
}

/// The face of a block that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl BlockFace {
    /// Unit vector pointing out of the face.
    pub fn normal(self) -> (i32, i32, i32) {
        match self {
            BlockFace::Down => (0, -1, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::North => (0, 0, -1),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::East => (1, 0, 0),
        }
    }
}

impl FromStr for BlockFace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" => Ok(BlockFace::Down),
            "up" => Ok(BlockFace::Up),
            "north" => Ok(BlockFace::North),
            "south" => Ok(BlockFace::South),
            "west" => Ok(BlockFace::West),
            "east" => Ok(BlockFace::East),
            _ => Err(DomainError::parse(format!("Unknown block face: {}", s))),
        }
    }
}
