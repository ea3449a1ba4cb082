//! Value objects - Immutable objects defined by their attributes

mod dimension;
mod names;
mod position;

pub use dimension::DimensionId;
pub use names::{WarpName, MAX_WARP_NAME_LENGTH};
pub use position::{parse_coordinate, round_half_up, BlockFace, Position};
