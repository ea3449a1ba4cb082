//! Domain entities.

mod warp;

pub use warp::{StoredWarp, Warp, WarpRejection};
