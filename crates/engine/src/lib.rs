//! Warps Engine library.
//!
//! Named teleport locations for a game server, driven by a host bridge.
//!
//! ## Structure
//!
//! - `entities/` - The warp registry over the world property store
//! - `use_cases/` - List, teleport, remove and the creation wizard
//! - `stores/` - Per-player runtime state (wizards, open lists)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Host message dispatch
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
