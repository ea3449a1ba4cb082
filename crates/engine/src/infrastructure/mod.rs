//! Infrastructure - port traits and their adapters.

pub mod app_settings;
pub mod bridge;
pub mod cache;
pub mod clock;
pub mod persistence;
pub mod ports;
