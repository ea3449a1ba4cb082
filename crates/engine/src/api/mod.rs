//! API layer - host bridge entry points.
//!
//! - `commands` - command descriptors registered with the host
//! - `messages` - translation keys, effect ids and error-to-text mapping
//! - `handler` - dispatch of inbound messages to the use cases

pub mod commands;
pub mod handler;
pub mod messages;
mod views;

pub use handler::MessageHandler;
