//! # WebSMS API
//!
//! Application layer - command handlers and the `websmsd` entry point.
//!
//! This crate contains:
//! - Command-line interface definition
//! - Command handlers (send, balance)
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
