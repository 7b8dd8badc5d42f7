//! # WebSMS Domain
//!
//! Domain types shared by every layer of the dispatcher.
//!
//! This crate contains:
//! - Message, balance, and connector identifier types
//! - The connector error taxonomy and the crate-wide `Result`
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other WebSMS crates
//! - No I/O, no async runtime

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
