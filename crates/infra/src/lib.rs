//! # WebSMS Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The single-shot HTTP client and the XML-RPC codec/client on top of it
//! - The sipgate gateway connector
//! - Configuration loading and tracing setup
//! - Reference collaborators (status sink, message stores, pending indicator)
//!
//! ## Architecture
//! - Implements traits defined in `websms-core`
//! - Contains all "impure" code (network, filesystem, global subscriber)
//! - Transport and wire errors are converted to domain errors before they
//!   leave the crate

pub mod collaborators;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod logging;
pub mod rpc;

// Re-export commonly used items
pub use collaborators::*;
pub use errors::{InfraError, RpcError};
pub use http::*;
pub use integrations::sipgate::SipgateConnector;
pub use logging::{init_tracing, LogFormat};
