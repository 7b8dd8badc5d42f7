//! HTTP transport shared by the gateway connectors.

mod client;

pub use client::{HttpClient, HttpClientBuilder};
