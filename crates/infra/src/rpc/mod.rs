//! Minimal XML-RPC over HTTP.
//!
//! Only what the gateway protocol needs: method calls with positional
//! parameters, responses carrying one value, and fault responses.

mod client;
mod codec;
mod value;

pub use client::{XmlRpcClient, XmlRpcTransport};
pub use codec::{decode_response, encode_call};
pub use value::RpcValue;
