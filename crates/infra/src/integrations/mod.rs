//! External service integrations

pub mod sipgate;
