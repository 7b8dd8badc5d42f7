//! Domain constants
//!
//! Values that more than one layer depends on live here so the connector, the
//! job runner, and the tests agree on them.

/// Recipients with this many characters or fewer are dropped before sending.
pub const MIN_RECIPIENT_LEN: usize = 1;

/// Separators accepted inside the serialized recipient parameter.
pub const RECIPIENT_SEPARATORS: &[char] = &[',', ';'];

/// Position of the serialized recipient list in a dispatch parameter list.
pub const PARAM_RECIPIENTS: usize = 0;

/// Position of the message body in a dispatch parameter list.
pub const PARAM_BODY: usize = 1;

/// Remote fault code reserved for rejected credentials.
pub const AUTH_FAULT_CODE: i32 = 401;

/// Fixed user-facing text shown when the gateway rejects the credentials.
pub const AUTH_ERROR_MESSAGE: &str = "Wrong username or password. Please check your settings.";

/// Number of decimal places used when rendering an account balance.
pub const BALANCE_DECIMALS: usize = 2;
