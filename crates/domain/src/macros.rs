//! Macro for implementing Display and FromStr for simple domain enums
//!
//! Connector identifiers and log levels both travel as plain strings (config
//! files, IPC parameters, log output). This macro keeps their conversions in
//! one place with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use websms_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Transport {
//!     Text,
//!     Voice,
//! }
//!
//! impl_domain_enum_conversions!(Transport {
//!     Text => "text",
//!     Voice => "voice",
//! });
//! ```

/// Implements Display and FromStr for a fieldless enum
///
/// - Display writes the mapped lowercase string
/// - FromStr accepts any casing of the mapped string
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
