use std::collections::BTreeMap;

/// An XML-RPC value.
///
/// `dateTime.iso8601` and `base64` payloads are kept as their raw text; the
/// gateway never sends them on the paths we use.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcValue {
    Int(i32),
    Bool(bool),
    String(String),
    Double(f64),
    DateTime(String),
    Base64(String),
    Struct(BTreeMap<String, RpcValue>),
    Array(Vec<RpcValue>),
    Nil,
}

impl RpcValue {
    /// Build a struct from `(name, value)` pairs.
    pub fn structure<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, RpcValue)>,
        K: Into<String>,
    {
        Self::Struct(members.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            Self::Int(value) => Some(f64::from(*value)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[RpcValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a struct member. `None` for missing members and non-structs.
    pub fn member(&self, name: &str) -> Option<&RpcValue> {
        match self {
            Self::Struct(members) => members.get(name),
            _ => None,
        }
    }

    /// Type tag used in the wire encoding.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
            Self::Double(_) => "double",
            Self::DateTime(_) => "dateTime.iso8601",
            Self::Base64(_) => "base64",
            Self::Struct(_) => "struct",
            Self::Array(_) => "array",
            Self::Nil => "nil",
        }
    }
}

impl From<&str> for RpcValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RpcValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for RpcValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for RpcValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for RpcValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl<T: Into<RpcValue>> From<Vec<T>> for RpcValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}
