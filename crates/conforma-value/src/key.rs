use thiserror::Error;

use crate::value::Value;

/// Key-comparable scalar which implements `Eq` and `Hash`.
///
/// Mapping keys are restricted to booleans, integers and strings for
/// deterministic equality and hashing; floats and containers introduce
/// ambiguous or platform-dependent comparison rules and cannot be keys.
/// Heterogeneous key types within one mapping are allowed: a key is just a
/// scalar value, not a string-only property name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKey {
    Bool(bool),
    Integer(i64),
    String(String),
}

impl core::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ObjectKey::Bool(b) => write!(f, "{b}"),
            ObjectKey::Integer(n) => write!(f, "{n}"),
            ObjectKey::String(s) => write!(f, "{s}"),
        }
    }
}

/// A value that cannot be used as a mapping key.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0:?} cannot be used as a mapping key")]
pub struct KeyError(pub Value);

impl TryFrom<Value> for ObjectKey {
    type Error = KeyError;

    fn try_from(value: Value) -> Result<Self, KeyError> {
        match value {
            Value::Bool(b) => Ok(ObjectKey::Bool(b)),
            Value::Integer(n) => Ok(ObjectKey::Integer(n)),
            Value::String(s) => Ok(ObjectKey::String(s)),
            other => Err(KeyError(other)),
        }
    }
}

impl From<&str> for ObjectKey {
    fn from(s: &str) -> Self {
        ObjectKey::String(s.to_string())
    }
}

impl From<String> for ObjectKey {
    fn from(s: String) -> Self {
        ObjectKey::String(s)
    }
}

impl From<bool> for ObjectKey {
    fn from(b: bool) -> Self {
        ObjectKey::Bool(b)
    }
}

impl From<i32> for ObjectKey {
    fn from(n: i32) -> Self {
        ObjectKey::Integer(n.into())
    }
}

impl From<i64> for ObjectKey {
    fn from(n: i64) -> Self {
        ObjectKey::Integer(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for key in [
            ObjectKey::from("name"),
            ObjectKey::from(true),
            ObjectKey::from(7i64),
        ] {
            let value = Value::from(key.clone());
            assert_eq!(ObjectKey::try_from(value), Ok(key));
        }
    }

    #[test]
    fn non_key_values_rejected() {
        for value in [Value::Null, Value::Float(3.3), Value::List(vec![])] {
            let err = ObjectKey::try_from(value.clone()).unwrap_err();
            assert_eq!(err, KeyError(value));
        }
    }
}
