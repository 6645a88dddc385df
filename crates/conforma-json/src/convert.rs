use conforma_value::{Map, ObjectKey, Value};

use crate::error::Error;

/// Converts a decoded JSON tree into a conforma value.
///
/// Numbers representable as `i64` become integers, everything else becomes
/// a float; a u64 above `i64::MAX` has no integer counterpart and is
/// rejected. Object entry order is preserved.
pub fn from_json(json: &serde_json::Value) -> Result<Value, Error> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if n.is_u64() {
                // A u64 above i64::MAX; as_f64 would accept it lossily.
                Err(Error::InvalidNumber(n.to_string()))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(Error::InvalidNumber(n.to_string()))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Array(items) => {
            let items = items.iter().map(from_json).collect::<Result<_, _>>()?;
            Ok(Value::List(items))
        }
        serde_json::Value::Object(entries) => {
            let map = entries
                .iter()
                .map(|(key, value)| Ok((ObjectKey::from(key.as_str()), from_json(value)?)))
                .collect::<Result<Map, Error>>()?;
            Ok(Value::Map(map))
        }
    }
}

/// Converts a conforma value back into a JSON tree.
///
/// Non-finite floats have no JSON representation, and JSON objects require
/// string keys; both are conversion errors rather than silent rewrites.
pub fn to_json(value: &Value) -> Result<serde_json::Value, Error> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Integer(n) => Ok(serde_json::Value::from(*n)),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| Error::InvalidNumber(f.to_string())),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::List(items) => {
            let items = items.iter().map(to_json).collect::<Result<_, _>>()?;
            Ok(serde_json::Value::Array(items))
        }
        Value::Map(map) => {
            let mut entries = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                let ObjectKey::String(key) = key else {
                    return Err(Error::NonStringKey(key.clone()));
                };
                entries.insert(key.clone(), to_json(value)?);
            }
            Ok(serde_json::Value::Object(entries))
        }
    }
}
