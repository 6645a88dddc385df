use conforma_value::{ObjectKey, Value};

use crate::error::{ValidationError, ValidationErrorKind};
use crate::scheme::{Scheme, validate_nested};

/// Dynamic mapping matcher: every key is validated against one uniform key
/// scheme and every value against one uniform value scheme.
///
/// Keys are iterated from a snapshot taken before any mutation, in entry
/// order. The key scheme runs before the value scheme and both failures are
/// addressed at the original key. When a key scheme rewrites a key, the
/// entry is re-inserted under the new key; if that key is already present
/// the validation fails rather than silently dropping an entry.
#[derive(Default)]
pub struct DictScheme {
    optional: bool,
    key_scheme: Option<Box<dyn Scheme>>,
    value_scheme: Option<Box<dyn Scheme>>,
}

impl DictScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn keys(mut self, scheme: impl Scheme + 'static) -> Self {
        self.key_scheme = Some(Box::new(scheme));
        self
    }

    pub fn values(mut self, scheme: impl Scheme + 'static) -> Self {
        self.value_scheme = Some(Box::new(scheme));
        self
    }
}

impl Scheme for DictScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::Map(map) = value else {
            return Err(ValidationError::new(ValidationErrorKind::InvalidType {
                actual: value.kind(),
            }));
        };

        // Snapshot: remapped entries must not be revisited, and the map is
        // mutated while we walk it.
        let keys: Vec<ObjectKey> = map.keys().cloned().collect();

        for key in keys {
            let valid_key = match &self.key_scheme {
                None => key.clone(),
                Some(scheme) => {
                    let mut candidate = Value::from(key.clone());
                    validate_nested(&mut candidate, scheme.as_ref())
                        .map_err(|e| e.prefix_key(&key))?;
                    ObjectKey::try_from(candidate).map_err(|e| {
                        ValidationError::new(ValidationErrorKind::InvalidValue { value: e.0 })
                            .prefix_key(&key)
                    })?
                }
            };

            if let Some(scheme) = &self.value_scheme
                && let Some(entry) = map.get_mut(&key)
            {
                validate_nested(entry, scheme.as_ref()).map_err(|e| e.prefix_key(&key))?;
            }

            if valid_key != key
                && let Some(entry) = map.shift_remove(&key)
            {
                if map.contains_key(&valid_key) {
                    return Err(ValidationError::new(
                        ValidationErrorKind::ParameterAlreadyExists,
                    )
                    .prefix_key(&valid_key));
                }
                map.insert(valid_key, entry);
            }
        }

        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{FloatScheme, StringScheme};
    use conforma_value::{Map, ValueKind};

    #[test]
    fn default_accepts_heterogeneous_keys() {
        let mut map = Map::new();
        map.insert(true, 1);
        map.insert(0, false);
        map.insert("string", "string");
        let mut value = Value::Map(map);
        let before = value.clone();

        DictScheme::new().validate(&mut value).unwrap();
        assert_eq!(value, before);
    }

    #[test]
    fn key_and_value_schemes() {
        let mut map = Map::new();
        map.insert("one", 1.0);
        map.insert("two", 2.0);
        let mut value = Value::Map(map);

        let scheme = DictScheme::new()
            .keys(StringScheme::new())
            .values(FloatScheme::new());
        scheme.validate(&mut value).unwrap();
    }

    #[test]
    fn invalid_key_addressed_at_key() {
        let mut map = Map::new();
        map.insert(true, "boolean");
        map.insert("string", "a");
        let mut value = Value::Map(map);

        let err = DictScheme::new()
            .keys(StringScheme::new())
            .validate(&mut value)
            .unwrap_err();
        assert_eq!(err.path().to_string(), "[true]");
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::InvalidType {
                actual: ValueKind::Bool
            }
        );
    }

    #[test]
    fn invalid_value_addressed_at_key() {
        let mut map = Map::new();
        map.insert(false, 0);
        let mut value = Value::Map(map);

        let err = DictScheme::new()
            .values(StringScheme::new())
            .validate(&mut value)
            .unwrap_err();
        assert_eq!(err.path().to_string(), "[false]");
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::InvalidType {
                actual: ValueKind::Integer
            }
        );
    }

    #[test]
    fn rejects_non_map() {
        let mut value = Value::List(vec![]);
        let err = DictScheme::new().validate(&mut value).unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::InvalidType {
                actual: ValueKind::List
            }
        );
    }
}
