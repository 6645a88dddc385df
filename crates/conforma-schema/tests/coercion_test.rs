//! Coercing schemes: in-place element replacement, mapping-key remapping,
//! and collision detection.

use conforma_schema::{
    DictScheme, ListScheme, Map, ObjectKey, RecordScheme, Scheme, ValidationError,
    ValidationErrorKind, Value, validate,
};

/// Parses decimal strings into integers, rewriting the value in place.
struct StringToInteger;

impl Scheme for StringToInteger {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::String(s) = value else {
            return Err(ValidationError::new(ValidationErrorKind::InvalidType {
                actual: value.kind(),
            }));
        };
        match s.parse::<i64>() {
            Ok(n) => {
                *value = Value::Integer(n);
                Ok(())
            }
            Err(_) => Err(ValidationError::new(ValidationErrorKind::InvalidValue {
                value: value.clone(),
            })),
        }
    }
}

#[test]
fn list_elements_replaced_in_place() {
    let mut value = Value::List(vec![Value::from("1"), Value::from("2")]);
    validate("ports", &mut value, &ListScheme::of(StringToInteger)).unwrap();
    assert_eq!(
        value,
        Value::List(vec![Value::Integer(1), Value::Integer(2)])
    );
}

#[test]
fn record_field_replaced_in_place() {
    let mut map = Map::new();
    map.insert("port", "8080");
    let mut value = Value::Map(map);

    let scheme = RecordScheme::new().field("port", StringToInteger);
    validate("config", &mut value, &scheme).unwrap();
    assert_eq!(
        value.as_map().unwrap().get(&ObjectKey::from("port")),
        Some(&Value::Integer(8080))
    );
}

#[test]
fn dict_values_replaced_in_place() {
    let mut map = Map::new();
    map.insert("a", "1");
    map.insert("b", "2");
    let mut value = Value::Map(map);

    validate("map", &mut value, &DictScheme::new().values(StringToInteger)).unwrap();
    assert_eq!(
        value.as_map().unwrap().get(&ObjectKey::from("a")),
        Some(&Value::Integer(1))
    );
    assert_eq!(
        value.as_map().unwrap().get(&ObjectKey::from("b")),
        Some(&Value::Integer(2))
    );
}

#[test]
fn dict_keys_remapped() {
    let mut map = Map::new();
    map.insert("1", true);
    map.insert("2", false);
    let mut value = Value::Map(map);

    validate("map", &mut value, &DictScheme::new().keys(StringToInteger)).unwrap();

    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&ObjectKey::Integer(1)), Some(&Value::Bool(true)));
    assert_eq!(map.get(&ObjectKey::Integer(2)), Some(&Value::Bool(false)));
}

#[test]
fn key_collision_fails_at_target_key() {
    // Both "1" and "01" parse to 1; the second remap must not overwrite the
    // first entry.
    let mut map = Map::new();
    map.insert("1", true);
    map.insert("01", false);
    let mut value = Value::Map(map);

    let err = validate("map", &mut value, &DictScheme::new().keys(StringToInteger)).unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::ParameterAlreadyExists);
    assert_eq!(err.path().to_string(), "map[1]");
    assert_eq!(err.to_string(), "map[1] already exists.");
}

#[test]
fn collision_with_untransformed_key_detected() {
    // "1" remaps to integer 1, which is already a literal key.
    let mut map = Map::new();
    map.insert("1", true);
    map.insert(1, false);
    let mut value = Value::Map(map);

    let err = validate("map", &mut value, &DictScheme::new().keys(StringToInteger)).unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::ParameterAlreadyExists);
    assert_eq!(err.path().to_string(), "map[1]");
}

#[test]
fn key_failure_addressed_at_original_key() {
    let mut map = Map::new();
    map.insert("7", 0);
    map.insert("seven", 0);
    let mut value = Value::Map(map);

    let err = validate("map", &mut value, &DictScheme::new().keys(StringToInteger)).unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::InvalidValue {
            value: Value::from("seven")
        }
    );
    assert_eq!(err.path().to_string(), "map[\"seven\"]");
}

#[test]
fn remapped_entry_moves_to_end() {
    /// Like [`StringToInteger`] but passes integers through unchanged.
    struct LenientToInteger;

    impl Scheme for LenientToInteger {
        fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
            if matches!(value, Value::Integer(_)) {
                return Ok(());
            }
            StringToInteger.validate(value)
        }
    }

    let mut map = Map::new();
    map.insert("1", true);
    map.insert(2, false);
    let mut value = Value::Map(map);

    validate("map", &mut value, &DictScheme::new().keys(LenientToInteger)).unwrap();

    let keys: Vec<&ObjectKey> = value.as_map().unwrap().keys().collect();
    assert_eq!(keys, [&ObjectKey::Integer(2), &ObjectKey::Integer(1)]);
}

#[test]
fn key_scheme_producing_non_key_value_fails() {
    /// Rewrites any accepted string to a float, which cannot be a key.
    struct StringToFloat;

    impl Scheme for StringToFloat {
        fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
            let Value::String(s) = value else {
                return Err(ValidationError::new(ValidationErrorKind::InvalidType {
                    actual: value.kind(),
                }));
            };
            match s.parse::<f64>() {
                Ok(f) => {
                    *value = Value::Float(f);
                    Ok(())
                }
                Err(_) => Err(ValidationError::new(ValidationErrorKind::InvalidValue {
                    value: value.clone(),
                })),
            }
        }
    }

    let mut map = Map::new();
    map.insert("1.5", true);
    let mut value = Value::Map(map);

    let err = validate("map", &mut value, &DictScheme::new().keys(StringToFloat)).unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::InvalidValue {
            value: Value::Float(1.5)
        }
    );
    assert_eq!(err.path().to_string(), "map[\"1.5\"]");
}
