use conforma_value::{ObjectKey, Value};
use indexmap::IndexMap;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::scheme::{Scheme, validate_nested};

/// What to do with mapping keys not declared in a [`RecordScheme`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Fail with `UnknownParameter` on the first undeclared key, in entry
    /// order.
    #[default]
    Reject,
    /// Leave undeclared keys untouched and unvalidated.
    Ignore,
    /// Remove undeclared keys before field validation.
    Delete,
}

/// Fixed-shape mapping matcher: the accepted key set is enumerated by the
/// schema, one child scheme per declared field.
///
/// Fields are validated in declaration order; an absent key is an error
/// unless its scheme is optional, and absent optional fields are never
/// synthesized with a default.
#[derive(Default)]
pub struct RecordScheme {
    optional: bool,
    fields: IndexMap<ObjectKey, Box<dyn Scheme>>,
    unknown_keys: UnknownKeys,
}

impl RecordScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Declares a field. Declaration order is the validation order.
    pub fn field(mut self, key: impl Into<ObjectKey>, scheme: impl Scheme + 'static) -> Self {
        self.fields.insert(key.into(), Box::new(scheme));
        self
    }

    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }
}

impl Scheme for RecordScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::Map(map) = value else {
            return Err(ValidationError::new(ValidationErrorKind::InvalidType {
                actual: value.kind(),
            }));
        };

        match self.unknown_keys {
            UnknownKeys::Reject => {
                // Deterministic pick: the first undeclared key in entry order.
                if let Some(unknown) = map.keys().find(|key| !self.fields.contains_key(*key)) {
                    return Err(
                        ValidationError::new(ValidationErrorKind::UnknownParameter)
                            .prefix_key(unknown),
                    );
                }
            }
            UnknownKeys::Ignore => {}
            UnknownKeys::Delete => {
                let unknown: Vec<ObjectKey> = map
                    .keys()
                    .filter(|key| !self.fields.contains_key(*key))
                    .cloned()
                    .collect();
                for key in &unknown {
                    map.shift_remove(key);
                }
            }
        }

        for (key, scheme) in &self.fields {
            match map.get_mut(key) {
                Some(entry) => {
                    validate_nested(entry, scheme.as_ref()).map_err(|e| e.prefix_key(key))?;
                }
                None => {
                    if !scheme.is_optional() {
                        return Err(
                            ValidationError::new(ValidationErrorKind::MissingParameter)
                                .prefix_key(key),
                        );
                    }
                }
            }
        }

        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}
