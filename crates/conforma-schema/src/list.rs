use conforma_value::Value;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::scheme::{Scheme, validate_nested};

/// Sequence matcher.
///
/// Only the ordered-sequence representation is accepted; length bounds are
/// checked before any element is visited. With an element scheme set, each
/// element is validated in place in index order, so a coercing child scheme
/// replaces elements inside the same sequence. Without one, elements pass
/// unchanged.
#[derive(Default)]
pub struct ListScheme {
    optional: bool,
    element: Option<Box<dyn Scheme>>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl ListScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a list with an element scheme.
    pub fn of(element: impl Scheme + 'static) -> Self {
        Self::new().element(element)
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn element(mut self, element: impl Scheme + 'static) -> Self {
        self.element = Some(Box::new(element));
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl Scheme for ListScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::List(items) = value else {
            return Err(ValidationError::new(ValidationErrorKind::InvalidType {
                actual: value.kind(),
            }));
        };

        let length = items.len();
        if self.min_length.is_some_and(|min| length < min)
            || self.max_length.is_some_and(|max| length > max)
        {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidListLength { length },
            ));
        }

        if let Some(element) = &self.element {
            for (index, item) in items.iter_mut().enumerate() {
                validate_nested(item, element.as_ref()).map_err(|e| e.prefix_index(index))?;
            }
        }

        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}
