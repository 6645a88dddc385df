//! Scalar matchers: exact runtime type plus optional value constraints.
//!
//! Type checking is strict: an integer is never accepted where a float is
//! required and a boolean is never accepted where an integer is required.
//! Scalar schemes never mutate; the input passes through unchanged.

use conforma_value::Value;
use regex::Regex;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::scheme::Scheme;

fn invalid_type(value: &Value) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidType {
        actual: value.kind(),
    })
}

fn invalid_value(value: impl Into<Value>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidValue {
        value: value.into(),
    })
}

/// Boolean matcher.
#[derive(Debug, Clone, Default)]
pub struct BoolScheme {
    optional: bool,
    choices: Option<Vec<bool>>,
}

impl BoolScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = bool>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }
}

impl Scheme for BoolScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::Bool(b) = value else {
            return Err(invalid_type(value));
        };
        if let Some(choices) = &self.choices
            && !choices.contains(b)
        {
            return Err(invalid_value(*b));
        }
        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Integer matcher with optional choices and inclusive bounds.
#[derive(Debug, Clone, Default)]
pub struct IntegerScheme {
    optional: bool,
    choices: Option<Vec<i64>>,
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = i64>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Scheme for IntegerScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::Integer(n) = value else {
            return Err(invalid_type(value));
        };
        let n = *n;

        if let Some(choices) = &self.choices
            && !choices.contains(&n)
        {
            return Err(invalid_value(n));
        }
        if self.min.is_some_and(|min| n < min) || self.max.is_some_and(|max| n > max) {
            return Err(invalid_value(n));
        }
        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Float matcher with optional choices and inclusive bounds.
#[derive(Debug, Clone, Default)]
pub struct FloatScheme {
    optional: bool,
    choices: Option<Vec<f64>>,
    min: Option<f64>,
    max: Option<f64>,
}

impl FloatScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = f64>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Scheme for FloatScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::Float(n) = value else {
            return Err(invalid_type(value));
        };
        let n = *n;

        if let Some(choices) = &self.choices
            && !choices.contains(&n)
        {
            return Err(invalid_value(n));
        }
        if self.min.is_some_and(|min| n < min) || self.max.is_some_and(|max| n > max) {
            return Err(invalid_value(n));
        }
        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

/// String matcher with optional choices, length bounds and pattern.
///
/// Lengths are counted in characters. The pattern uses search semantics: it
/// succeeds if it matches anywhere in the text.
#[derive(Debug, Clone, Default)]
pub struct StringScheme {
    optional: bool,
    choices: Option<Vec<String>>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
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

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

impl Scheme for StringScheme {
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError> {
        let Value::String(s) = value else {
            return Err(invalid_type(value));
        };

        if let Some(choices) = &self.choices
            && !choices.iter().any(|choice| choice == s)
        {
            return Err(invalid_value(s.clone()));
        }

        if self.min_length.is_some() || self.max_length.is_some() {
            let length = s.chars().count();
            if self.min_length.is_some_and(|min| length < min)
                || self.max_length.is_some_and(|max| length > max)
            {
                return Err(invalid_value(s.clone()));
            }
        }

        if let Some(pattern) = &self.pattern
            && !pattern.is_match(s)
        {
            return Err(invalid_value(s.clone()));
        }

        Ok(())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}
