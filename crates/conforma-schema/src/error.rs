//! Validation failures and the path-accumulation protocol.
//!
//! A failure is raised with an empty path at the point of detection. Each
//! enclosing frame prepends exactly one [`PathSegment`] while the error
//! unwinds, and the driver prefixes the caller-supplied root name last, so
//! the path is assembled root-to-leaf during unwinding rather than carried
//! down during the descent.

use std::fmt;

use conforma_value::{ObjectKey, Value, ValueKind};
use thiserror::Error;

/// What went wrong, with the kind-specific payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    /// The value's runtime type does not exactly match the scheme's
    /// expected type. No numeric widening, no bool/integer conflation.
    #[error("has an invalid type: {actual}")]
    InvalidType { actual: ValueKind },

    /// Correct type, but a choice/bound/length/pattern constraint failed.
    #[error("has an invalid value: {value:?}")]
    InvalidValue { value: Value },

    /// Sequence length outside the configured bounds.
    #[error("has an invalid length: {length}")]
    InvalidListLength { length: usize },

    /// Mapping key not declared in a fixed-shape scheme under reject policy.
    #[error("unknown parameter")]
    UnknownParameter,

    /// Required declared key absent from the mapping.
    #[error("is missing")]
    MissingParameter,

    /// A key transformation produced a key that collides with an existing
    /// entry; failing beats silent data loss.
    #[error("already exists")]
    ParameterAlreadyExists,
}

/// One level of nesting in an error path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Sequence index.
    Index(usize),
    /// Mapping key.
    Key(ObjectKey),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "[{index}]"),
            PathSegment::Key(ObjectKey::String(s)) => write!(f, "[{s:?}]"),
            PathSegment::Key(key) => write!(f, "[{key}]"),
        }
    }
}

/// Root-to-leaf address of the offending element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorPath {
    root: String,
    segments: Vec<PathSegment>,
}

impl ErrorPath {
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A validation failure with its accumulated address.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    path: ErrorPath,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            path: ErrorPath::default(),
        }
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &ErrorPath {
        &self.path
    }

    /// Prepends a sequence-index segment while unwinding.
    pub fn prefix_index(mut self, index: usize) -> Self {
        self.path.segments.insert(0, PathSegment::Index(index));
        self
    }

    /// Prepends a mapping-key segment while unwinding.
    pub fn prefix_key(mut self, key: &ObjectKey) -> Self {
        self.path
            .segments
            .insert(0, PathSegment::Key(key.clone()));
        self
    }

    /// Sets the outermost prefix. Only the driver does this.
    pub fn prefix_root(mut self, name: &str) -> Self {
        self.path.root = name.to_string();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::UnknownParameter => {
                write!(f, "Unknown parameter: {}.", self.path)
            }
            kind => write!(f, "{} {}.", self.path, kind),
        }
    }
}

impl std::error::Error for ValidationError {}
