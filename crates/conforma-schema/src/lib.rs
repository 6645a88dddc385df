//! Schema validation for decoded value trees.
//!
//! A schema is a tree of [`Scheme`] nodes built once and shared across any
//! number of validation calls. Validation walks the value in place,
//! reporting the first violation with a fully-qualified path to the
//! offending element, and may rewrite the value (coercion, key remapping,
//! unknown-key pruning) as a side effect of a successful pass.

mod basic;
mod dict;
mod error;
mod list;
mod record;
mod scheme;

pub use basic::{BoolScheme, FloatScheme, IntegerScheme, StringScheme};
pub use conforma_value::{KeyError, Map, ObjectKey, Value, ValueKind};
pub use dict::DictScheme;
pub use error::{ErrorPath, PathSegment, ValidationError, ValidationErrorKind};
pub use list::ListScheme;
pub use record::{RecordScheme, UnknownKeys};
pub use scheme::{Scheme, validate};
