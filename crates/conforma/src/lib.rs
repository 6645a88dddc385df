//! Conforma validates an in-memory structured value against a declarative
//! schema, reporting the first violation with a precise path to the
//! offending element, and optionally rewriting the value in place as a side
//! effect of a successful pass.
//!
//! ```
//! use conforma::{IntegerScheme, ListScheme, RecordScheme, StringScheme, validate};
//!
//! let scheme = ListScheme::of(
//!     RecordScheme::new()
//!         .field("id", IntegerScheme::new().min(0))
//!         .field("name", StringScheme::new().optional(true)),
//! );
//!
//! let mut items = conforma::json::from_json(&serde_json::json!([
//!     {"id": 0, "name": "zero"},
//!     {"id": 2},
//! ]))
//! .unwrap();
//!
//! validate("items", &mut items, &scheme).unwrap();
//! ```

pub use conforma_schema::{
    BoolScheme, DictScheme, ErrorPath, FloatScheme, IntegerScheme, ListScheme, PathSegment,
    RecordScheme, Scheme, StringScheme, UnknownKeys, ValidationError, ValidationErrorKind,
    validate,
};
pub use conforma_value::{KeyError, Map, ObjectKey, Value, ValueKind};

/// Conversion between `serde_json` trees and conforma values.
#[cfg(feature = "json")]
pub mod json {
    pub use conforma_json::{Error, from_json, to_json};
}
