use conforma_value::Value;

use crate::error::ValidationError;

/// An immutable, reusable matcher describing the accepted shape of a value.
///
/// Schemes carry no per-call state, so one schema tree can serve any number
/// of concurrent validation calls. The value under validation is exclusively
/// owned by its call for the duration of that call.
///
/// The trait is open: a caller-provided implementation may rewrite the value
/// through the `&mut` reference (type coercion, normalization), and the
/// container schemes will write such replacements back in place.
pub trait Scheme: Send + Sync {
    /// Validates the value, rewriting it in place where the scheme allows.
    ///
    /// On failure the returned error carries a path local to this scheme;
    /// enclosing frames prepend their own address segments while the error
    /// propagates, and [`validate`] prefixes the root name last. The value
    /// must not be assumed usable after a failure.
    fn validate(&self, value: &mut Value) -> Result<(), ValidationError>;

    /// Whether the corresponding record key may be absent.
    fn is_optional(&self) -> bool {
        false
    }
}

/// Validates `value` against `scheme`, addressing failures relative to
/// `name`.
///
/// This is the entry point: it dispatches to the root scheme and prefixes
/// the root name onto any failure bubbling out of the tree.
pub fn validate(
    name: &str,
    value: &mut Value,
    scheme: &dyn Scheme,
) -> Result<(), ValidationError> {
    scheme.validate(value).map_err(|e| e.prefix_root(name))
}

/// Same dispatch without the root-name step; container schemes supply the
/// address segment themselves.
pub(crate) fn validate_nested(
    value: &mut Value,
    scheme: &dyn Scheme,
) -> Result<(), ValidationError> {
    scheme.validate(value)
}
