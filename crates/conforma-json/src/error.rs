use conforma_value::ObjectKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The number has no counterpart on the other side of the conversion
    /// (u64 above `i64::MAX`, or a non-finite float).
    #[error("invalid number: cannot represent {0}")]
    InvalidNumber(String),

    /// JSON object keys must be strings.
    #[error("mapping key {0} cannot be represented as a JSON object key")]
    NonStringKey(ObjectKey),
}
