//! Value tree produced by decoding a JSON-like document.
//!
//! A [`Value`] is the composition of scalars, ordered sequences and
//! key-value mappings that schema validation operates on. Decoding raw
//! text into this tree is a collaborator's job (see `conforma-json`).

/// Scalar keys usable in mappings.
pub mod key;

/// Insertion-ordered mapping type.
pub mod map;

/// The value tree itself.
pub mod value;

pub use key::{KeyError, ObjectKey};
pub use map::Map;
pub use value::{Value, ValueKind};
