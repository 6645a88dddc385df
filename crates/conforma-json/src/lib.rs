//! Conversion between `serde_json::Value` and `conforma_value::Value`.
//!
//! Decoding JSON text stays with `serde_json`; this crate only bridges the
//! decoded tree into the representation the schema engine validates, and
//! back.

mod convert;
mod error;


pub use convert::{from_json, to_json};
pub use error::Error;
