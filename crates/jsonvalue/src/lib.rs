//! # jsonvalue
//!
//! A dynamic JSON value for working with documents that have no fixed schema.
//!
//! ```rust
//! use jsonvalue::JsonValue;
//!
//! # fn main() -> Result<(), jsonvalue::Error> {
//! let value = jsonvalue::from_str(r#"{"n": 5, "x": 2.5, "tags": ["a", "b"]}"#)?;
//!
//! assert_eq!(value.kind_name(), "dictionary");
//! assert_eq!(value.get("n"), Some(&JsonValue::Integer(5)));
//! assert_eq!(value.get("x").and_then(JsonValue::as_f64), Some(2.5));
//! // No coercion between variants
//! assert_eq!(value.get("n").and_then(JsonValue::as_f64), None);
//!
//! let tags = value.get("tags").and_then(JsonValue::as_array).unwrap_or_default();
//! assert_eq!(tags.len(), 2);
//!
//! let text = jsonvalue::to_string(&JsonValue::from_iter([JsonValue::Integer(1)]))?;
//! assert_eq!(text, "[1]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Numbers
//!
//! A number is decoded as [`JsonValue::Integer`] whenever the deserializer reports it as an
//! integer that fits into `i64`. All other numbers become [`JsonValue::Double`]. With
//! `serde_json`, a literal with a fraction or an exponent is reported as a float, so `5.0` and
//! `1e2` decode as doubles while `5` decodes as an integer.
//!
//! ## Nesting
//!
//! Decoding recurses once per nested array or object. [`DecodeOptions::max_depth`] bounds the
//! nesting (128 by default); dropping a deeply nested value also recurses.
mod de;
mod error;
mod impls;
mod options;
mod paths;
mod ser;
mod value;

use std::io;

pub use error::{Error, ErrorKind};
pub use options::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use value::{JsonValue, Map, ValueKind};

/// Create [`DecodeOptions`] with default settings.
#[must_use]
pub fn options() -> DecodeOptions {
    DecodeOptions::default()
}

/// Decode a [`JsonValue`] from JSON text.
///
/// # Errors
///
/// Returns an error if `input` is not a single valid JSON document or it is nested deeper than
/// [`DEFAULT_MAX_DEPTH`].
pub fn from_str(input: &str) -> Result<JsonValue, Error> {
    options().from_str(input)
}

/// Decode a [`JsonValue`] from JSON bytes.
///
/// # Errors
///
/// Returns an error if `input` is not a single valid JSON document or it is nested deeper than
/// [`DEFAULT_MAX_DEPTH`].
pub fn from_slice(input: &[u8]) -> Result<JsonValue, Error> {
    options().from_slice(input)
}

/// Decode a [`JsonValue`] from a reader.
///
/// # Errors
///
/// Returns an error if reading fails, or the content is not a single valid JSON document, or it
/// is nested deeper than [`DEFAULT_MAX_DEPTH`].
pub fn from_reader<R: io::Read>(reader: R) -> Result<JsonValue, Error> {
    options().from_reader(reader)
}

/// Encode a [`JsonValue`] as compact JSON text.
///
/// Non-finite doubles are written as `null`.
///
/// # Errors
///
/// Returns an error if the serializer fails.
pub fn to_string(value: &JsonValue) -> Result<String, Error> {
    serde_json::to_string(value).map_err(Error::encode)
}

/// Encode a [`JsonValue`] as compact JSON bytes.
///
/// # Errors
///
/// Returns an error if the serializer fails.
pub fn to_vec(value: &JsonValue) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(Error::encode)
}

/// Encode a [`JsonValue`] into a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer<W: io::Write>(writer: W, value: &JsonValue) -> Result<(), Error> {
    serde_json::to_writer(writer, value).map_err(Error::encode)
}
