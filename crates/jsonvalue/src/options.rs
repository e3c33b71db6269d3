use std::io;

use serde::de::{DeserializeSeed, Deserializer};

use crate::{de::ValueSeed, paths::LazyLocation, Error, JsonValue};

/// Nesting limit applied when no other is configured.
///
/// When decoding text, `serde_json`'s own parser limit is disabled and this is the only one.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for decoding a [`JsonValue`].
///
/// ```rust
/// # fn main() -> Result<(), jsonvalue::Error> {
/// let value = jsonvalue::options()
///     .max_depth(Some(2))
///     .from_str(r#"{"items": [1, 2]}"#)?;
/// assert_eq!(value.kind_name(), "dictionary");
///
/// let error = jsonvalue::options()
///     .max_depth(Some(1))
///     .from_str(r#"{"items": [1, 2]}"#)
///     .expect_err("Too deep");
/// assert_eq!(error.kind(), jsonvalue::ErrorKind::Data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    max_depth: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions::new()
    }
}

impl DecodeOptions {
    /// Create [`DecodeOptions`] with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        DecodeOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Maximum number of nested arrays, objects and `Some` / newtype wrappers. `None` removes
    /// the limit: the text entry points then recurse as deep as the input goes, so untrusted
    /// input may overflow the stack.
    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decode a value from any `serde` deserializer.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the input fails to parse, does not map to any
    /// [`JsonValue`] variant, or exceeds the nesting limit.
    pub fn decode<'de, D>(&self, deserializer: D) -> Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = LazyLocation::new();
        ValueSeed::root(&root, self.max_depth).deserialize(deserializer)
    }

    /// Decode a value from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a single valid JSON document or exceeds the nesting
    /// limit.
    pub fn from_str(&self, input: &str) -> Result<JsonValue, Error> {
        self.decode_document(serde_json::Deserializer::from_str(input))
    }

    /// Decode a value from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a single valid JSON document or exceeds the nesting
    /// limit.
    pub fn from_slice(&self, input: &[u8]) -> Result<JsonValue, Error> {
        self.decode_document(serde_json::Deserializer::from_slice(input))
    }

    /// Decode a value from a reader of JSON bytes.
    ///
    /// The reader is not buffered internally.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the content is not a single valid JSON document, or it
    /// exceeds the nesting limit.
    pub fn from_reader<R: io::Read>(&self, reader: R) -> Result<JsonValue, Error> {
        self.decode_document(serde_json::Deserializer::from_reader(reader))
    }

    fn decode_document<'de, R>(
        &self,
        mut deserializer: serde_json::Deserializer<R>,
    ) -> Result<JsonValue, Error>
    where
        R: serde_json::de::Read<'de>,
    {
        deserializer.disable_recursion_limit();
        let value = self.decode(&mut deserializer).map_err(Error::decode)?;
        // Only whitespace may follow the document
        deserializer.end().map_err(Error::decode)?;
        Ok(value)
    }
}
