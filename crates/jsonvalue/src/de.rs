//! Decoding of untyped input into [`JsonValue`].
//!
//! The deserializer is always asked for `deserialize_any`, and the callback it answers with picks
//! the variant. Callbacks are probed in a fixed order of preference:
//!
//! 1. integers that fit into `i64` become `Integer`;
//! 2. any other number becomes `Double`;
//! 3. booleans, 4. strings, 5. sequences, 6. maps, 7. unit / `None` as `Null`.
//!
//! Everything else is rejected with an error that carries the JSON Pointer of the offending value.
use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, EnumAccess, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::{paths::LazyLocation, DecodeOptions, JsonValue, Map};

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        DecodeOptions::new().decode(deserializer)
    }
}

/// Decodes a single value positioned at `location`, `depth` containers deep.
#[derive(Clone, Copy)]
pub(crate) struct ValueSeed<'a> {
    location: &'a LazyLocation<'a>,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> ValueSeed<'a> {
    pub(crate) fn root(location: &'a LazyLocation<'a>, max_depth: Option<usize>) -> Self {
        ValueSeed {
            location,
            depth: 0,
            max_depth,
        }
    }

    fn child<'b>(&self, location: &'b LazyLocation<'b>, depth: usize) -> ValueSeed<'b> {
        ValueSeed {
            location,
            depth,
            max_depth: self.max_depth,
        }
    }

    /// Depth of the container being entered, or an error if it is too deep.
    fn enter<E: de::Error>(&self) -> Result<usize, E> {
        let depth = self.depth + 1;
        match self.max_depth {
            Some(limit) if depth > limit => Err(E::custom(format!(
                "recursion limit of {limit} exceeded at path \"{}\"",
                self.location.materialize()
            ))),
            _ => Ok(depth),
        }
    }

    /// Decode the content of a `Some` or newtype wrapper at the same location.
    ///
    /// Wrappers recurse like containers, so they count towards the depth.
    fn descend<'de, D>(self, deserializer: D) -> Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let depth = self.enter::<D::Error>()?;
        deserializer.deserialize_any(self.child(self.location, depth))
    }

    fn unrecognized<E: de::Error>(&self, shape: &str) -> E {
        E::custom(format!(
            "unrecognized JSON shape ({shape}) at path \"{}\"",
            self.location.materialize()
        ))
    }
}

impl<'de> DeserializeSeed<'de> for ValueSeed<'_> {
    type Value = JsonValue;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ValueSeed<'_> {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(JsonValue::Integer(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(JsonValue::Double(value as f64), JsonValue::Integer))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(JsonValue::Double(value as f64), JsonValue::Integer))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(JsonValue::Double(value as f64), JsonValue::Integer))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(JsonValue::Double(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(JsonValue::Boolean(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(JsonValue::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let depth = self.enter::<A::Error>()?;
        let mut items = Vec::new();
        loop {
            let location = self.location.push(items.len());
            match seq.next_element_seed(self.child(&location, depth))? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let depth = self.enter::<A::Error>()?;
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let location = self.location.push(key.as_str());
            let value = map.next_value_seed(self.child(&location, depth))?;
            // Duplicate keys: the last one wins
            object.insert(key, value);
        }
        Ok(JsonValue::Object(object))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.descend(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.descend(deserializer)
    }

    fn visit_bytes<E>(self, _: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(self.unrecognized("byte array"))
    }

    fn visit_enum<A>(self, _: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        Err(self.unrecognized("enum"))
    }
}
