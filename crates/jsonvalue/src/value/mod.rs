mod kind;

use std::fmt;

use ahash::{AHashMap, AHashSet};
pub use kind::ValueKind;

/// Key-value storage of [`JsonValue::Object`].
///
/// Keys are unique and iteration order is unspecified.
pub type Map = AHashMap<String, JsonValue>;

/// An immutable JSON value of arbitrary shape.
///
/// Containers own their children, so a value is always a tree. Accessors never fail: asking for
/// a payload of a different variant returns `None`, without converting between variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    Double(f64),
    Integer(i64),
    String(String),
    Boolean(bool),
    #[default]
    Null,
    Array(Vec<JsonValue>),
    Object(Map),
}

impl JsonValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Double(_) => ValueKind::Double,
            JsonValue::Integer(_) => ValueKind::Integer,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Boolean(_) => ValueKind::Boolean,
            JsonValue::Null => ValueKind::Null,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    /// Label of the variant: `"double"`, `"integer"`, `"string"`, `"boolean"`, `"null"`,
    /// `"array"` or `"dictionary"`.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Keys of an object, `None` for every other variant (including arrays).
    #[must_use]
    pub fn keys(&self) -> Option<AHashSet<&str>> {
        self.as_object()
            .map(|object| object.keys().map(String::as_str).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Value stored under `key` if `self` is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Element at `index` if `self` is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|items| items.get(index))
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(
    f64 => Double,
    f32 => Double,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    bool => Boolean,
    String => String,
    &str => String,
    Vec<JsonValue> => Array,
    Map => Object,
);

impl From<()> for JsonValue {
    fn from((): ()) -> Self {
        JsonValue::Null
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        JsonValue::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
