use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::JsonValue;

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Double(value) => serializer.serialize_f64(*value),
            JsonValue::Integer(value) => serializer.serialize_i64(*value),
            JsonValue::String(value) => serializer.serialize_str(value),
            JsonValue::Boolean(value) => serializer.serialize_bool(*value),
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
