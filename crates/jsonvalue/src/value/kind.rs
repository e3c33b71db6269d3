use std::fmt;

/// The variant of a [`JsonValue`](crate::JsonValue), without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Double,
    Integer,
    String,
    Boolean,
    Null,
    Array,
    Object,
}

impl ValueKind {
    /// Descriptive label for this kind.
    ///
    /// Objects are labelled `"dictionary"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Double => "double",
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Object => "dictionary",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
