use std::fmt::{self, Write};

/// A single step from a container into one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocationSegment<'a> {
    Property(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for LocationSegment<'a> {
    fn from(value: &'a str) -> Self {
        LocationSegment::Property(value)
    }
}

impl From<usize> for LocationSegment<'_> {
    fn from(value: usize) -> Self {
        LocationSegment::Index(value)
    }
}

/// Path to the value being decoded.
///
/// Every node lives on the decoder's stack and points to its parent, so descending into a
/// container costs nothing until an error needs the path as text.
#[derive(Debug)]
pub(crate) struct LazyLocation<'a> {
    segment: LocationSegment<'a>,
    parent: Option<&'a LazyLocation<'a>>,
}

impl<'a> LazyLocation<'a> {
    /// The document root.
    pub(crate) const fn new() -> Self {
        LazyLocation {
            // Never rendered: the root has no parent
            segment: LocationSegment::Index(0),
            parent: None,
        }
    }

    pub(crate) fn push<'b>(&'b self, segment: impl Into<LocationSegment<'b>>) -> LazyLocation<'b>
    where
        'a: 'b,
    {
        LazyLocation {
            segment: segment.into(),
            parent: Some(self),
        }
    }

    pub(crate) fn materialize(&self) -> Location {
        let mut segments = Vec::new();
        let mut current = self;
        while let Some(parent) = current.parent {
            segments.push(current.segment);
            current = parent;
        }
        let mut buffer = String::new();
        for segment in segments.iter().rev() {
            buffer.push('/');
            match segment {
                LocationSegment::Property(property) => escape_into(&mut buffer, property),
                LocationSegment::Index(index) => {
                    let _ = write!(buffer, "{index}");
                }
            }
        }
        Location(buffer)
    }
}

fn escape_into(buffer: &mut String, segment: &str) {
    for ch in segment.chars() {
        match ch {
            '~' => buffer.push_str("~0"),
            '/' => buffer.push_str("~1"),
            _ => buffer.push(ch),
        }
    }
}

/// JSON Pointer (RFC 6901) to a value inside a document. The root is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Location(String);

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        assert_eq!(LazyLocation::new().materialize().to_string(), "");
    }

    #[test]
    fn nested_segments() {
        let root = LazyLocation::new();
        let items = root.push("items");
        let second = items.push(1usize);
        let name = second.push("name");
        assert_eq!(name.materialize().to_string(), "/items/1/name");
        assert_eq!(items.materialize().to_string(), "/items");
    }

    #[test]
    fn escaping() {
        let root = LazyLocation::new();
        let key = String::from("a/b~c");
        let location = root.push(key.as_str());
        assert_eq!(location.materialize().to_string(), "/a~1b~0c");
    }

    #[test]
    fn empty_key() {
        let root = LazyLocation::new();
        let location = root.push("");
        assert_eq!(location.materialize().to_string(), "/");
    }
}
