use std::{error, fmt, io};

use serde_json::error::Category;

/// Category of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not syntactically valid JSON.
    Syntax,
    /// The input is valid JSON, but does not map to a [`JsonValue`](crate::JsonValue), or it is
    /// nested deeper than allowed.
    Data,
    /// The input ended in the middle of a value.
    Eof,
    /// Reading or writing failed.
    Io,
    /// The serializer rejected a value.
    Encode,
}

/// An error that occurred while decoding or encoding a [`JsonValue`](crate::JsonValue).
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: serde_json::Error,
}

impl Error {
    pub(crate) fn decode(inner: serde_json::Error) -> Error {
        let kind = match inner.classify() {
            Category::Io => ErrorKind::Io,
            Category::Syntax => ErrorKind::Syntax,
            Category::Data => ErrorKind::Data,
            Category::Eof => ErrorKind::Eof,
        };
        Error { kind, inner }
    }

    pub(crate) fn encode(inner: serde_json::Error) -> Error {
        let kind = if inner.is_io() {
            ErrorKind::Io
        } else {
            ErrorKind::Encode
        };
        Error { kind, inner }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// One-based line of the input at which the error was detected. Zero for encoding errors.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// One-based column of the input at which the error was detected. Zero for encoding errors.
    #[must_use]
    pub fn column(&self) -> usize {
        self.inner.column()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Encode => write!(f, "Failed to encode JSON value: {}", self.inner),
            _ => fmt::Display::fmt(&self.inner, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            inner: serde_json::Error::io(error),
        }
    }
}

impl From<Error> for serde_json::Error {
    fn from(error: Error) -> Self {
        error.inner
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn io_error() {
        let error = Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"));
        assert_eq!(error.kind(), ErrorKind::Io);
        let source = error
            .source()
            .and_then(|source| source.downcast_ref::<serde_json::Error>())
            .expect("I/O error is in the chain");
        assert!(source.is_io());
        assert_eq!(error.to_string(), "closed");
    }

    #[test]
    fn back_into_serde_json() {
        let error = Error::from(io::Error::other("closed"));
        let inner = serde_json::Error::from(error);
        assert!(inner.is_io());
    }
}
