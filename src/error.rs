//! Errors produced while parsing, querying and modifying TOML documents.
//!
//! Every fallible operation in this crate returns [`Error`]. Nothing here
//! terminates the process; the binary maps [`ErrorKind`] to an exit code.

use std::io;
use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that can occur while working with a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path expression was empty, or a mutation targeted the document root.
    #[error("query path cannot be empty")]
    EmptyPath,

    /// The final key of a path is absent.
    #[error("key '{key}' not found")]
    KeyNotFound {
        /// The segment that could not be resolved
        key: String,
    },

    /// A path tried to step into an array or a scalar.
    #[error("cannot navigate into {type_name} at '{path}'")]
    NotNavigable {
        /// Type name of the value that blocked navigation
        type_name: &'static str,
        /// Dotted path up to and including the blocking segment
        path: String,
    },

    /// An intermediate key of a delete path is absent.
    #[error("path not found: {path}")]
    PathNotFound {
        /// Dotted path up to and including the missing segment
        path: String,
    },

    /// A set or delete expression is malformed.
    #[error("invalid {what} expression: {expr} (expected: {expected})")]
    InvalidSyntax {
        /// Which kind of expression ("set" or "delete")
        what: &'static str,
        /// The offending expression text
        expr: String,
        /// A short example of the accepted form
        expected: &'static str,
    },

    /// The input is not a valid TOML document.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Reading or writing a file failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A file path was rejected by the safety gate.
    #[error("{reason}: {}", path.display())]
    Security {
        /// The rejected path
        path: PathBuf,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Encoding a value into an output format failed.
    #[error("failed to convert to {format}: {message}")]
    Encode {
        /// Target format name
        format: &'static str,
        /// Encoder message
        message: String,
    },

    /// A requested feature does not exist.
    #[error("{0} is not implemented")]
    Unsupported(&'static str),
}

/// Coarse classification of [`Error`] used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed query, set or delete expression.
    Syntax,
    /// Navigation failed on a well-formed path.
    Navigation,
    /// The document could not be parsed.
    Parse,
    /// File system failure.
    Io,
    /// Path safety violation.
    Security,
    /// Output encoding failure.
    Encode,
    /// Unimplemented feature requested.
    Unsupported,
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn encode(format: &'static str, err: impl core::fmt::Display) -> Self {
        Error::Encode {
            format,
            message: err.to_string(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyPath | Error::InvalidSyntax { .. } => ErrorKind::Syntax,
            Error::KeyNotFound { .. }
            | Error::NotNavigable { .. }
            | Error::PathNotFound { .. } => ErrorKind::Navigation,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Io { .. } => ErrorKind::Io,
            Error::Security { .. } => ErrorKind::Security,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::EmptyPath.to_string(), "query path cannot be empty");
        assert_eq!(
            Error::KeyNotFound { key: "name".into() }.to_string(),
            "key 'name' not found"
        );
        assert_eq!(
            Error::NotNavigable {
                type_name: "array",
                path: "array.0".into()
            }
            .to_string(),
            "cannot navigate into array at 'array.0'"
        );
        assert_eq!(
            Error::PathNotFound { path: "a".into() }.to_string(),
            "path not found: a"
        );
        assert_eq!(
            Error::Security {
                path: PathBuf::from("../x.toml"),
                reason: "directory traversal not allowed"
            }
            .to_string(),
            "directory traversal not allowed: ../x.toml"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Error::EmptyPath.kind(), ErrorKind::Syntax);
        assert_eq!(
            Error::PathNotFound { path: "a".into() }.kind(),
            ErrorKind::Navigation
        );
        assert_eq!(
            Error::Unsupported("schema validation").kind(),
            ErrorKind::Unsupported
        );
    }
}
