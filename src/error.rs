//! Error types for JSON5 parsing and serialization.
//!
//! Every failure in this crate is reported through a single [`Error`] enum.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: malformed input, always carrying a [`Position`]
//! - **Configuration Errors**: a feature was used while its [`Json5Options`](crate::Json5Options) flag is off
//! - **Accessor Errors**: a typed getter on a [`Json5Map`](crate::Json5Map) found a missing key or the wrong kind of value
//! - **Custom**: messages raised through the serde data model
//!
//! I/O failures from the underlying reader are reported as syntax errors whose
//! [`source`](std::error::Error::source) is the original [`std::io::Error`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_json5::{parse, Error};
//!
//! let err = parse("{a: 1,, }").unwrap_err();
//! assert!(err.is_syntax());
//! assert_eq!(err.position().map(|p| p.line), Some(1));
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Location of the parser cursor when an error was raised.
///
/// `index` is the zero-based index of the last character read, `character` the
/// column within the current line and `line` the one-based line number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: u64,
    pub character: u64,
    pub line: u64,
}

impl Position {
    /// Position of a cursor that has not read anything yet.
    #[must_use]
    pub const fn start() -> Self {
        Position {
            index: 0,
            character: 0,
            line: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at index {}, character {}, line {}",
            self.index, self.character, self.line
        )
    }
}

/// Represents all possible errors raised while parsing or serializing JSON5.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed input.
    #[error("{msg}, {position}")]
    Syntax {
        msg: String,
        position: Position,
        #[source]
        source: Option<Arc<io::Error>>,
    },

    /// A literal or value that the active options forbid.
    #[error("{msg}{}", .position.map(|p| format!(", {p}")).unwrap_or_default())]
    Configuration {
        msg: String,
        position: Option<Position>,
    },

    /// A typed accessor was asked for a key that is not present.
    #[error("Key \"{0}\" not found")]
    MissingKey(String),

    /// A typed accessor found a value of the wrong kind.
    #[error("Value at \"{key}\" is not {expected}")]
    TypeMismatch { key: String, expected: String },

    /// Custom error raised through serde.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{Error, Position};
    ///
    /// let pos = Position { index: 4, character: 5, line: 1 };
    /// let err = Error::syntax("Expected ':' after a key", pos);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Expected ':' after a key, at index 4, character 5, line 1"
    /// );
    /// ```
    pub fn syntax<T: fmt::Display>(msg: T, position: Position) -> Self {
        Error::Syntax {
            msg: msg.to_string(),
            position,
            source: None,
        }
    }

    /// Wraps an I/O failure of the character source.
    pub fn io(err: io::Error, position: Position) -> Self {
        Error::Syntax {
            msg: err.to_string(),
            position,
            source: Some(Arc::new(err)),
        }
    }

    /// Creates a configuration error raised while reading input.
    pub fn configuration<T: fmt::Display>(msg: T, position: Position) -> Self {
        Error::Configuration {
            msg: msg.to_string(),
            position: Some(position),
        }
    }

    /// Creates a configuration error that has no input position, such as
    /// refusing to serialize `NaN`.
    pub fn disallowed<T: fmt::Display>(msg: T) -> Self {
        Error::Configuration {
            msg: msg.to_string(),
            position: None,
        }
    }

    pub fn missing_key(key: &str) -> Self {
        Error::MissingKey(key.to_string())
    }

    pub fn type_mismatch(key: &str, expected: &str) -> Self {
        Error::TypeMismatch {
            key: key.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for malformed-input errors, including wrapped I/O failures.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    /// Returns the input position the error refers to, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Syntax { position, .. } => Some(*position),
            Error::Configuration { position, .. } => *position,
            _ => None,
        }
    }

    /// Returns the message without the position suffix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Error::Syntax { msg, .. } | Error::Configuration { msg, .. } => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_syntax_display() {
        let err = Error::syntax(
            "Unexpected end of data",
            Position {
                index: 12,
                character: 3,
                line: 2,
            },
        );
        assert_eq!(
            err.to_string(),
            "Unexpected end of data, at index 12, character 3, line 2"
        );
        assert!(err.is_syntax());
        assert!(!err.is_configuration());
        assert_eq!(err.message(), "Unexpected end of data");
    }

    #[test]
    fn test_configuration_display() {
        let err = Error::disallowed("Illegal NaN in JSON");
        assert_eq!(err.to_string(), "Illegal NaN in JSON");
        assert!(err.position().is_none());

        let err = Error::configuration("Binary literals are not allowed", Position::start());
        assert_eq!(
            err.to_string(),
            "Binary literals are not allowed, at index 0, character 0, line 1"
        );
    }

    #[test]
    fn test_io_source() {
        let err = Error::io(
            io::Error::new(io::ErrorKind::InvalidData, "bad byte"),
            Position::start(),
        );
        assert!(err.is_syntax());
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("bad byte"));
    }
}
