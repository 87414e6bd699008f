//! Configuration options for JSON5 parsing and serialization.
//!
//! - [`Json5Options`]: the option record read by the parser and the serializer
//! - [`DuplicateBehavior`]: what happens when an object repeats a key
//!
//! A process-wide default can be installed once with [`set_default_options`];
//! every entry point also has a `_with_options` variant taking the record
//! explicitly.
//!
//! ## Examples
//!
//! ```rust
//! use serde_json5::{parse_with_options, DuplicateBehavior, Json5Options};
//!
//! let options = Json5Options::new()
//!     .with_binary_literals(true)
//!     .with_duplicate_behavior(DuplicateBehavior::LastWins);
//!
//! let value = parse_with_options("{mask: 0b1010, mask: 0b0101}", &options).unwrap();
//! assert_eq!(value["mask"].as_i64(), Some(5));
//! ```

use std::sync::OnceLock;

/// Policy for repeated keys inside one object.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{parse_with_options, DuplicateBehavior, Json5Options};
///
/// let collect = Json5Options::new().with_duplicate_behavior(DuplicateBehavior::Collect);
/// let value = parse_with_options(r#"{"a":1,"a":2}"#, &collect).unwrap();
/// assert_eq!(value.to_string(), r#"{"a":[1,2]}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DuplicateBehavior {
    /// A repeated key is a syntax error.
    #[default]
    Unique,
    /// The last occurrence replaces earlier ones.
    LastWins,
    /// All occurrences are gathered into an array, in source order.
    Collect,
}

/// Options read by the parser and the serializer.
///
/// Fields are public; the `with_*` methods are a builder-style shorthand.
///
/// # Examples
///
/// ```rust
/// use serde_json5::Json5Options;
///
/// let strict = Json5Options::new()
///     .with_nan(false)
///     .with_infinity(false)
///     .with_invalid_surrogates(false);
/// assert!(!strict.allow_nan);
///
/// let everything = Json5Options::all_extensions();
/// assert!(everything.allow_hex_floating_literals);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Json5Options {
    /// Master switch for reading strings and integers back as instants.
    pub parse_instants: bool,
    pub parse_string_instants: bool,
    pub parse_unix_instants: bool,
    /// Write instants as epoch seconds instead of RFC 3339 strings.
    pub stringify_unix_instants: bool,
    /// Escape every character above U+007F when serializing.
    pub stringify_ascii: bool,
    /// Quote serialized strings and keys with `'` instead of `"`.
    pub quote_single: bool,
    pub allow_nan: bool,
    pub allow_infinity: bool,
    /// When `false`, an unpaired surrogate escape is a syntax error.
    pub allow_invalid_surrogates: bool,
    pub allow_binary_literals: bool,
    pub allow_octal_literals: bool,
    pub allow_hex_floating_literals: bool,
    /// `_` between digits, as in `1_000`.
    pub allow_java_digit_separators: bool,
    /// `'` between digits, as in `1'000`.
    pub allow_c_digit_separators: bool,
    /// `\UHHHHHHHH` escapes in strings and member names.
    pub allow_long_unicode_escapes: bool,
    pub duplicate_behavior: DuplicateBehavior,
    /// Ignore anything after the root value.
    pub allow_trailing_data: bool,
}

impl Default for Json5Options {
    fn default() -> Self {
        Json5Options {
            parse_instants: true,
            parse_string_instants: true,
            parse_unix_instants: true,
            stringify_unix_instants: false,
            stringify_ascii: false,
            quote_single: false,
            allow_nan: true,
            allow_infinity: true,
            allow_invalid_surrogates: true,
            allow_binary_literals: false,
            allow_octal_literals: false,
            allow_hex_floating_literals: false,
            allow_java_digit_separators: false,
            allow_c_digit_separators: false,
            allow_long_unicode_escapes: false,
            duplicate_behavior: DuplicateBehavior::Unique,
            allow_trailing_data: false,
        }
    }
}

impl Json5Options {
    /// Creates the default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{DuplicateBehavior, Json5Options};
    ///
    /// let options = Json5Options::new();
    /// assert!(options.allow_nan);
    /// assert!(!options.allow_binary_literals);
    /// assert_eq!(options.duplicate_behavior, DuplicateBehavior::Unique);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with every numeric and escape extension switched on.
    #[must_use]
    pub fn all_extensions() -> Self {
        Json5Options {
            allow_binary_literals: true,
            allow_octal_literals: true,
            allow_hex_floating_literals: true,
            allow_java_digit_separators: true,
            allow_c_digit_separators: true,
            allow_long_unicode_escapes: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_parse_instants(mut self, value: bool) -> Self {
        self.parse_instants = value;
        self
    }

    #[must_use]
    pub fn with_parse_string_instants(mut self, value: bool) -> Self {
        self.parse_string_instants = value;
        self
    }

    #[must_use]
    pub fn with_parse_unix_instants(mut self, value: bool) -> Self {
        self.parse_unix_instants = value;
        self
    }

    /// Writes instants as epoch seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use serde_json5::{stringify, Json5Options, Value};
    ///
    /// let instant = Value::Instant(Utc.timestamp_opt(1_000_000_000, 0).unwrap());
    /// let unix = Json5Options::new().with_stringify_unix_instants(true);
    /// assert_eq!(stringify(&instant, 0, &unix).unwrap(), "1000000000");
    /// assert_eq!(
    ///     stringify(&instant, 0, &Json5Options::new()).unwrap(),
    ///     "\"2001-09-09T01:46:40Z\""
    /// );
    /// ```
    #[must_use]
    pub fn with_stringify_unix_instants(mut self, value: bool) -> Self {
        self.stringify_unix_instants = value;
        self
    }

    /// Escapes all non-ASCII characters on output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{quote, Json5Options};
    ///
    /// let ascii = Json5Options::new().with_stringify_ascii(true);
    /// assert_eq!(quote("é", &ascii), "\"\\u00E9\"");
    /// ```
    #[must_use]
    pub fn with_stringify_ascii(mut self, value: bool) -> Self {
        self.stringify_ascii = value;
        self
    }

    /// Uses single quotes on output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{quote, Json5Options};
    ///
    /// let single = Json5Options::new().with_quote_single(true);
    /// assert_eq!(quote("it's", &single), "'it\\'s'");
    /// ```
    #[must_use]
    pub fn with_quote_single(mut self, value: bool) -> Self {
        self.quote_single = value;
        self
    }

    #[must_use]
    pub fn with_nan(mut self, value: bool) -> Self {
        self.allow_nan = value;
        self
    }

    #[must_use]
    pub fn with_infinity(mut self, value: bool) -> Self {
        self.allow_infinity = value;
        self
    }

    #[must_use]
    pub fn with_invalid_surrogates(mut self, value: bool) -> Self {
        self.allow_invalid_surrogates = value;
        self
    }

    #[must_use]
    pub fn with_binary_literals(mut self, value: bool) -> Self {
        self.allow_binary_literals = value;
        self
    }

    #[must_use]
    pub fn with_octal_literals(mut self, value: bool) -> Self {
        self.allow_octal_literals = value;
        self
    }

    /// Accepts hexadecimal floating-point literals such as `0xA.8p+1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{parse_with_options, Json5Options};
    ///
    /// let options = Json5Options::new().with_hex_floating_literals(true);
    /// let value = parse_with_options("0xA.8p+1", &options).unwrap();
    /// assert_eq!(value.to_string(), "21.0");
    /// ```
    #[must_use]
    pub fn with_hex_floating_literals(mut self, value: bool) -> Self {
        self.allow_hex_floating_literals = value;
        self
    }

    #[must_use]
    pub fn with_java_digit_separators(mut self, value: bool) -> Self {
        self.allow_java_digit_separators = value;
        self
    }

    #[must_use]
    pub fn with_c_digit_separators(mut self, value: bool) -> Self {
        self.allow_c_digit_separators = value;
        self
    }

    #[must_use]
    pub fn with_long_unicode_escapes(mut self, value: bool) -> Self {
        self.allow_long_unicode_escapes = value;
        self
    }

    #[must_use]
    pub fn with_duplicate_behavior(mut self, value: DuplicateBehavior) -> Self {
        self.duplicate_behavior = value;
        self
    }

    #[must_use]
    pub fn with_trailing_data(mut self, value: bool) -> Self {
        self.allow_trailing_data = value;
        self
    }

    /// Whether `c` may separate digits under these options.
    pub(crate) const fn is_digit_separator(&self, c: char) -> bool {
        (c == '_' && self.allow_java_digit_separators) || (c == '\'' && self.allow_c_digit_separators)
    }
}

static DEFAULT_OPTIONS: OnceLock<Json5Options> = OnceLock::new();

/// Installs the process-wide default options.
///
/// The default can be set once, normally at startup. Later calls return the
/// rejected options as `Err`. Reads through [`default_options`] before this is
/// called pin the built-in defaults.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{default_options, set_default_options, Json5Options};
///
/// let _ = set_default_options(Json5Options::new().with_quote_single(true));
/// assert!(set_default_options(Json5Options::new()).is_err());
/// assert!(default_options().quote_single);
/// ```
pub fn set_default_options(options: Json5Options) -> Result<(), Json5Options> {
    DEFAULT_OPTIONS.set(options)
}

/// Returns the process-wide default options.
pub fn default_options() -> &'static Json5Options {
    DEFAULT_OPTIONS.get_or_init(Json5Options::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Json5Options::default();
        assert!(options.parse_instants);
        assert!(options.parse_string_instants);
        assert!(options.parse_unix_instants);
        assert!(!options.stringify_unix_instants);
        assert!(!options.stringify_ascii);
        assert!(!options.quote_single);
        assert!(options.allow_nan);
        assert!(options.allow_infinity);
        assert!(options.allow_invalid_surrogates);
        assert!(!options.allow_long_unicode_escapes);
        assert!(!options.allow_trailing_data);
        assert_eq!(options.duplicate_behavior, DuplicateBehavior::Unique);
    }

    #[test]
    fn test_builder_chain() {
        let options = Json5Options::new()
            .with_java_digit_separators(true)
            .with_trailing_data(true)
            .with_duplicate_behavior(DuplicateBehavior::Collect);
        assert!(options.is_digit_separator('_'));
        assert!(!options.is_digit_separator('\''));
        assert!(options.allow_trailing_data);
        assert_eq!(options.duplicate_behavior, DuplicateBehavior::Collect);
    }

    #[test]
    fn test_all_extensions() {
        let options = Json5Options::all_extensions();
        assert!(options.allow_binary_literals);
        assert!(options.allow_octal_literals);
        assert!(options.is_digit_separator('_'));
        assert!(options.is_digit_separator('\''));
        assert!(options.allow_long_unicode_escapes);
        assert_eq!(options.duplicate_behavior, DuplicateBehavior::Unique);
    }
}
