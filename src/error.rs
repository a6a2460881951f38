//! Errors raised while loading preferences, parsing locations and shell input
//!
//! Storage failures stop at [`crate::storage::StorageAdapter`]; the rest reach callers.

use snafu::Snafu;

/// Failure of a locale-switcher operation
#[derive(Debug, Snafu)]
pub enum Error {
    /// Unsupported locale code, or a shell command that doesn't parse
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Reading or writing `preferences.toml` / `config.toml`, or creating their directory
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// A preferences or config file that isn't valid TOML
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Preferences table could not be written back
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Page URL given on the command line is malformed
    #[snafu(display("URL error: {source}"))]
    Url { source: url::ParseError },

    /// Locale store disabled or its platform directory unknown
    #[snafu(display("Storage unavailable: {message}"))]
    StorageUnavailable { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        Error::Url { source }
    }
}

/// Result with this crate's [`Error`] as the default error
pub type Result<T, E = Error> = std::result::Result<T, E>;
