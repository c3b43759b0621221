//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for site-search operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the crate: loading files and
/// talking to the key-value store. The in-page behavior itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::SiteConfig`].
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A JSON document (page snapshot or storage file) failed to parse.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A theme name other than `dark` or `light`.
    #[error("Unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),

    /// A strategy name other than `flat` or `sectioned`.
    #[error("Unknown search strategy '{0}' (expected 'flat' or 'sectioned')")]
    UnknownStrategy(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
