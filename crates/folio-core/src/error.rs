//! Error types for the Folio core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Everything that can go wrong while loading config, content or preferences.
#[derive(Error, Debug)]
pub enum CoreError {
    /// `folio.toml` is missing, malformed or fails validation.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The content document is malformed or violates an invariant.
    #[error("Content error: {0}")]
    Content(String),

    /// A preference could not be read from or written to storage.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Reading a file from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document did not deserialize.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Layered config (file plus `FOLIO__` environment) failed to build.
    #[cfg(feature = "env")]
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Configuration error without an underlying cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Configuration error wrapping the error that caused it.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn content(message: impl Into<String>) -> Self {
        Self::Content(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
