use crate::models::{InvalidPathError, ResourcePath};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by locate, select and configuration.
///
/// Every variant is fatal for the call that produced it; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid resource path: {0}")]
    InvalidPath(#[from] InvalidPathError),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("malformed URL {text:?}: {source}")]
    MalformedUrl {
        text: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to load configuration from {origin}: {source}")]
    InvalidConfig {
        origin: String,
        #[source]
        source: BoxError,
    },
    #[error("lookup of {path} by {locator} failed: {source}")]
    Lookup {
        path: String,
        locator: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ResolveError::Configuration(message.into())
    }

    pub fn malformed_url(text: impl Into<String>, source: url::ParseError) -> Self {
        ResolveError::MalformedUrl {
            text: text.into(),
            source,
        }
    }

    pub fn lookup(path: &ResourcePath, locator: &str, source: std::io::Error) -> Self {
        ResolveError::Lookup {
            path: path.to_string(),
            locator: locator.to_string(),
            source,
        }
    }

    /// Setup defects, as opposed to I/O failures during a lookup.
    pub fn is_configuration(&self) -> bool {
        !self.is_lookup()
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, ResolveError::Lookup { .. })
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
