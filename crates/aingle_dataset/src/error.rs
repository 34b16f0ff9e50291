//! Error types for AIngle Dataset.
//!
//! Every fallible operation in the crate returns [`Error`]. Loader
//! implementations report their own error type, which the builder wraps
//! into [`Error::Load`] together with the locator that failed.

use thiserror::Error;

/// A boxed error as produced by a [`GraphLoader`](crate::GraphLoader).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A specialized `Result` type for dataset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the errors that can occur while composing datasets or encoding terms.
#[derive(Error, Debug)]
pub enum Error {
    /// A source could not be resolved, retrieved or parsed.
    ///
    /// Fatal to the enclosing build: no partially loaded dataset is returned.
    #[error("failed to load <{locator}>: {source}")]
    Load {
        /// The locator as given by the caller.
        locator: String,
        /// The loader's own error.
        #[source]
        source: BoxError,
    },

    /// A declarative description is missing, ambiguous or malformed, or a
    /// builder configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// A function was applied to a term of the wrong kind.
    #[error("type error: {0}")]
    Type(String),

    /// A triple violates the RDF position restrictions.
    #[error("invalid triple: {0}")]
    InvalidTriple(String),

    /// An error from the underlying I/O system.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wraps a loader failure for `locator`.
    pub fn load(locator: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Load {
            locator: locator.into(),
            source: source.into(),
        }
    }

    /// Returns the failing locator for [`Error::Load`].
    pub fn locator(&self) -> Option<&str> {
        match self {
            Self::Load { locator, .. } => Some(locator),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
