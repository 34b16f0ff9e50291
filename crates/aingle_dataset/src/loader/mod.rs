//! Graph loaders
//!
//! The builder never reads sources itself; it asks an injected
//! [`GraphLoader`] for each one. Two loaders ship with the crate:
//! - Memory: a fixed table of graphs (testing/embedding)
//! - File: Turtle and N-Triples files behind `file:` IRIs (`rdf` feature)

pub mod memory;

#[cfg(feature = "rdf")]
pub mod file;

use crate::{Graph, SourceRef};
use std::sync::Arc;
use thiserror::Error;

/// Trait for graph loaders
pub trait GraphLoader: Send + Sync {
    /// The loader's failure type; the builder wraps it into
    /// [`Error::Load`](crate::Error::Load).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce the graph behind a resolved source
    fn load(&self, source: &SourceRef) -> Result<Graph, Self::Error>;
}

impl<L: GraphLoader + ?Sized> GraphLoader for &L {
    type Error = L::Error;

    fn load(&self, source: &SourceRef) -> Result<Graph, Self::Error> {
        (**self).load(source)
    }
}

impl<L: GraphLoader + ?Sized> GraphLoader for Arc<L> {
    type Error = L::Error;

    fn load(&self, source: &SourceRef) -> Result<Graph, Self::Error> {
        (**self).load(source)
    }
}

/// Errors reported by the loaders shipped with this crate.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Nothing is registered or stored under the source.
    #[error("not found: {0}")]
    NotFound(String),

    /// The IRI scheme cannot be served by this loader.
    #[error("unsupported scheme '{scheme}' in <{iri}>")]
    UnsupportedScheme { scheme: String, iri: String },

    /// The source could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but is not valid RDF.
    #[error("parse error in <{iri}>: {message}")]
    Parse { iri: String, message: String },
}

// Re-exports
pub use memory::MemoryLoader;

#[cfg(feature = "rdf")]
pub use self::file::{FileLoader, RdfFormat};
