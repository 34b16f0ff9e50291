//! In-memory loader
//!
//! Serves graphs from a table keyed by resolved IRI or by raw locator.

use super::{GraphLoader, LoaderError};
use crate::{Graph, SourceRef};
use std::collections::HashMap;

/// In-memory loader
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    graphs: HashMap<String, Graph>,
}

impl MemoryLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `graph` under `key`, returning the previous entry
    ///
    /// `key` is matched against the resolved IRI first, then the locator.
    pub fn insert(&mut self, key: impl Into<String>, graph: Graph) -> Option<Graph> {
        self.graphs.insert(key.into(), graph)
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, graph: Graph) -> Self {
        self.insert(key, graph);
        self
    }

    /// Number of registered graphs
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Whether no graph is registered
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

impl GraphLoader for MemoryLoader {
    type Error = LoaderError;

    fn load(&self, source: &SourceRef) -> Result<Graph, LoaderError> {
        self.graphs
            .get(source.iri())
            .or_else(|| self.graphs.get(source.locator()))
            .cloned()
            .ok_or_else(|| LoaderError::NotFound(source.iri().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Term, Triple};

    fn one_triple() -> Graph {
        vec![Triple::new(Term::iri("urn:a"), Term::iri("urn:b"), Term::literal("c")).unwrap()]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lookup_by_iri() {
        let loader = MemoryLoader::new().with("http://example.org/g", one_triple());
        let src = SourceRef::resolve("g", Some("http://example.org/")).unwrap();
        assert_eq!(loader.load(&src).unwrap(), one_triple());
    }

    #[test]
    fn test_lookup_by_locator() {
        let loader = MemoryLoader::new().with("g.ttl", one_triple());
        let src = SourceRef::resolve("g.ttl", None).unwrap();
        assert_eq!(loader.load(&src).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_source() {
        let loader = MemoryLoader::new();
        let src = SourceRef::resolve("urn:missing", None).unwrap();
        assert!(matches!(loader.load(&src), Err(LoaderError::NotFound(_))));
        assert!(loader.is_empty());
    }
}
