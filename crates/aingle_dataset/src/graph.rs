//! In-memory RDF graphs.
//!
//! A [`Graph`] is a set of [`Triple`]s: inserting a triple that is already
//! present is a no-op, and two graphs are equal when they hold the same
//! triples regardless of insertion order.

use crate::vocab::RDF_TYPE;
use crate::{Result, Term, Triple};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A set of triples.
///
/// # Examples
///
/// ```
/// use aingle_dataset::{Graph, Term, Triple};
///
/// # fn main() -> Result<(), aingle_dataset::Error> {
/// let mut g = Graph::new();
/// let t = Triple::new(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::literal("Alice"),
/// )?;
///
/// assert!(g.insert(t.clone()));
/// assert!(!g.insert(t)); // duplicates collapse
/// assert_eq!(g.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    triples: IndexSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` triples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triples: IndexSet::with_capacity(capacity),
        }
    }

    /// Inserts a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Builds a triple from its parts and inserts it.
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term) -> Result<bool> {
        Ok(self.insert(Triple::new(subject, predicate, object)?))
    }

    /// Removes a triple. Returns `true` if it was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.shift_remove(triple)
    }

    /// Adds every triple of `other` to this graph (set union).
    pub fn union_with(&mut self, other: &Graph) {
        self.triples.extend(other.triples.iter().cloned());
    }

    /// Returns `true` if the triple is present.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// The number of distinct triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if the graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns `true` if any triple mentions a blank node.
    pub fn has_blank_nodes(&self) -> bool {
        self.triples.iter().any(Triple::has_blank_node)
    }

    /// Rewrites every blank node label with `relabel`.
    ///
    /// `relabel` must be injective for the graph to keep its shape.
    pub fn relabel_blank_nodes(self, mut relabel: impl FnMut(&str) -> String) -> Self {
        self.triples
            .into_iter()
            .map(|t| t.relabel_blank_nodes(&mut relabel))
            .collect()
    }

    /// Iterates over the triples.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterates over the triples matching a pattern; `None` is a wildcard.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Term>,
        predicate: Option<&'a Term>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.matches(subject, predicate, object))
    }

    /// Objects of all triples with the given subject and predicate IRI.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        let predicate = Term::iri(predicate);
        self.triples
            .iter()
            .filter(move |t| t.subject() == subject && *t.predicate() == predicate)
            .map(Triple::object)
    }

    /// Distinct subjects declared `rdf:type` of `type_iri`, in insertion order.
    pub fn subjects_of_type(&self, type_iri: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| {
                t.predicate().as_iri() == Some(RDF_TYPE) && t.object().as_iri() == Some(type_iri)
            })
            .map(Triple::subject)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = indexmap::set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
