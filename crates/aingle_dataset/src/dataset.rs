//! Datasets: a default graph plus a collection of named graphs.
//!
//! Three ownership modes are offered, each as its own type or constructor:
//!
//! - [`Dataset`] returned by [`DatasetBuilder`](crate::DatasetBuilder) owns
//!   its graphs outright.
//! - [`Dataset::share_structure`] copies the set of graph names of another
//!   dataset but shares the graphs themselves (`Arc` leaves).
//! - [`DatasetView`] and [`GraphView`] borrow a structure owned elsewhere and
//!   copy nothing.
//!
//! All three expose the read API of [`DatasetGraph`].

use crate::Graph;
use indexmap::IndexMap;
use std::sync::Arc;

/// Read access to a default graph and a set of named graphs.
pub trait DatasetGraph {
    /// The default (unnamed) graph. Always present, possibly empty.
    fn default_graph(&self) -> &Graph;

    /// Looks up a named graph by its IRI.
    fn named_graph(&self, name: &str) -> Option<&Graph>;

    /// Enumerates the names of all named graphs.
    fn graph_names(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns `true` if a graph with this name exists.
    fn contains_graph(&self, name: &str) -> bool {
        self.named_graph(name).is_some()
    }

    /// The number of named graphs.
    fn graph_count(&self) -> usize {
        self.graph_names().count()
    }
}

/// An immutable RDF dataset.
///
/// # Examples
///
/// ```
/// use aingle_dataset::{Dataset, DatasetGraph, Graph};
///
/// let ds = Dataset::empty();
/// assert!(ds.default_graph().is_empty());
/// assert_eq!(ds.graph_count(), 0);
///
/// let ds = Dataset::from_default_graph(Graph::new());
/// assert!(ds.named_graph("http://example.org/g").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    default: Arc<Graph>,
    named: IndexMap<String, Arc<Graph>>,
}

impl Dataset {
    /// A dataset with an empty default graph and no named graphs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a single graph as the default graph of a new dataset.
    ///
    /// The dataset takes ownership of the graph.
    pub fn from_default_graph(graph: Graph) -> Self {
        Self {
            default: Arc::new(graph),
            named: IndexMap::new(),
        }
    }

    /// Wraps a graph that is already shared as the default graph.
    ///
    /// The graph is not copied: every holder of `graph` sees the same triples.
    pub fn from_shared_default_graph(graph: Arc<Graph>) -> Self {
        Self {
            default: graph,
            named: IndexMap::new(),
        }
    }

    pub(crate) fn from_parts(default: Graph, named: IndexMap<String, Graph>) -> Self {
        Self {
            default: Arc::new(default),
            named: named
                .into_iter()
                .map(|(name, graph)| (name, Arc::new(graph)))
                .collect(),
        }
    }

    /// Shallow structural clone: the set of graph names is copied, the
    /// graphs are shared with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aingle_dataset::{Dataset, Graph};
    ///
    /// let original = Dataset::from_default_graph(Graph::new());
    /// let copy = Dataset::share_structure(&original);
    /// assert!(copy.shares_default_graph_with(&original));
    /// ```
    pub fn share_structure(other: &Dataset) -> Self {
        Self {
            default: Arc::clone(&other.default),
            named: other
                .named
                .iter()
                .map(|(name, graph)| (name.clone(), Arc::clone(graph)))
                .collect(),
        }
    }

    /// Copies any dataset structure into an owned dataset, cloning every graph.
    pub fn from_dataset_graph<D: DatasetGraph + ?Sized>(source: &D) -> Self {
        let named = source
            .graph_names()
            .filter_map(|name| {
                source
                    .named_graph(name)
                    .map(|g| (name.to_string(), Arc::new(g.clone())))
            })
            .collect();
        Self {
            default: Arc::new(source.default_graph().clone()),
            named,
        }
    }

    /// Replaces the default graph, keeping the named graphs shared.
    pub fn with_default_graph(self, graph: Graph) -> Self {
        Self {
            default: Arc::new(graph),
            named: self.named,
        }
    }

    /// The shared handle of the default graph.
    pub fn default_graph_handle(&self) -> Arc<Graph> {
        Arc::clone(&self.default)
    }

    /// The shared handle of a named graph.
    pub fn named_graph_handle(&self, name: &str) -> Option<Arc<Graph>> {
        self.named.get(name).map(Arc::clone)
    }

    /// Returns `true` if both datasets hold the very same default graph.
    pub fn shares_default_graph_with(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.default, &other.default)
    }

    /// Iterates over `(name, graph)` pairs.
    pub fn named_graphs(&self) -> impl Iterator<Item = (&str, &Graph)> {
        self.named.iter().map(|(name, g)| (name.as_str(), g.as_ref()))
    }

    /// Total number of triples across the default and named graphs.
    pub fn triple_count(&self) -> usize {
        self.default.len() + self.named.values().map(|g| g.len()).sum::<usize>()
    }

    /// A zero-copy view of this dataset.
    pub fn view(&self) -> DatasetView<'_, Self> {
        DatasetView::new(self)
    }
}

impl DatasetGraph for Dataset {
    fn default_graph(&self) -> &Graph {
        &self.default
    }

    fn named_graph(&self, name: &str) -> Option<&Graph> {
        self.named.get(name).map(|g| g.as_ref())
    }

    fn graph_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.named.keys().map(String::as_str))
    }

    fn graph_count(&self) -> usize {
        self.named.len()
    }
}

/// A non-owning adapter presenting any [`DatasetGraph`] as a dataset.
///
/// Nothing is copied; the view lives as long as the borrow it wraps.
#[derive(Debug)]
pub struct DatasetView<'a, D: ?Sized> {
    inner: &'a D,
}

impl<'a, D: ?Sized> Clone for DatasetView<'a, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, D: ?Sized> Copy for DatasetView<'a, D> {}

impl<'a, D: DatasetGraph + ?Sized> DatasetView<'a, D> {
    /// Wraps `inner` without copying.
    pub fn new(inner: &'a D) -> Self {
        Self { inner }
    }

    /// The wrapped structure.
    pub fn inner(&self) -> &'a D {
        self.inner
    }

    /// Materializes an owned copy of the viewed structure.
    pub fn to_dataset(&self) -> Dataset {
        Dataset::from_dataset_graph(self.inner)
    }
}

impl<'a, D: DatasetGraph + ?Sized> DatasetGraph for DatasetView<'a, D> {
    fn default_graph(&self) -> &Graph {
        self.inner.default_graph()
    }

    fn named_graph(&self, name: &str) -> Option<&Graph> {
        self.inner.named_graph(name)
    }

    fn graph_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.inner.graph_names()
    }

    fn graph_count(&self) -> usize {
        self.inner.graph_count()
    }
}

/// A non-owning dataset whose default graph is a borrowed, externally
/// owned [`Graph`] and which has no named graphs.
///
/// # Examples
///
/// ```
/// use aingle_dataset::{DatasetGraph, Graph, GraphView};
///
/// let graph = Graph::new();
/// let view = GraphView::new(&graph);
/// assert!(std::ptr::eq(view.default_graph(), &graph));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    graph: &'a Graph,
}

impl<'a> GraphView<'a> {
    /// Wraps `graph` as a default graph without copying it.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl<'a> DatasetGraph for GraphView<'a> {
    fn default_graph(&self) -> &Graph {
        self.graph
    }

    fn named_graph(&self, _name: &str) -> Option<&Graph> {
        None
    }

    fn graph_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::empty())
    }

    fn graph_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Term, Triple};

    fn graph_with(o: &str) -> Graph {
        let t = Triple::new(Term::iri("urn:s"), Term::iri("urn:p"), Term::literal(o)).unwrap();
        vec![t].into_iter().collect()
    }

    fn sample() -> Dataset {
        let mut named = IndexMap::new();
        named.insert("urn:g1".to_string(), graph_with("1"));
        named.insert("urn:g2".to_string(), graph_with("2"));
        Dataset::from_parts(graph_with("d"), named)
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::empty();
        assert!(ds.default_graph().is_empty());
        assert_eq!(ds.graph_count(), 0);
        assert_eq!(ds.graph_names().count(), 0);
        assert_eq!(ds.triple_count(), 0);
    }

    #[test]
    fn test_lookup_and_names() {
        let ds = sample();
        assert_eq!(ds.graph_names().collect::<Vec<_>>(), vec!["urn:g1", "urn:g2"]);
        assert!(ds.contains_graph("urn:g1"));
        assert!(!ds.contains_graph("urn:g3"));
        assert_eq!(ds.named_graph("urn:g2"), Some(&graph_with("2")));
        assert_eq!(ds.triple_count(), 3);
    }

    #[test]
    fn test_share_structure_reuses_graphs() {
        let ds = sample();
        let shared = Dataset::share_structure(&ds);

        assert!(shared.shares_default_graph_with(&ds));
        let a = ds.named_graph_handle("urn:g1").unwrap();
        let b = shared.named_graph_handle("urn:g1").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_with_default_graph_keeps_named_graphs() {
        let ds = sample();
        let before = ds.named_graph_handle("urn:g1").unwrap();

        let replaced = Dataset::share_structure(&ds).with_default_graph(graph_with("new"));
        assert_eq!(replaced.default_graph(), &graph_with("new"));
        assert_eq!(ds.default_graph(), &graph_with("d"));
        assert!(Arc::ptr_eq(
            &before,
            &replaced.named_graph_handle("urn:g1").unwrap()
        ));
    }

    #[test]
    fn test_view_is_zero_copy() {
        let ds = sample();
        let view = DatasetView::new(&ds);
        assert!(std::ptr::eq(view.default_graph(), ds.default_graph()));
        assert!(std::ptr::eq(
            view.named_graph("urn:g1").unwrap(),
            ds.named_graph("urn:g1").unwrap()
        ));
        assert_eq!(view.graph_count(), 2);
    }

    #[test]
    fn test_view_over_trait_object() {
        let ds = sample();
        let dyn_ds: &dyn DatasetGraph = &ds;
        let view = DatasetView::new(dyn_ds);
        let owned = view.to_dataset();
        assert_eq!(owned.default_graph(), ds.default_graph());
        assert!(!owned.shares_default_graph_with(&ds));
    }

    #[test]
    fn test_graph_view_sees_owner_mutations() {
        let mut graph = graph_with("1");
        assert_eq!(GraphView::new(&graph).default_graph().len(), 1);

        graph.union_with(&graph_with("2"));
        let view = GraphView::new(&graph);
        assert_eq!(view.default_graph().len(), 2);
        assert_eq!(view.graph_count(), 0);
    }

    #[test]
    fn test_shared_default_graph() {
        let graph = Arc::new(graph_with("x"));
        let a = Dataset::from_shared_default_graph(Arc::clone(&graph));
        let b = Dataset::from_shared_default_graph(graph);
        assert!(a.shares_default_graph_with(&b));
    }
}
