//! Declarative dataset construction.
//!
//! A configuration graph describes a dataset as an RDF resource. Assembly
//! finds the single resource of the requested type and hands it to a
//! [`Resolver`]. The resolver shipped here, [`Assembler`], dispatches on the
//! resource's `rdf:type` through an [`AssemblerRegistry`] filled in once at
//! start-up.
//!
//! The built-in `ja:RDFDataset` assembler understands descriptions like:
//!
//! ```text
//! @prefix ja: <http://jena.hpl.hp.com/2005/11/Assembler#> .
//!
//! <#dataset> a ja:RDFDataset ;
//!     ja:defaultGraph [ ja:externalContent <people.ttl> ] ;
//!     ja:namedGraph [
//!         ja:graphName <http://example.org/g1> ;
//!         ja:graph [ ja:content [ ja:externalContent <g1.ttl> ] ]
//!     ] .
//! ```

use crate::vocab::{ja, RDF_TYPE};
use crate::{Dataset, DatasetBuilder, Error, Graph, GraphLoader, Result, Term};
use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

/// Finds and materializes dataset descriptions in a configuration graph.
pub trait Resolver {
    /// Finds the unique resource of `rdf:type` `type_iri`.
    ///
    /// Returns `Ok(None)` if there is none and [`Error::Config`] if there are
    /// several.
    fn locate_root(&self, config: &Graph, type_iri: &str) -> Result<Option<Term>>;

    /// Builds the dataset described by `resource`.
    fn materialize(&self, config: &Graph, resource: &Term) -> Result<Dataset>;
}

/// Assembles the dataset described by the unique resource of type `type_iri`.
///
/// Fails with [`Error::Config`] naming the type when no such resource exists.
pub fn assemble<R: Resolver + ?Sized>(
    resolver: &R,
    config: &Graph,
    type_iri: &str,
) -> Result<Dataset> {
    let root = resolver
        .locate_root(config, type_iri)?
        .ok_or_else(|| Error::Config(format!("no root found for type <{}>", type_iri)))?;
    debug!("Assembling {} as <{}>", root, type_iri);
    resolver.materialize(config, &root)
}

/// A function that builds a dataset from its description.
pub type AssembleFn<L> = fn(&DatasetBuilder<L>, &Graph, &Term) -> Result<Dataset>;

/// Maps `rdf:type` IRIs to the functions that assemble them.
pub struct AssemblerRegistry<L> {
    assemblers: HashMap<String, AssembleFn<L>>,
}

impl<L: GraphLoader> AssemblerRegistry<L> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            assemblers: HashMap::new(),
        }
    }

    /// A registry with the built-in `ja:RDFDataset` assembler.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ja::RDF_DATASET, assemble_rdf_dataset::<L>);
        registry
    }

    /// Registers `f` for `type_iri`, returning any function it replaces.
    pub fn register(&mut self, type_iri: impl Into<String>, f: AssembleFn<L>) -> Option<AssembleFn<L>> {
        self.assemblers.insert(type_iri.into(), f)
    }

    /// The function registered for `type_iri`.
    pub fn get(&self, type_iri: &str) -> Option<AssembleFn<L>> {
        self.assemblers.get(type_iri).copied()
    }

    /// Returns `true` if something is registered for `type_iri`.
    pub fn contains(&self, type_iri: &str) -> bool {
        self.assemblers.contains_key(type_iri)
    }
}

impl<L: GraphLoader> Default for AssemblerRegistry<L> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<L> fmt::Debug for AssemblerRegistry<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.assemblers.keys()).finish()
    }
}

/// Registry-driven [`Resolver`] loading content through a [`DatasetBuilder`].
///
/// # Examples
///
/// ```
/// use aingle_dataset::vocab::{ja, RDF_TYPE};
/// use aingle_dataset::{Assembler, DatasetGraph, Graph, MemoryLoader, Term};
///
/// # fn main() -> Result<(), aingle_dataset::Error> {
/// let mut config = Graph::new();
/// config.add(Term::iri("urn:ds"), Term::iri(RDF_TYPE), Term::iri(ja::RDF_DATASET))?;
///
/// let assembler = Assembler::new(MemoryLoader::new());
/// let ds = assembler.assemble_dataset(&config)?;
/// assert!(ds.default_graph().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Assembler<L> {
    builder: DatasetBuilder<L>,
    registry: AssemblerRegistry<L>,
}

impl<L: GraphLoader> Assembler<L> {
    /// An assembler with the default registry.
    pub fn new(loader: L) -> Self {
        Self::with_registry(DatasetBuilder::new(loader), AssemblerRegistry::with_defaults())
    }

    /// An assembler with an explicit builder and registry.
    pub fn with_registry(builder: DatasetBuilder<L>, registry: AssemblerRegistry<L>) -> Self {
        Self { builder, registry }
    }

    /// The registry in use.
    pub fn registry(&self) -> &AssemblerRegistry<L> {
        &self.registry
    }

    /// Assembles the unique resource of type `type_iri`.
    pub fn assemble(&self, config: &Graph, type_iri: &str) -> Result<Dataset> {
        assemble(self, config, type_iri)
    }

    /// Assembles the unique `ja:RDFDataset` of `config`.
    pub fn assemble_dataset(&self, config: &Graph) -> Result<Dataset> {
        self.assemble(config, ja::RDF_DATASET)
    }

    /// Assembles the resource named `iri`, whatever other roots exist.
    pub fn assemble_resource(&self, config: &Graph, iri: &str) -> Result<Dataset> {
        self.materialize(config, &Term::iri(iri))
    }

    /// Loads the configuration graph from `locator`, then assembles its
    /// `ja:RDFDataset`.
    pub fn assemble_source(&self, locator: &str) -> Result<Dataset> {
        let config = self.builder.load_graph(locator, None)?;
        self.assemble_dataset(&config)
    }
}

impl<L: GraphLoader> Resolver for Assembler<L> {
    fn locate_root(&self, config: &Graph, type_iri: &str) -> Result<Option<Term>> {
        let roots = config.subjects_of_type(type_iri);
        match roots.as_slice() {
            [] => Ok(None),
            [root] => Ok(Some((*root).clone())),
            _ => Err(Error::Config(format!(
                "{} resources of type <{}>, expected one",
                roots.len(),
                type_iri
            ))),
        }
    }

    fn materialize(&self, config: &Graph, resource: &Term) -> Result<Dataset> {
        let assemble_fn = config
            .objects(resource, RDF_TYPE)
            .filter_map(Term::as_iri)
            .find_map(|type_iri| self.registry.get(type_iri))
            .ok_or_else(|| Error::Config(format!("no assembler for {}", resource)))?;
        assemble_fn(&self.builder, config, resource)
    }
}

fn assemble_rdf_dataset<L: GraphLoader>(
    builder: &DatasetBuilder<L>,
    config: &Graph,
    root: &Term,
) -> Result<Dataset> {
    let mut default_graph = Graph::new();
    for desc in config.objects(root, ja::DEFAULT_GRAPH) {
        default_graph.union_with(&graph_from_description(builder, config, desc)?);
    }

    let mut named = IndexMap::new();
    for desc in config.objects(root, ja::NAMED_GRAPH) {
        let name = match exactly_one(config, desc, ja::GRAPH_NAME)? {
            Term::Iri(iri) => iri.clone(),
            Term::Literal(lit) => lit.lexical_form().to_string(),
            other => {
                return Err(Error::Config(format!(
                    "graph name of {} must be an IRI, got {}",
                    desc, other
                )))
            }
        };
        let graph_desc = exactly_one(config, desc, ja::GRAPH)?;
        let graph = graph_from_description(builder, config, graph_desc)?;
        if named.insert(name.clone(), graph).is_some() {
            warn!("Named graph <{}> described more than once; keeping the last", name);
        }
    }

    Ok(Dataset::from_parts(default_graph, named))
}

/// Loads and merges every `ja:externalContent` of a graph description,
/// directly or through `ja:content`.
fn graph_from_description<L: GraphLoader>(
    builder: &DatasetBuilder<L>,
    config: &Graph,
    desc: &Term,
) -> Result<Graph> {
    let mut contents: Vec<&Term> = config.objects(desc, ja::EXTERNAL_CONTENT).collect();
    for content in config.objects(desc, ja::CONTENT) {
        contents.extend(config.objects(content, ja::EXTERNAL_CONTENT));
    }

    let locators = contents
        .into_iter()
        .map(|term| match term {
            Term::Iri(iri) => Ok(iri.as_str()),
            Term::Literal(lit) => Ok(lit.lexical_form()),
            Term::Blank(_) => Err(Error::Config(format!(
                "external content of {} must be an IRI or a string",
                desc
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    builder.load_union(&locators, None)
}

fn exactly_one<'a>(config: &'a Graph, subject: &'a Term, predicate: &str) -> Result<&'a Term> {
    let mut values = config.objects(subject, predicate);
    match (values.next(), values.next()) {
        (Some(value), None) => Ok(value),
        (None, _) => Err(Error::Config(format!("{} has no <{}>", subject, predicate))),
        (Some(_), Some(_)) => Err(Error::Config(format!(
            "{} has more than one <{}>",
            subject, predicate
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatasetGraph, MemoryLoader, Triple};

    fn data(o: &str) -> Graph {
        vec![Triple::new(Term::iri("urn:s"), Term::iri("urn:p"), Term::literal(o)).unwrap()]
            .into_iter()
            .collect()
    }

    fn loader() -> MemoryLoader {
        MemoryLoader::new()
            .with("urn:data:a", data("a"))
            .with("urn:data:b", data("b"))
            .with("urn:data:g1", data("g1"))
    }

    fn add(config: &mut Graph, s: Term, p: &str, o: Term) {
        config.add(s, Term::iri(p), o).unwrap();
    }

    fn dataset_config() -> Graph {
        let mut c = Graph::new();
        let ds = Term::iri("urn:ds");
        add(&mut c, ds.clone(), RDF_TYPE, Term::iri(ja::RDF_DATASET));

        add(&mut c, ds.clone(), ja::DEFAULT_GRAPH, Term::blank("d"));
        add(&mut c, Term::blank("d"), ja::EXTERNAL_CONTENT, Term::iri("urn:data:a"));
        add(&mut c, Term::blank("d"), ja::CONTENT, Term::blank("dc"));
        add(&mut c, Term::blank("dc"), ja::EXTERNAL_CONTENT, Term::literal("urn:data:b"));

        add(&mut c, ds, ja::NAMED_GRAPH, Term::blank("n1"));
        add(&mut c, Term::blank("n1"), ja::GRAPH_NAME, Term::iri("http://example.org/g1"));
        add(&mut c, Term::blank("n1"), ja::GRAPH, Term::blank("g1"));
        add(&mut c, Term::blank("g1"), ja::EXTERNAL_CONTENT, Term::iri("urn:data:g1"));
        c
    }

    #[test]
    fn test_assemble_rdf_dataset() {
        let assembler = Assembler::new(loader());
        let ds = assembler.assemble_dataset(&dataset_config()).unwrap();

        assert_eq!(ds.default_graph().len(), 2);
        assert_eq!(ds.graph_names().collect::<Vec<_>>(), vec!["http://example.org/g1"]);
        assert_eq!(ds.named_graph("http://example.org/g1"), Some(&data("g1")));
    }

    #[test]
    fn test_missing_root_names_the_type() {
        let assembler = Assembler::new(loader());
        let err = assembler.assemble(&Graph::new(), "urn:type:Missing").unwrap_err();
        assert!(matches!(&err, Error::Config(msg) if msg.contains("urn:type:Missing")));
    }

    #[test]
    fn test_ambiguous_root() {
        let mut config = dataset_config();
        add(&mut config, Term::iri("urn:ds2"), RDF_TYPE, Term::iri(ja::RDF_DATASET));

        let assembler = Assembler::new(loader());
        assert!(matches!(
            assembler.assemble_dataset(&config),
            Err(Error::Config(_))
        ));
        // A named resource can still be picked explicitly.
        assert!(assembler.assemble_resource(&config, "urn:ds").is_ok());
    }

    #[test]
    fn test_unregistered_type() {
        let mut config = Graph::new();
        add(&mut config, Term::iri("urn:x"), RDF_TYPE, Term::iri("urn:type:Other"));

        let assembler = Assembler::new(loader());
        let err = assembler.assemble(&config, "urn:type:Other").unwrap_err();
        assert!(matches!(&err, Error::Config(msg) if msg.contains("no assembler")));
    }

    #[test]
    fn test_custom_registration() {
        fn single_graph(
            builder: &DatasetBuilder<MemoryLoader>,
            _config: &Graph,
            _root: &Term,
        ) -> Result<Dataset> {
            Ok(Dataset::from_default_graph(builder.load_graph("urn:data:a", None)?))
        }

        let mut registry = AssemblerRegistry::with_defaults();
        assert!(registry.register("urn:type:Single", single_graph).is_none());
        assert!(registry.contains(ja::RDF_DATASET));

        let assembler = Assembler::with_registry(DatasetBuilder::new(loader()), registry);
        let mut config = Graph::new();
        add(&mut config, Term::iri("urn:x"), RDF_TYPE, Term::iri("urn:type:Single"));

        let ds = assembler.assemble(&config, "urn:type:Single").unwrap();
        assert_eq!(ds.default_graph(), &data("a"));
    }

    #[test]
    fn test_named_graph_without_name() {
        let mut config = dataset_config();
        add(&mut config, Term::iri("urn:ds"), ja::NAMED_GRAPH, Term::blank("n2"));
        add(&mut config, Term::blank("n2"), ja::GRAPH, Term::blank("g1"));

        let assembler = Assembler::new(loader());
        let err = assembler.assemble_dataset(&config).unwrap_err();
        assert!(matches!(&err, Error::Config(msg) if msg.contains("graphName")));
    }

    #[test]
    fn test_load_failure_propagates() {
        let mut config = Graph::new();
        let ds = Term::iri("urn:ds");
        add(&mut config, ds.clone(), RDF_TYPE, Term::iri(ja::RDF_DATASET));
        add(&mut config, ds, ja::DEFAULT_GRAPH, Term::blank("d"));
        add(&mut config, Term::blank("d"), ja::EXTERNAL_CONTENT, Term::iri("urn:data:nope"));

        let assembler = Assembler::new(loader());
        let err = assembler.assemble_dataset(&config).unwrap_err();
        assert_eq!(err.locator(), Some("urn:data:nope"));
    }
}
