//! AIngle Dataset - RDF dataset composition
//!
//! Builds RDF datasets (a default graph plus a collection of named graphs)
//! from heterogeneous sources, and provides the `ENCODE_FOR_URI` transform
//! used by expression evaluation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     AIngle Dataset                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                   Assembler                           │   │
//! │  │  Root lookup │ Type registry │ ja:RDFDataset         │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                 Dataset Builder                       │   │
//! │  │  IRI resolution │ Default union │ Named graphs       │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                  Graph Loaders                        │   │
//! │  │  Memory │ File (Turtle, N-Triples)                   │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                                                              │
//! │  ENCODE_FOR_URI: standalone, no dependencies on the above    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use aingle_dataset::{
//!     encode_for_uri, DatasetBuilder, DatasetGraph, Graph, MemoryLoader, Term, Triple,
//! };
//!
//! let mut people = Graph::new();
//! people.insert(Triple::new(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::literal("Alice"),
//! )?);
//!
//! let loader = MemoryLoader::new().with("http://example.org/people", people);
//! let ds = DatasetBuilder::new(loader).build(
//!     &["people"],
//!     &["people"],
//!     Some("http://example.org/"),
//! )?;
//!
//! assert_eq!(ds.default_graph().len(), 1);
//! assert!(ds.contains_graph("http://example.org/people"));
//!
//! assert_eq!(encode_for_uri(&Term::literal("Los Angeles"))?, "Los%20Angeles");
//! # Ok::<(), aingle_dataset::Error>(())
//! ```

pub mod assembler;
pub mod builder;
pub mod config;
pub mod dataset;
pub mod encode;
pub mod error;
pub mod graph;
pub mod loader;
pub mod source;
pub mod term;
pub mod vocab;

// Re-exports
pub use assembler::{assemble, AssembleFn, Assembler, AssemblerRegistry, Resolver};
pub use builder::DatasetBuilder;
pub use config::BuilderConfig;
pub use dataset::{Dataset, DatasetGraph, DatasetView, GraphView};
pub use encode::{encode_for_uri, encode_for_uri_term, encode_str};
pub use error::{BoxError, Error, Result};
pub use graph::Graph;
pub use loader::{GraphLoader, LoaderError, MemoryLoader};
pub use source::SourceRef;
pub use term::{Literal, Term, Triple};

#[cfg(feature = "rdf")]
pub use loader::{FileLoader, RdfFormat};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
